//! In-memory implementation of the campaign repository.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::domain::entities::{Campaign, CampaignStatus, NewCampaign};
use crate::domain::repositories::{CampaignFilter, CampaignRepository};
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_id: i64,
    campaigns: Vec<Campaign>,
}

/// A campaign store that lives in process memory.
///
/// Data is lost when the process exits.
///
/// # Use Cases
///
/// - Local development without PostgreSQL (`STORE_BACKEND=memory`)
/// - HTTP and service tests
pub struct InMemoryCampaignRepository {
    inner: Mutex<Inner>,
}

impl InMemoryCampaignRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory campaign store");
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("Campaign store lock poisoned"))
    }
}

impl Default for InMemoryCampaignRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_status(campaign: &Campaign, status: Option<CampaignStatus>) -> bool {
    status.is_none_or(|s| campaign.status == s)
}

#[async_trait]
impl CampaignRepository for InMemoryCampaignRepository {
    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign, AppError> {
        let mut inner = self.lock()?;
        inner.next_id += 1;

        let campaign = new_campaign.into_campaign(inner.next_id, Utc::now());
        inner.campaigns.push(campaign.clone());

        Ok(campaign)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Campaign>, AppError> {
        let inner = self.lock()?;
        Ok(inner.campaigns.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self, filter: CampaignFilter) -> Result<Vec<Campaign>, AppError> {
        let inner = self.lock()?;

        let mut matching: Vec<&Campaign> = inner
            .campaigns
            .iter()
            .filter(|c| matches_status(c, filter.status))
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let offset = usize::try_from(filter.offset).unwrap_or(0);
        let limit = usize::try_from(filter.limit).unwrap_or(0);

        Ok(matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, status: Option<CampaignStatus>) -> Result<i64, AppError> {
        let inner = self.lock()?;
        let count = inner
            .campaigns
            .iter()
            .filter(|c| matches_status(c, status))
            .count();

        Ok(count as i64)
    }

    async fn update_status(
        &self,
        id: i64,
        status: CampaignStatus,
    ) -> Result<Option<Campaign>, AppError> {
        let mut inner = self.lock()?;

        Ok(inner
            .campaigns
            .iter_mut()
            .find(|c| c.id == id)
            .map(|campaign| {
                campaign.status = status;
                campaign.updated_at = Utc::now();
                campaign.clone()
            }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
