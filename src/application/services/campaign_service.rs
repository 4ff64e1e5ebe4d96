//! Campaign management service.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::{Campaign, CampaignStats};
use crate::domain::metrics::compute_stats;
use crate::domain::repositories::{CampaignFilter, CampaignRepository};
use crate::error::AppError;
use crate::validation::{
    ListQueryParams, validate_campaign_payload, validate_list_query, validate_status,
};

/// One page of a campaign listing.
#[derive(Debug, Clone)]
pub struct CampaignPage {
    pub campaigns: Vec<Campaign>,
    /// Number of campaigns matching the filter, independent of the page window.
    pub total: i64,
}

/// Service orchestrating validation and persistence for campaigns.
///
/// Lookups by id return `Ok(None)` when the campaign does not exist; callers
/// decide how to report absence.
pub struct CampaignService<R: CampaignRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CampaignRepository + ?Sized> CampaignService<R> {
    /// Creates a new campaign service over the given store.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates a creation payload and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the payload breaks any rule.
    /// Returns [`AppError::Internal`] on store errors.
    #[tracing::instrument(skip_all)]
    pub async fn create_campaign(&self, payload: &Value) -> Result<Campaign, AppError> {
        let new_campaign = validate_campaign_payload(payload)?;
        let campaign = self.repository.create(new_campaign).await?;

        tracing::info!(campaign_id = campaign.id, status = %campaign.status, "Campaign created");

        Ok(campaign)
    }

    /// Lists campaigns, newest first, with the total number of matches.
    ///
    /// The page and the count are fetched concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the query parameters are invalid.
    /// Returns [`AppError::Internal`] on store errors.
    #[tracing::instrument(skip(self))]
    pub async fn list_campaigns(&self, params: &ListQueryParams) -> Result<CampaignPage, AppError> {
        let query = validate_list_query(params)?;
        let filter = CampaignFilter::page(query.page, query.limit).with_status(query.status);

        let (campaigns, total) = tokio::try_join!(
            self.repository.list(filter),
            self.repository.count(query.status)
        )?;

        Ok(CampaignPage { campaigns, total })
    }

    /// Retrieves a campaign by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_campaign(&self, id: i64) -> Result<Option<Campaign>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Validates and applies a status change.
    ///
    /// Every transition between statuses is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the status is missing or unknown.
    /// Returns [`AppError::Internal`] on store errors.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: i64,
        status: Option<&Value>,
    ) -> Result<Option<Campaign>, AppError> {
        let status = validate_status(status)?;
        let updated = self.repository.update_status(id, status).await?;

        if updated.is_some() {
            tracing::info!(campaign_id = id, %status, "Campaign status updated");
        }

        Ok(updated)
    }

    /// Computes CTR and CPC for a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_stats(&self, id: i64) -> Result<Option<CampaignStats>, AppError> {
        Ok(self
            .repository
            .find_by_id(id)
            .await?
            .map(|campaign| compute_stats(&campaign)))
    }

    /// Checks that the underlying store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
