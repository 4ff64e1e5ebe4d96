//! Repository trait for campaign data access.

use crate::domain::entities::{Campaign, CampaignStatus, NewCampaign};
use crate::error::AppError;
use async_trait::async_trait;

/// Filter and pagination window for campaign listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignFilter {
    pub status: Option<CampaignStatus>,
    pub offset: i64,
    pub limit: i64,
}

impl CampaignFilter {
    /// Creates a filter for a 1-indexed page of `limit` items.
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            status: None,
            offset: (i64::from(page) - 1) * i64::from(limit),
            limit: i64::from(limit),
        }
    }

    /// Restricts the listing to one status.
    pub fn with_status(mut self, status: Option<CampaignStatus>) -> Self {
        self.status = status;
        self
    }
}

/// Repository interface for the campaign collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCampaignRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryCampaignRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Persists a new campaign, assigning its id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign, AppError>;

    /// Finds a campaign by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Campaign))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Campaign>, AppError>;

    /// Lists campaigns matching the filter, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self, filter: CampaignFilter) -> Result<Vec<Campaign>, AppError>;

    /// Counts campaigns, optionally restricted to one status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn count(&self, status: Option<CampaignStatus>) -> Result<i64, AppError>;

    /// Sets the status of a campaign and refreshes `updated_at`.
    ///
    /// Returns `Ok(None)` if no campaign has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn update_status(
        &self,
        id: i64,
        status: CampaignStatus,
    ) -> Result<Option<Campaign>, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_has_zero_offset() {
        let filter = CampaignFilter::page(1, 10);
        assert_eq!(filter.offset, 0);
        assert_eq!(filter.limit, 10);
        assert!(filter.status.is_none());
    }

    #[test]
    fn test_offset_is_page_minus_one_times_limit() {
        let filter = CampaignFilter::page(3, 25);
        assert_eq!(filter.offset, 50);
        assert_eq!(filter.limit, 25);
    }

    #[test]
    fn test_with_status() {
        let filter = CampaignFilter::page(1, 10).with_status(Some(CampaignStatus::Active));
        assert_eq!(filter.status, Some(CampaignStatus::Active));
    }
}
