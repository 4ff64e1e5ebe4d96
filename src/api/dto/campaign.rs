//! DTOs for campaign endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Campaign, CampaignStats, CampaignStatus};

/// JSON representation of a stored campaign.
///
/// The id is rendered as an opaque string.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    pub id: String,
    pub name: String,
    pub advertiser: String,
    pub budget: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: CampaignStatus,
    pub impressions: i64,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Campaign> for CampaignResponse {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id.to_string(),
            name: campaign.name,
            advertiser: campaign.advertiser,
            budget: campaign.budget,
            start_date: campaign.start_date,
            end_date: campaign.end_date,
            status: campaign.status,
            impressions: campaign.impressions,
            clicks: campaign.clicks,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}

/// Response of `GET /api/campaigns`.
#[derive(Debug, Serialize)]
pub struct CampaignListResponse {
    pub data: Vec<CampaignResponse>,
    /// Matching campaigns across all pages.
    pub total: i64,
}

/// Response of `GET /api/campaigns/{id}/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub ctr: f64,
    pub cpc: f64,
}

impl From<CampaignStats> for StatsResponse {
    fn from(stats: CampaignStats) -> Self {
        Self {
            ctr: stats.ctr,
            cpc: stats.cpc,
        }
    }
}
