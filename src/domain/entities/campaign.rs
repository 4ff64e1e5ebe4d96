//! Campaign entity and its lifecycle status.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a campaign.
///
/// Any status may be changed to any other one; `finished` is not terminal
/// on the server side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    #[default]
    Paused,
    Finished,
}

impl CampaignStatus {
    /// All accepted statuses, in display order.
    pub const ALL: [CampaignStatus; 3] = [
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Finished,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Finished => "finished",
        }
    }

    /// Comma separated list of accepted values, used in error messages.
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(CampaignStatus::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`CampaignStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown campaign status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for CampaignStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(CampaignStatus::Active),
            "paused" => Ok(CampaignStatus::Paused),
            "finished" => Ok(CampaignStatus::Finished),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A stored advertising campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: i64,
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

/// Validated input for creating a campaign.
///
/// Only produced by [`crate::validation::validate_campaign_payload`], so every
/// instance already satisfies the data model invariants. Serializes back to the
/// same wire shape it was parsed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub name: String,
    pub advertiser: String,
    pub budget: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: CampaignStatus,
    pub impressions: i64,
    pub clicks: i64,
}

impl NewCampaign {
    /// Turns the payload into a stored record with the given id and write time.
    pub fn into_campaign(self, id: i64, now: DateTime<Utc>) -> Campaign {
        Campaign {
            id,
            name: self.name,
            advertiser: self.advertiser,
            budget: self.budget,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            impressions: self.impressions,
            clicks: self.clicks,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Derived performance ratios of a campaign.
///
/// Values are not rounded; formatting is left to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CampaignStats {
    /// Click-through rate, in percent.
    pub ctr: f64,
    /// Cost per click, in budget units.
    pub cpc: f64,
}
