//! Derived campaign metrics.

use crate::domain::entities::{Campaign, CampaignStats};

/// Computes CTR and CPC for a stored campaign.
pub fn compute_stats(campaign: &Campaign) -> CampaignStats {
    stats_from_counters(campaign.impressions, campaign.clicks, campaign.budget)
}

/// Computes CTR and CPC from raw counters.
///
/// A zero denominator yields 0 for the corresponding ratio.
pub fn stats_from_counters(impressions: i64, clicks: i64, budget: f64) -> CampaignStats {
    let ctr = if impressions > 0 {
        (clicks as f64 / impressions as f64) * 100.0
    } else {
        0.0
    };

    let cpc = if clicks > 0 { budget / clicks as f64 } else { 0.0 };

    CampaignStats { ctr, cpc }
}
