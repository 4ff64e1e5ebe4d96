//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod campaigns;
pub mod health;

pub use campaigns::{
    campaign_stats_handler, create_campaign_handler, get_campaign_handler,
    list_campaigns_handler, update_status_handler,
};
pub use health::health_handler;
