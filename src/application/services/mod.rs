//! Business logic services for the application layer.

pub mod campaign_service;

pub use campaign_service::{CampaignPage, CampaignService};
