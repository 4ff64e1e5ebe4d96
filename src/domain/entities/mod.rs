//! Core domain entities.
//!
//! The service manages a single entity, the advertising [`Campaign`].
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! - [`NewCampaign`] - a validated, normalized payload ready to be persisted
//! - [`Campaign`] - a stored record with its store-assigned id and timestamps

pub mod campaign;

pub use campaign::{Campaign, CampaignStats, CampaignStatus, NewCampaign, UnknownStatus};
