//! Repository trait definitions for the domain layer.
//!
//! The [`CampaignRepository`] trait is the store handle injected into
//! [`crate::application::services::CampaignService`]. Implementations live in
//! `crate::infrastructure::persistence`.
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` under `cfg(test)`.
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod campaign_repository;

pub use campaign_repository::{CampaignFilter, CampaignRepository};

#[cfg(test)]
pub use campaign_repository::MockCampaignRepository;
