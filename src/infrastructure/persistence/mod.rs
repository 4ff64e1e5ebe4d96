//! Campaign store implementations.
//!
//! # Repositories
//!
//! - [`PgCampaignRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryCampaignRepository`] - process-local storage for development and tests

pub mod memory_campaign_repository;
pub mod pg_campaign_repository;

pub use memory_campaign_repository::InMemoryCampaignRepository;
pub use pg_campaign_repository::PgCampaignRepository;
