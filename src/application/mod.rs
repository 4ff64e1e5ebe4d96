//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating validation rules
//! and repository calls. Services consume repository traits and provide a
//! clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::campaign_service::CampaignService`] - Campaign creation, listing, status and metrics

pub mod services;
