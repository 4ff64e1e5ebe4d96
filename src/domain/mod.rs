//! Domain layer containing business entities and logic.
//!
//! It defines entities, repository interfaces, and the derived-metrics
//! calculator, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`metrics`] - CTR / CPC computation
//!
//! Input validation lives in [`crate::validation`]; orchestration lives in
//! [`crate::application::services`].

pub mod entities;
pub mod metrics;
pub mod repositories;
