//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Request bodies are validated by
//! [`crate::validation`] rather than by typed deserialization, so that every
//! violation can be reported at once.

pub mod campaign;
pub mod health;
