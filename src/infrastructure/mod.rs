//! Infrastructure layer for external integrations.
//!
//! This layer implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Campaign store implementations (PostgreSQL and in-memory)

pub mod persistence;
