//! HTTP middleware for request processing.
//!
//! Provides request tracing and CORS handling.

pub mod cors;
pub mod tracing;
