//! Input validation rules.
//!
//! Every rule runs eagerly over the whole input and collects all violations
//! before failing, so a single [`AppError::Validation`] reports everything that
//! is wrong with a request. Messages name the offending field in quotes and are
//! joined with `", "`.
//!
//! - [`validate_campaign_payload`] - creation payload → [`NewCampaign`](crate::domain::entities::NewCampaign)
//! - [`validate_status`] - status update value → [`CampaignStatus`](crate::domain::entities::CampaignStatus)
//! - [`validate_list_query`] - list query string → [`ListQuery`]

pub mod campaign;
pub mod query;
pub mod status;

pub use campaign::validate_campaign_payload;
pub use query::{
    DEFAULT_LIMIT, DEFAULT_PAGE, ListQuery, ListQueryParams, MAX_LIMIT, validate_list_query,
};
pub use status::validate_status;

use serde_json::Value;

use crate::error::AppError;

/// Largest integer an IEEE double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Ordered list of rule violations found while validating one input.
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// Records the error of a failed rule and returns the value of a passed one.
    pub fn check<T>(&mut self, outcome: Result<T, String>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.push(message);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// Builds the bad-request error carrying every collected message.
    pub fn into_error(self) -> AppError {
        validation_error(&self.0)
    }
}

/// Creates a validation error from one or more rule messages.
pub fn validation_error(messages: &[String]) -> AppError {
    AppError::bad_request(messages.join(", "))
}

/// Reads a JSON value as a number, accepting numeric strings.
pub(crate) fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => number_from_str(s),
        _ => None,
    }
}

/// Parses a finite number from text such as a query string parameter.
pub(crate) fn number_from_str(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Converts a whole number to an integer, rejecting fractions and values
/// outside the exactly representable range.
pub(crate) fn exact_integer(n: f64) -> Option<i64> {
    (n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER).then_some(n as i64)
}
