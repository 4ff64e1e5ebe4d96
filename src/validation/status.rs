//! Validation of status update values.

use serde_json::Value;

use super::validation_error;
use crate::domain::entities::CampaignStatus;
use crate::error::AppError;

/// Validates a candidate campaign status.
///
/// Absent, `null` and empty values count as missing.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the value is missing or is not one of
/// `active`, `paused`, `finished`.
pub fn validate_status(candidate: Option<&Value>) -> Result<CampaignStatus, AppError> {
    match candidate {
        None | Some(Value::Null) => Err(required()),
        Some(Value::String(s)) if s.is_empty() => Err(required()),
        Some(Value::String(s)) => s.parse::<CampaignStatus>().map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

fn required() -> AppError {
    validation_error(&["\"status\" is required".to_string()])
}

fn invalid() -> AppError {
    validation_error(&[format!(
        "\"status\" must be one of: {}",
        CampaignStatus::allowed_values()
    )])
}
