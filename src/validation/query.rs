//! Validation of campaign list query parameters.

use serde::Deserialize;

use super::{Violations, exact_integer, number_from_str};
use crate::domain::entities::CampaignStatus;
use crate::error::AppError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Raw list query string, as decoded from `?status=&page=&limit=`.
///
/// Values stay textual so that malformed numbers are reported by the
/// validation rules instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQueryParams {
    pub status: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Normalized listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub status: Option<CampaignStatus>,
    pub page: u32,
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            status: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Validates list parameters and applies defaults.
///
/// # Defaults
///
/// - `page`: 1
/// - `limit`: 10
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `status` is not an accepted value,
/// `page` is not an integer `>= 1`, or `limit` is not an integer in `[1, 100]`.
pub fn validate_list_query(params: &ListQueryParams) -> Result<ListQuery, AppError> {
    let mut violations = Violations::new();

    let status = violations.check(match params.status.as_deref() {
        None => Ok(None),
        Some(raw) => raw.parse::<CampaignStatus>().map(Some).map_err(|_| {
            format!(
                "\"status\" must be one of: {}",
                CampaignStatus::allowed_values()
            )
        }),
    });

    let page = violations.check(bounded_integer(
        "page",
        params.page.as_deref(),
        DEFAULT_PAGE,
        1,
        u32::MAX,
    ));

    let limit = violations.check(bounded_integer(
        "limit",
        params.limit.as_deref(),
        DEFAULT_LIMIT,
        1,
        MAX_LIMIT,
    ));

    match (status, page, limit) {
        (Some(status), Some(page), Some(limit)) if violations.is_empty() => {
            Ok(ListQuery {
                status,
                page,
                limit,
            })
        }
        _ => Err(violations.into_error()),
    }
}

fn bounded_integer(
    field: &str,
    raw: Option<&str>,
    default: u32,
    min: u32,
    max: u32,
) -> Result<u32, String> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    let n = number_from_str(raw).ok_or_else(|| format!("\"{field}\" must be a number"))?;
    let n = exact_integer(n).ok_or_else(|| format!("\"{field}\" must be an integer"))?;

    if n < i64::from(min) {
        return Err(format!(
            "\"{field}\" must be greater than or equal to {min}"
        ));
    }
    if n > i64::from(max) {
        return Err(format!("\"{field}\" must be less than or equal to {max}"));
    }

    u32::try_from(n).map_err(|_| format!("\"{field}\" must be less than or equal to {max}"))
}
