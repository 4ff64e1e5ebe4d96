//! Validation of campaign creation payloads.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use super::{Violations, exact_integer, number_from_value, validation_error};
use crate::domain::entities::{CampaignStatus, NewCampaign};
use crate::error::AppError;

/// Validates an untyped creation payload and normalizes it.
///
/// # Rules
///
/// - `name`, `advertiser`: required non-blank strings
/// - `budget`: required number `>= 0`
/// - `startDate`, `endDate`: required dates, `endDate >= startDate`
/// - `status`: optional, one of `active | paused | finished`, default `paused`
/// - `impressions`, `clicks`: optional integers `>= 0`, default `0`
///
/// Unknown fields are dropped. Numbers may be given as numeric strings; dates
/// as RFC 3339 timestamps, `YYYY-MM-DD` or epoch milliseconds.
///
/// # Errors
///
/// Returns [`AppError::Validation`] listing every violated rule.
pub fn validate_campaign_payload(payload: &Value) -> Result<NewCampaign, AppError> {
    let Some(fields) = payload.as_object() else {
        return Err(validation_error(&[
            "\"payload\" must be an object".to_string()
        ]));
    };

    let mut violations = Violations::new();

    let name = violations.check(required_text(fields, "name"));
    let advertiser = violations.check(required_text(fields, "advertiser"));
    let budget = violations.check(budget(fields));
    let start_date = violations.check(required_date(fields, "startDate"));
    let end_date = violations.check(required_date(fields, "endDate"));

    if let (Some(start), Some(end)) = (start_date, end_date)
        && end < start
    {
        violations.push("\"endDate\" must be greater than or equal to \"startDate\"");
    }

    let status = violations.check(optional_status(fields));
    let impressions = violations.check(optional_counter(fields, "impressions"));
    let clicks = violations.check(optional_counter(fields, "clicks"));

    match (
        name,
        advertiser,
        budget,
        start_date,
        end_date,
        status,
        impressions,
        clicks,
    ) {
        (
            Some(name),
            Some(advertiser),
            Some(budget),
            Some(start_date),
            Some(end_date),
            Some(status),
            Some(impressions),
            Some(clicks),
        ) if violations.is_empty() => Ok(NewCampaign {
            name,
            advertiser,
            budget,
            start_date,
            end_date,
            status,
            impressions,
            clicks,
        }),
        _ => Err(violations.into_error()),
    }
}

fn required_text(fields: &Map<String, Value>, field: &str) -> Result<String, String> {
    match fields.get(field) {
        None => Err(format!("\"{field}\" is required")),
        Some(Value::String(s)) if s.trim().is_empty() => Err(format!("\"{field}\" is required")),
        Some(Value::String(s)) if s.contains('\0') => {
            Err(format!("\"{field}\" must be a valid string"))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(format!("\"{field}\" must be a string")),
    }
}

fn budget(fields: &Map<String, Value>) -> Result<f64, String> {
    let value = fields
        .get("budget")
        .ok_or_else(|| "\"budget\" is required".to_string())?;
    let budget =
        number_from_value(value).ok_or_else(|| "\"budget\" must be a number".to_string())?;

    if budget < 0.0 {
        return Err("\"budget\" must be greater than or equal to 0".to_string());
    }

    Ok(budget)
}

fn required_date(fields: &Map<String, Value>, field: &str) -> Result<DateTime<Utc>, String> {
    let value = fields
        .get(field)
        .ok_or_else(|| format!("\"{field}\" is required"))?;

    date_from_value(value).ok_or_else(|| format!("\"{field}\" must be a valid date"))
}

fn optional_status(fields: &Map<String, Value>) -> Result<CampaignStatus, String> {
    match fields.get("status") {
        None => Ok(CampaignStatus::default()),
        Some(Value::String(s)) => s.parse::<CampaignStatus>().map_err(|_| status_message()),
        Some(_) => Err(status_message()),
    }
}

fn status_message() -> String {
    format!(
        "\"status\" must be one of: {}",
        CampaignStatus::allowed_values()
    )
}

fn optional_counter(fields: &Map<String, Value>, field: &str) -> Result<i64, String> {
    let Some(value) = fields.get(field) else {
        return Ok(0);
    };

    let n = number_from_value(value).ok_or_else(|| format!("\"{field}\" must be a number"))?;

    if n < 0.0 {
        return Err(format!("\"{field}\" must be greater than or equal to 0"));
    }

    if n.fract() != 0.0 {
        return Err(format!("\"{field}\" must be an integer"));
    }

    exact_integer(n).ok_or_else(|| format!("\"{field}\" must be a safe integer"))
}

/// Years a PostgreSQL `TIMESTAMPTZ` can hold (4713 BC is year -4712).
const MIN_STORABLE_YEAR: i32 = -4712;
const MAX_STORABLE_YEAR: i32 = 294_275;

/// Parses a date from a JSON string or epoch-milliseconds number.
///
/// Dates outside the storable range are rejected.
fn date_from_value(value: &Value) -> Option<DateTime<Utc>> {
    let date = match value {
        Value::String(s) => date_from_str(s.trim()),
        Value::Number(n) => epoch_millis(n).and_then(DateTime::from_timestamp_millis),
        _ => None,
    }?;

    (MIN_STORABLE_YEAR..=MAX_STORABLE_YEAR)
        .contains(&date.year())
        .then_some(date)
}

/// Whole epoch milliseconds, also when written as a float such as `1.7e12`.
fn epoch_millis(n: &serde_json::Number) -> Option<i64> {
    n.as_i64().or_else(|| n.as_f64().and_then(exact_integer))
}

fn date_from_str(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
