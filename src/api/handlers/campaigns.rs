//! Handlers for campaign endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::Value;

use crate::api::dto::campaign::{CampaignListResponse, CampaignResponse, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::validation::{ListQueryParams, validate_status};

/// Parses a path identifier; anything that is not a valid id names no campaign.
fn parse_campaign_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

fn campaign_not_found() -> AppError {
    AppError::not_found("Not found")
}

/// Creates a campaign.
///
/// # Endpoint
///
/// `POST /api/campaigns`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "CTV Q2",
///   "advertiser": "RetailSpot",
///   "budget": 15000,
///   "startDate": "2026-04-01",
///   "endDate": "2026-04-30",
///   "status": "active",      // optional, default "paused"
///   "impressions": 100000,   // optional, default 0
///   "clicks": 2500           // optional, default 0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request listing every violated rule.
pub async fn create_campaign_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CampaignResponse>), AppError> {
    let Json(payload) = payload?;

    let campaign = state.campaign_service.create_campaign(&payload).await?;

    Ok((StatusCode::CREATED, Json(campaign.into())))
}

/// Lists campaigns, newest first.
///
/// # Endpoint
///
/// `GET /api/campaigns`
///
/// # Query Parameters
///
/// - `status` (optional): `active`, `paused` or `finished`
/// - `page` (optional): Page number (default: 1)
/// - `limit` (optional): Items per page (default: 10, max: 100)
///
/// # Response
///
/// `{ "data": [...], "total": n }` where `total` counts every match.
///
/// # Errors
///
/// Returns 400 Bad Request if the query parameters are invalid.
pub async fn list_campaigns_handler(
    State(state): State<AppState>,
    params: Result<Query<ListQueryParams>, QueryRejection>,
) -> Result<Json<CampaignListResponse>, AppError> {
    let Query(params) = params?;

    let page = state.campaign_service.list_campaigns(&params).await?;

    Ok(Json(CampaignListResponse {
        data: page.campaigns.into_iter().map(Into::into).collect(),
        total: page.total,
    }))
}

/// Retrieves one campaign.
///
/// # Endpoint
///
/// `GET /api/campaigns/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no campaign has this id.
pub async fn get_campaign_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CampaignResponse>, AppError> {
    let Some(id) = parse_campaign_id(&id) else {
        return Err(campaign_not_found());
    };

    state
        .campaign_service
        .get_campaign(id)
        .await?
        .map(|campaign| Json(campaign.into()))
        .ok_or_else(campaign_not_found)
}

/// Changes the status of a campaign.
///
/// # Endpoint
///
/// `PATCH /api/campaigns/{id}/status`
///
/// # Request Body
///
/// ```json
/// { "status": "active" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the status is missing or unknown.
/// Returns 404 Not Found if no campaign has this id.
pub async fn update_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CampaignResponse>, AppError> {
    let Json(payload) = payload?;
    let status = payload.get("status");

    let updated = match parse_campaign_id(&id) {
        Some(id) => state.campaign_service.update_status(id, status).await?,
        None => {
            validate_status(status)?;
            None
        }
    };

    updated
        .map(|campaign| Json(campaign.into()))
        .ok_or_else(campaign_not_found)
}

/// Returns derived metrics of a campaign.
///
/// # Endpoint
///
/// `GET /api/campaigns/{id}/stats`
///
/// # Response
///
/// ```json
/// { "ctr": 2.5, "cpc": 20.0 }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if no campaign has this id.
pub async fn campaign_stats_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let Some(id) = parse_campaign_id(&id) else {
        return Err(campaign_not_found());
    };

    state
        .campaign_service
        .get_stats(id)
        .await?
        .map(|stats| Json(stats.into()))
        .ok_or_else(campaign_not_found)
}
