//! API route configuration.

use crate::api::handlers::{
    campaign_stats_handler, create_campaign_handler, get_campaign_handler,
    list_campaigns_handler, update_status_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};

/// Campaign routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST  /campaigns`             - Create a campaign
/// - `GET   /campaigns`             - List campaigns (filtered, paginated)
/// - `GET   /campaigns/{id}`        - Retrieve one campaign
/// - `PATCH /campaigns/{id}/status` - Change campaign status
/// - `GET   /campaigns/{id}/stats`  - CTR and CPC of a campaign
pub fn campaign_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/campaigns",
            get(list_campaigns_handler).post(create_campaign_handler),
        )
        .route("/campaigns/{id}", get(get_campaign_handler))
        .route("/campaigns/{id}/status", patch(update_status_handler))
        .route("/campaigns/{id}/stats", get(campaign_stats_handler))
}
