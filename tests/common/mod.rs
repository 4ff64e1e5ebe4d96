#![allow(dead_code)]

use adtech_campaigns::domain::entities::{Campaign, CampaignStatus, NewCampaign};
use adtech_campaigns::domain::repositories::CampaignRepository;
use adtech_campaigns::infrastructure::persistence::InMemoryCampaignRepository;
use adtech_campaigns::routes::router;
use adtech_campaigns::state::AppState;
use axum_test::TestServer;
use chrono::{Duration, TimeZone, Utc};
use serde_json::{Value, json};
use std::sync::Arc;

pub fn create_test_repository() -> Arc<InMemoryCampaignRepository> {
    Arc::new(InMemoryCampaignRepository::new())
}

pub fn create_test_state(repository: Arc<InMemoryCampaignRepository>) -> AppState {
    AppState::new(repository)
}

/// Full application router over the given in-memory store.
pub fn make_server(repository: Arc<InMemoryCampaignRepository>) -> TestServer {
    let app = router(create_test_state(repository), &[], None);
    TestServer::new(app).unwrap()
}

pub fn valid_payload() -> Value {
    json!({
        "name": "CTV Q2",
        "advertiser": "RetailSpot",
        "budget": 500,
        "startDate": "2026-04-01",
        "endDate": "2026-04-30",
    })
}

pub fn new_campaign(name: &str, status: CampaignStatus) -> NewCampaign {
    let start = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
    NewCampaign {
        name: name.to_string(),
        advertiser: "RetailSpot".to_string(),
        budget: 500.0,
        start_date: start,
        end_date: start + Duration::days(29),
        status,
        impressions: 1000,
        clicks: 25,
    }
}

/// Inserts `count` campaigns named `c0`, `c1`, ... in that order.
pub async fn seed_campaigns(
    repository: &InMemoryCampaignRepository,
    count: usize,
    status: CampaignStatus,
) -> Vec<Campaign> {
    let mut created = Vec::with_capacity(count);
    for i in 0..count {
        created.push(
            repository
                .create(new_campaign(&format!("c{i}"), status))
                .await
                .unwrap(),
        );
    }
    created
}
