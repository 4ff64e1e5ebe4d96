mod common;

use adtech_campaigns::domain::entities::CampaignStatus;
use adtech_campaigns::routes::app_router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

// ─── POST /api/campaigns ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_campaign_success() {
    let server = common::make_server(common::create_test_repository());

    let response = server
        .post("/api/campaigns")
        .json(&common::valid_payload())
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["id"], "1");
    assert_eq!(json["name"], "CTV Q2");
    assert_eq!(json["advertiser"], "RetailSpot");
    assert_eq!(json["budget"], 500.0);
    assert_eq!(json["status"], "paused");
    assert_eq!(json["impressions"], 0);
    assert_eq!(json["clicks"], 0);
    assert!(json["startDate"].as_str().unwrap().starts_with("2026-04-01"));
    assert!(json["createdAt"].is_string());
    assert_eq!(json["createdAt"], json["updatedAt"]);
}

#[tokio::test]
async fn test_create_campaign_strips_unknown_fields() {
    let server = common::make_server(common::create_test_repository());

    let mut payload = common::valid_payload();
    payload["owner"] = json!("someone");

    let response = server.post("/api/campaigns").json(&payload).await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.json::<Value>().get("owner").is_none());
}

#[tokio::test]
async fn test_create_campaign_reports_every_violation() {
    let server = common::make_server(common::create_test_repository());

    let response = server
        .post("/api/campaigns")
        .json(&json!({
            "budget": -1,
            "startDate": "2026-04-30",
            "endDate": "2026-04-01",
            "status": "archived",
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(
        json["error"],
        "\"name\" is required, \
         \"advertiser\" is required, \
         \"budget\" must be greater than or equal to 0, \
         \"endDate\" must be greater than or equal to \"startDate\", \
         \"status\" must be one of: active, paused, finished"
    );
}

#[tokio::test]
async fn test_create_campaign_invalid_payload_is_not_stored() {
    let repository = common::create_test_repository();
    let server = common::make_server(repository.clone());

    server
        .post("/api/campaigns")
        .json(&json!({ "name": "only a name" }))
        .await
        .assert_status_bad_request();

    let list = server.get("/api/campaigns").await.json::<Value>();
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn test_create_campaign_malformed_json() {
    let server = common::make_server(common::create_test_repository());

    let response = server
        .post("/api/campaigns")
        .text("{\"name\": ")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["error"].is_string());
}

// ─── GET /api/campaigns ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_campaigns_second_page() {
    let repository = common::create_test_repository();
    common::seed_campaigns(&repository, 15, CampaignStatus::Active).await;

    let server = common::make_server(repository);
    let response = server
        .get("/api/campaigns")
        .add_query_param("page", 2)
        .add_query_param("limit", 10)
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["total"], 15);

    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["c4", "c3", "c2", "c1", "c0"]);
}

#[tokio::test]
async fn test_list_campaigns_defaults_and_newest_first() {
    let repository = common::create_test_repository();
    common::seed_campaigns(&repository, 12, CampaignStatus::Paused).await;

    let server = common::make_server(repository);
    let json = server.get("/api/campaigns").await.json::<Value>();

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 10);
    assert_eq!(json["total"], 12);
    assert_eq!(data[0]["name"], "c11");
}

#[tokio::test]
async fn test_list_campaigns_filtered_by_status() {
    let repository = common::create_test_repository();
    common::seed_campaigns(&repository, 3, CampaignStatus::Active).await;
    common::seed_campaigns(&repository, 2, CampaignStatus::Finished).await;

    let server = common::make_server(repository);
    let json = server
        .get("/api/campaigns")
        .add_query_param("status", "finished")
        .await
        .json::<Value>();

    assert_eq!(json["total"], 2);
    assert!(
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|c| c["status"] == "finished")
    );
}

#[tokio::test]
async fn test_list_campaigns_empty() {
    let server = common::make_server(common::create_test_repository());

    let response = server.get("/api/campaigns").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "data": [], "total": 0 }));
}

#[tokio::test]
async fn test_list_campaigns_invalid_query() {
    let server = common::make_server(common::create_test_repository());

    let response = server
        .get("/api/campaigns")
        .add_query_param("limit", 500)
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"],
        "\"limit\" must be less than or equal to 100"
    );

    server
        .get("/api/campaigns")
        .add_query_param("status", "archived")
        .await
        .assert_status_bad_request();

    server
        .get("/api/campaigns")
        .add_query_param("page", "two")
        .await
        .assert_status_bad_request();
}

// ─── GET /api/campaigns/{id} ─────────────────────────────────────────────────

#[tokio::test]
async fn test_get_campaign_success() {
    let repository = common::create_test_repository();
    let created = common::seed_campaigns(&repository, 2, CampaignStatus::Active).await;

    let server = common::make_server(repository);
    let response = server
        .get(&format!("/api/campaigns/{}", created[1].id))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["id"], created[1].id.to_string());
    assert_eq!(json["name"], "c1");
}

#[tokio::test]
async fn test_get_campaign_not_found() {
    let server = common::make_server(common::create_test_repository());

    let response = server.get("/api/campaigns/999").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_get_campaign_malformed_id_is_not_found() {
    let server = common::make_server(common::create_test_repository());

    server
        .get("/api/campaigns/not-an-id")
        .await
        .assert_status_not_found();
}

// ─── PATCH /api/campaigns/{id}/status ────────────────────────────────────────

#[tokio::test]
async fn test_update_status_success() {
    let repository = common::create_test_repository();
    let created = common::seed_campaigns(&repository, 1, CampaignStatus::Paused).await;
    let id = created[0].id;

    let server = common::make_server(repository);
    let response = server
        .patch(&format!("/api/campaigns/{id}/status"))
        .json(&json!({ "status": "active" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "active");

    let fetched = server
        .get(&format!("/api/campaigns/{id}"))
        .await
        .json::<Value>();
    assert_eq!(fetched["status"], "active");
}

#[tokio::test]
async fn test_update_status_finished_can_be_reopened() {
    let repository = common::create_test_repository();
    let created = common::seed_campaigns(&repository, 1, CampaignStatus::Finished).await;

    let server = common::make_server(repository);
    let response = server
        .patch(&format!("/api/campaigns/{}/status", created[0].id))
        .json(&json!({ "status": "paused" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "paused");
}

#[tokio::test]
async fn test_update_status_unknown_id() {
    let server = common::make_server(common::create_test_repository());

    let response = server
        .patch("/api/campaigns/42/status")
        .json(&json!({ "status": "active" }))
        .await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_update_status_invalid_value() {
    let repository = common::create_test_repository();
    let created = common::seed_campaigns(&repository, 1, CampaignStatus::Paused).await;

    let server = common::make_server(repository);
    let response = server
        .patch(&format!("/api/campaigns/{}/status", created[0].id))
        .json(&json!({ "status": "archived" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "error": "\"status\" must be one of: active, paused, finished"
    }));
}

#[tokio::test]
async fn test_update_status_missing_value() {
    let repository = common::create_test_repository();
    let created = common::seed_campaigns(&repository, 1, CampaignStatus::Paused).await;

    let server = common::make_server(repository);
    let response = server
        .patch(&format!("/api/campaigns/{}/status", created[0].id))
        .json(&json!({}))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "\"status\" is required" }));
}

// ─── GET /api/campaigns/{id}/stats ───────────────────────────────────────────

#[tokio::test]
async fn test_stats_success() {
    let repository = common::create_test_repository();
    let created = common::seed_campaigns(&repository, 1, CampaignStatus::Active).await;

    let server = common::make_server(repository);
    let response = server
        .get(&format!("/api/campaigns/{}/stats", created[0].id))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "ctr": 2.5, "cpc": 20.0 }));
}

#[tokio::test]
async fn test_stats_without_delivery_are_zero() {
    let server = common::make_server(common::create_test_repository());

    let created = server
        .post("/api/campaigns")
        .json(&common::valid_payload())
        .await
        .json::<Value>();

    let response = server
        .get(&format!("/api/campaigns/{}/stats", created["id"].as_str().unwrap()))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "ctr": 0.0, "cpc": 0.0 }));
}

#[tokio::test]
async fn test_stats_not_found() {
    let server = common::make_server(common::create_test_repository());

    server
        .get("/api/campaigns/7/stats")
        .await
        .assert_status_not_found();
}

// ─── Router ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let state = common::create_test_state(common::create_test_repository());
    let app = app_router(state, &[], None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/campaigns/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_without_static_dir() {
    let server = common::make_server(common::create_test_repository());

    server.get("/dashboard").await.assert_status_not_found();
}
