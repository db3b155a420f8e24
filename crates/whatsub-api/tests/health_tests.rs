use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::common;

#[tokio::test]
async fn test_health_does_not_need_the_database() {
    let client = common::offline_client();

    let response = client.get("/health").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_readiness_reports_ready_with_a_database() {
    let client = common::client().await;

    let response = client.get("/health/ready").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ready" }));
}
