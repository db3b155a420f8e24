//! Requests rejected before any query runs. These use a lazily connected pool
//! and pass without a database.

use axum::{http::StatusCode, middleware};
use serde_json::{Value, json};
use whatsub_api::{
    config::Environment,
    middleware::{REQUEST_ID_HEADER, apply_security_headers, request_id_middleware},
    router,
};

use crate::common::{self, TestClient, TestStateBuilder};

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let client = common::offline_client();

    let response = client.get("/nowhere").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "The requested resource was not found" })
    );
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let client = common::offline_client();

    let response = client.post_raw("/users", "{\"username\": ").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(!response.error_message().is_empty());
}

#[tokio::test]
async fn test_missing_required_field_is_400() {
    let client = common::offline_client();

    let response = client
        .post_json("/users", &json!({ "username": "nomail" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("email"));
}

#[tokio::test]
async fn test_wrong_field_type_is_400() {
    let client = common::offline_client();

    let response = client
        .post_json(
            "/reminders",
            &json!({
                "subscription_id": "one",
                "reminder_type": "pre_billing",
                "reminder_date": "2025-01-01",
            }),
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_path_ids_are_400() {
    let client = common::offline_client();

    for uri in [
        "/users/not-a-uuid",
        "/subscriptions/abc",
        "/reminders/1.5",
        "/users/42/reminders",
    ] {
        let response = client.get(uri).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(!response.error_message().is_empty());
    }
}

#[tokio::test]
async fn test_responses_carry_request_id_and_security_headers() {
    let state = TestStateBuilder::new()
        .environment(Environment::Production)
        .lazy();
    let app = apply_security_headers(
        router::router().layer(middleware::from_fn(request_id_middleware)),
        state.environment.clone(),
    )
    .with_state(state);
    let client = TestClient::new(app);

    let response = client.get("/health").await;

    response.assert_status(StatusCode::OK);
    assert!(response.headers.contains_key(REQUEST_ID_HEADER));
    assert_eq!(response.headers["x-content-type-options"], "nosniff");
    assert_eq!(response.headers["x-frame-options"], "DENY");
    assert!(response.headers.contains_key("strict-transport-security"));
}
