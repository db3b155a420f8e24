use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;
use whatsub_db::{
    models::{NewSubscription, Subscription, SubscriptionChanges},
    repositories::subscription,
};

use super::model::SubscriptionCreated;
use crate::{
    ApiState,
    error::ApiError,
    extract::{ApiJson, ApiPath},
    response::MessageResponse,
};

/// Create the subscription routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/subscriptions", post(create_subscription))
        .route(
            "/subscriptions/{subscription_id}",
            get(get_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        )
        .route("/users/{user_id}/subscriptions", get(list_user_subscriptions))
}

async fn create_subscription(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<NewSubscription>,
) -> Result<(StatusCode, Json<SubscriptionCreated>), ApiError> {
    let user_id = payload.user_id;
    let subscription_id = subscription::create_subscription(&state.pool, payload).await?;
    tracing::info!(
        "Created subscription {} for user {}",
        subscription_id,
        user_id
    );

    Ok((
        StatusCode::CREATED,
        Json(SubscriptionCreated {
            subscription_id,
            message: "Subscription created successfully",
        }),
    ))
}

async fn get_subscription(
    State(state): State<ApiState>,
    ApiPath(subscription_id): ApiPath<i64>,
) -> Result<Json<Subscription>, ApiError> {
    subscription::find_subscription(&state.pool, subscription_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Subscription not found"))
}

async fn list_user_subscriptions(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> Result<Json<Vec<Subscription>>, ApiError> {
    let subscriptions = subscription::list_user_subscriptions(&state.pool, user_id).await?;
    Ok(Json(subscriptions))
}

async fn update_subscription(
    State(state): State<ApiState>,
    ApiPath(subscription_id): ApiPath<i64>,
    ApiJson(changes): ApiJson<SubscriptionChanges>,
) -> Result<Json<MessageResponse>, ApiError> {
    subscription::update_subscription(&state.pool, subscription_id, changes).await?;
    Ok(Json(MessageResponse::new("Subscription updated successfully")))
}

async fn delete_subscription(
    State(state): State<ApiState>,
    ApiPath(subscription_id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    subscription::delete_subscription(&state.pool, subscription_id).await?;
    Ok(Json(MessageResponse::new("Subscription deleted successfully")))
}
