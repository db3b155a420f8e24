use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;
use whatsub_db::{
    models::{NewReminder, Reminder, ReminderChanges},
    repositories::reminder,
};

use super::model::ReminderCreated;
use crate::{
    ApiState,
    error::ApiError,
    extract::{ApiJson, ApiPath},
    response::MessageResponse,
};

/// Create the reminder routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/reminders", post(create_reminder))
        .route(
            "/reminders/{reminder_id}",
            get(get_reminder).put(update_reminder).delete(delete_reminder),
        )
        .route(
            "/subscriptions/{subscription_id}/reminders",
            get(list_subscription_reminders),
        )
        .route("/users/{user_id}/reminders", get(list_user_reminders))
}

async fn create_reminder(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<NewReminder>,
) -> Result<(StatusCode, Json<ReminderCreated>), ApiError> {
    let reminder_id = reminder::create_reminder(&state.pool, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReminderCreated {
            reminder_id,
            message: "Reminder created successfully",
        }),
    ))
}

async fn get_reminder(
    State(state): State<ApiState>,
    ApiPath(reminder_id): ApiPath<i64>,
) -> Result<Json<Reminder>, ApiError> {
    reminder::find_reminder(&state.pool, reminder_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Reminder not found"))
}

async fn list_subscription_reminders(
    State(state): State<ApiState>,
    ApiPath(subscription_id): ApiPath<i64>,
) -> Result<Json<Vec<Reminder>>, ApiError> {
    let reminders = reminder::list_subscription_reminders(&state.pool, subscription_id).await?;
    Ok(Json(reminders))
}

async fn list_user_reminders(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> Result<Json<Vec<Reminder>>, ApiError> {
    let reminders = reminder::list_user_reminders(&state.pool, user_id).await?;
    Ok(Json(reminders))
}

async fn update_reminder(
    State(state): State<ApiState>,
    ApiPath(reminder_id): ApiPath<i64>,
    ApiJson(changes): ApiJson<ReminderChanges>,
) -> Result<Json<MessageResponse>, ApiError> {
    reminder::update_reminder(&state.pool, reminder_id, changes).await?;
    Ok(Json(MessageResponse::new("Reminder updated successfully")))
}

async fn delete_reminder(
    State(state): State<ApiState>,
    ApiPath(reminder_id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    reminder::delete_reminder(&state.pool, reminder_id).await?;
    Ok(Json(MessageResponse::new("Reminder deleted successfully")))
}
