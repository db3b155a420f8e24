use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;
use whatsub_db::{
    models::{NewUser, User, UserChanges},
    repositories::user,
};

use super::model::UserCreated;
use crate::{
    ApiState,
    error::ApiError,
    extract::{ApiJson, ApiPath},
    response::MessageResponse,
};

/// Create the user routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

async fn create_user(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<UserCreated>), ApiError> {
    let user_id = user::create_user(&state.pool, payload).await?;
    tracing::info!("Created user {}", user_id);

    Ok((
        StatusCode::CREATED,
        Json(UserCreated {
            user_id,
            message: "User created successfully",
        }),
    ))
}

async fn get_user(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> Result<Json<User>, ApiError> {
    user::find_user(&state.pool, user_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("User not found"))
}

async fn list_users(State(state): State<ApiState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = user::list_users(&state.pool).await?;
    Ok(Json(users))
}

async fn update_user(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiJson(changes): ApiJson<UserChanges>,
) -> Result<Json<MessageResponse>, ApiError> {
    user::update_user(&state.pool, user_id, changes).await?;
    Ok(Json(MessageResponse::new("User updated successfully")))
}

async fn delete_user(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = user::delete_user(&state.pool, user_id).await?;
    tracing::info!("Deleted user {} (rows removed: {})", user_id, deleted);
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
