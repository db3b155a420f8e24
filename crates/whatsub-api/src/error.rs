use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use whatsub_db::DbError;

/// Every handler failure ends up here and is rendered as `{"error": "..."}`.
///
/// Store failures are not told apart by kind: any of them is a 400 carrying
/// the error text. Only an explicit absent-row check produces a 404, and
/// only the request timeout produces a 408.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Database(#[from] DbError),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    BadRequest(String),
    #[error("Request timed out")]
    Timeout,
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Database(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(err) => tracing::error!("Database error: {}", err),
            Self::BadRequest(msg) => tracing::debug!("Rejected request: {}", msg),
            Self::Timeout => tracing::warn!("Request timed out"),
            Self::NotFound(_) => {}
        }

        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
