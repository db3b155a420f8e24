use std::time::Duration;

use axum::{BoxError, Router, error_handling::HandleErrorLayer};
use tower::{ServiceBuilder, timeout::error::Elapsed};

use crate::error::ApiError;

/// Abort requests that run longer than `duration`. The client gets a 408 in
/// the usual `{"error": ...}` shape.
pub fn apply_timeout<S>(router: Router<S>, duration: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout_error))
            .timeout(duration),
    )
}

async fn handle_timeout_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::BadRequest(err.to_string())
    }
}
