use serde::Serialize;
use uuid::Uuid;

/// Response to `POST /users`
#[derive(Debug, Serialize)]
pub struct UserCreated {
    pub user_id: Uuid,
    pub message: &'static str,
}
