use serde::Serialize;

/// Response to `POST /subscriptions`
#[derive(Debug, Serialize)]
pub struct SubscriptionCreated {
    pub subscription_id: i64,
    pub message: &'static str,
}
