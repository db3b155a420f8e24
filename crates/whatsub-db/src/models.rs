use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Patch;

/// User model - owns subscriptions
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Generated by the server before insert (UUID v4)
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Subscription model - a recurring service a user pays for
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Subscription {
    /// Assigned by the store (BIGSERIAL)
    pub subscription_id: i64,
    /// Owning user
    pub user_id: Uuid,
    pub name: String,
    pub url: Option<String>,
    /// Free-form account label, e.g. the login used for the service
    pub account: Option<String>,
    pub billing_date: Option<NaiveDate>,
    /// Stored as NUMERIC(10,2), read back as float8. Digits past the second
    /// decimal place are rounded half away from zero on write (12.345 → 12.35).
    pub price: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Reminder model - a dated notice attached to a subscription
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reminder {
    /// Assigned by the store (BIGSERIAL)
    pub reminder_id: i64,
    /// Owning subscription
    pub subscription_id: i64,
    /// Free-form tag (e.g. "pre_billing", "after_payment")
    pub reminder_type: String,
    pub reminder_date: NaiveDate,
    pub message: Option<String>,
    pub is_sent: bool,
    pub created_at: DateTime<Utc>,
}

/// Body of a user creation; the id and timestamp are assigned on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
}

/// The owning user must exist; the foreign key rejects the insert otherwise.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSubscription {
    pub user_id: Uuid,
    pub name: String,
    pub url: Option<String>,
    pub account: Option<String>,
    pub billing_date: Option<NaiveDate>,
    /// Rounded to two decimal places by the store.
    pub price: Option<f64>,
}

/// The owning subscription must exist; the foreign key rejects the insert otherwise.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReminder {
    pub subscription_id: i64,
    pub reminder_type: String,
    pub reminder_date: NaiveDate,
    pub message: Option<String>,
}

/// Partial update of a user. Only `phone` can be cleared with `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserChanges {
    pub username: Patch<String>,
    pub email: Patch<String>,
    pub phone: Patch<Option<String>>,
}

/// Partial update of a subscription. Every field but `name` can be cleared
/// with `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubscriptionChanges {
    pub name: Patch<String>,
    pub url: Patch<Option<String>>,
    pub account: Patch<Option<String>>,
    pub billing_date: Patch<Option<NaiveDate>>,
    pub price: Patch<Option<f64>>,
}

/// Partial update of a reminder. Only `message` can be cleared with `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReminderChanges {
    pub reminder_type: Patch<String>,
    pub reminder_date: Patch<NaiveDate>,
    pub message: Patch<Option<String>>,
    pub is_sent: Patch<bool>,
}
