use serde::Serialize;

/// Response to `POST /reminders`
#[derive(Debug, Serialize)]
pub struct ReminderCreated {
    pub reminder_id: i64,
    pub message: &'static str,
}
