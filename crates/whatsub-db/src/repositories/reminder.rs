use chrono::Utc;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    DbError, UpdateBuilder, executor,
    models::{NewReminder, Reminder, ReminderChanges},
};

/// New reminders always start unsent.
pub async fn create_reminder<'e, E>(executor: E, new_reminder: NewReminder) -> Result<i64, DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    executor::run(
        "reminders.create",
        sqlx::query_scalar(
            // language=PostgreSQL
            r#"
                INSERT INTO reminders (subscription_id, reminder_type, reminder_date, message, is_sent, created_at)
                VALUES ($1, $2, $3, $4, FALSE, $5)
                RETURNING reminder_id
            "#,
        )
        .bind(new_reminder.subscription_id)
        .bind(new_reminder.reminder_type)
        .bind(new_reminder.reminder_date)
        .bind(new_reminder.message)
        .bind(Utc::now())
        .fetch_one(executor),
    )
    .await
}

/// `Ok(None)` when no reminder has this id.
pub async fn find_reminder<'e, E>(executor: E, reminder_id: i64) -> Result<Option<Reminder>, DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    executor::run(
        "reminders.find",
        sqlx::query_as(
            // language=PostgreSQL
            r#"
                SELECT reminder_id, subscription_id, reminder_type, reminder_date, message, is_sent, created_at
                FROM reminders
                WHERE reminder_id = $1
            "#,
        )
        .bind(reminder_id)
        .fetch_optional(executor),
    )
    .await
}

/// A subscription's reminders, earliest date first.
pub async fn list_subscription_reminders<'e, E>(
    executor: E,
    subscription_id: i64,
) -> Result<Vec<Reminder>, DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    executor::run(
        "reminders.list_for_subscription",
        sqlx::query_as(
            // language=PostgreSQL
            r#"
                SELECT reminder_id, subscription_id, reminder_type, reminder_date, message, is_sent, created_at
                FROM reminders
                WHERE subscription_id = $1
                ORDER BY reminder_date ASC, reminder_id ASC
            "#,
        )
        .bind(subscription_id)
        .fetch_all(executor),
    )
    .await
}

/// Reminders across all of a user's subscriptions, earliest date first.
pub async fn list_user_reminders<'e, E>(executor: E, user_id: Uuid) -> Result<Vec<Reminder>, DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    executor::run(
        "reminders.list_for_user",
        sqlx::query_as(
            // language=PostgreSQL
            r#"
                SELECT r.reminder_id, r.subscription_id, r.reminder_type, r.reminder_date,
                       r.message, r.is_sent, r.created_at
                FROM reminders r
                INNER JOIN subscriptions s ON r.subscription_id = s.subscription_id
                WHERE s.user_id = $1
                ORDER BY r.reminder_date ASC, r.reminder_id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor),
    )
    .await
}

/// Rewrite only the supplied fields. Issues nothing when no field is supplied.
pub async fn update_reminder<'e, E>(
    executor: E,
    reminder_id: i64,
    changes: ReminderChanges,
) -> Result<(), DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    let mut update = UpdateBuilder::new("reminders");
    update
        .set("reminder_type", changes.reminder_type)
        .set("reminder_date", changes.reminder_date)
        .set("message", changes.message)
        .set("is_sent", changes.is_sent);

    let Some(mut query) = update.finish("reminder_id", reminder_id) else {
        tracing::debug!(
            "No fields supplied for reminder {}, skipping update",
            reminder_id
        );
        return Ok(());
    };

    executor::run("reminders.update", async move {
        query.build().execute(executor).await?;
        Ok(())
    })
    .await
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_reminder<'e, E>(executor: E, reminder_id: i64) -> Result<u64, DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    executor::run("reminders.delete", async move {
        let result = sqlx::query(
            // language=PostgreSQL
            r#"
                DELETE FROM reminders WHERE reminder_id = $1
            "#,
        )
        .bind(reminder_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    })
    .await
}
