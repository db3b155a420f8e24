use chrono::Utc;
use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    DbError, UpdateBuilder, executor,
    models::{NewSubscription, Subscription, SubscriptionChanges},
};

/// Insert a subscription and return the id assigned by the store.
pub async fn create_subscription<'e, E>(
    executor: E,
    new_subscription: NewSubscription,
) -> Result<i64, DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    executor::run(
        "subscriptions.create",
        sqlx::query_scalar(
            // language=PostgreSQL
            r#"
                INSERT INTO subscriptions (user_id, name, url, account, billing_date, price, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING subscription_id
            "#,
        )
        .bind(new_subscription.user_id)
        .bind(new_subscription.name)
        .bind(new_subscription.url)
        .bind(new_subscription.account)
        .bind(new_subscription.billing_date)
        .bind(new_subscription.price)
        .bind(Utc::now())
        .fetch_one(executor),
    )
    .await
}

/// `Ok(None)` when no subscription has this id.
pub async fn find_subscription<'e, E>(
    executor: E,
    subscription_id: i64,
) -> Result<Option<Subscription>, DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    executor::run(
        "subscriptions.find",
        sqlx::query_as(
            // language=PostgreSQL
            r#"
                SELECT subscription_id, user_id, name, url, account, billing_date,
                       price::float8 AS price, created_at
                FROM subscriptions
                WHERE subscription_id = $1
            "#,
        )
        .bind(subscription_id)
        .fetch_optional(executor),
    )
    .await
}

/// A user's subscriptions, newest first.
pub async fn list_user_subscriptions<'e, E>(
    executor: E,
    user_id: Uuid,
) -> Result<Vec<Subscription>, DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    executor::run(
        "subscriptions.list_for_user",
        sqlx::query_as(
            // language=PostgreSQL
            r#"
                SELECT subscription_id, user_id, name, url, account, billing_date,
                       price::float8 AS price, created_at
                FROM subscriptions
                WHERE user_id = $1
                ORDER BY created_at DESC, subscription_id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor),
    )
    .await
}

/// Rewrite only the supplied fields. Issues nothing when no field is supplied.
pub async fn update_subscription<'e, E>(
    executor: E,
    subscription_id: i64,
    changes: SubscriptionChanges,
) -> Result<(), DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    let mut update = UpdateBuilder::new("subscriptions");
    update
        .set("name", changes.name)
        .set("url", changes.url)
        .set("account", changes.account)
        .set("billing_date", changes.billing_date)
        .set("price", changes.price);

    let Some(mut query) = update.finish("subscription_id", subscription_id) else {
        tracing::debug!(
            "No fields supplied for subscription {}, skipping update",
            subscription_id
        );
        return Ok(());
    };

    executor::run("subscriptions.update", async move {
        query.build().execute(executor).await?;
        Ok(())
    })
    .await
}

/// Delete a subscription and its reminders in one transaction. Returns the
/// number of subscription rows removed (0 or 1).
pub async fn delete_subscription<'a, A>(conn: A, subscription_id: i64) -> Result<u64, DbError>
where
    A: Acquire<'a, Database = Postgres>,
{
    executor::run("subscriptions.delete", async move {
        let mut tx = conn.begin().await?;

        let reminders = sqlx::query(
            // language=PostgreSQL
            r#"
                DELETE FROM reminders WHERE subscription_id = $1
            "#,
        )
        .bind(subscription_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let subscriptions = sqlx::query(
            // language=PostgreSQL
            r#"
                DELETE FROM subscriptions WHERE subscription_id = $1
            "#,
        )
        .bind(subscription_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        tracing::debug!(
            "Deleted subscription {} ({} reminders)",
            subscription_id,
            reminders
        );
        Ok(subscriptions)
    })
    .await
}
