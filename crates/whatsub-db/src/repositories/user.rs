use chrono::Utc;
use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    DbError, UpdateBuilder, executor,
    models::{NewUser, User, UserChanges},
};

/// Insert a user under a fresh UUID v4 and return that id.
pub async fn create_user<'e, E>(executor: E, new_user: NewUser) -> Result<Uuid, DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    let user_id = Uuid::new_v4();

    executor::run(
        "users.create",
        sqlx::query_scalar(
            // language=PostgreSQL
            r#"
                INSERT INTO users (user_id, username, email, phone, created_at)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING user_id
            "#,
        )
        .bind(user_id)
        .bind(new_user.username)
        .bind(new_user.email)
        .bind(new_user.phone)
        .bind(Utc::now())
        .fetch_one(executor),
    )
    .await
}

/// `Ok(None)` when no user has this id.
pub async fn find_user<'e, E>(executor: E, user_id: Uuid) -> Result<Option<User>, DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    executor::run(
        "users.find",
        sqlx::query_as(
            // language=PostgreSQL
            r#"
                SELECT user_id, username, email, phone, created_at
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(executor),
    )
    .await
}

/// All users, newest first.
pub async fn list_users<'e, E>(executor: E) -> Result<Vec<User>, DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    executor::run(
        "users.list",
        sqlx::query_as(
            // language=PostgreSQL
            r#"
                SELECT user_id, username, email, phone, created_at
                FROM users
                ORDER BY created_at DESC, user_id DESC
            "#,
        )
        .fetch_all(executor),
    )
    .await
}

/// Rewrite only the supplied fields. Issues nothing when no field is supplied.
pub async fn update_user<'e, E>(
    executor: E,
    user_id: Uuid,
    changes: UserChanges,
) -> Result<(), DbError>
where
    E: Executor<'e, Database = Postgres>,
{
    let mut update = UpdateBuilder::new("users");
    update
        .set("username", changes.username)
        .set("email", changes.email)
        .set("phone", changes.phone);

    let Some(mut query) = update.finish("user_id", user_id) else {
        tracing::debug!("No fields supplied for user {}, skipping update", user_id);
        return Ok(());
    };

    executor::run("users.update", async move {
        query.build().execute(executor).await?;
        Ok(())
    })
    .await
}

/// Delete a user together with its subscriptions and their reminders, in one
/// transaction. Returns the number of user rows removed (0 or 1).
pub async fn delete_user<'a, A>(conn: A, user_id: Uuid) -> Result<u64, DbError>
where
    A: Acquire<'a, Database = Postgres>,
{
    executor::run("users.delete", async move {
        let mut tx = conn.begin().await?;

        let reminders = sqlx::query(
            // language=PostgreSQL
            r#"
                DELETE FROM reminders r
                USING subscriptions s
                WHERE r.subscription_id = s.subscription_id AND s.user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let subscriptions = sqlx::query(
            // language=PostgreSQL
            r#"
                DELETE FROM subscriptions WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let users = sqlx::query(
            // language=PostgreSQL
            r#"
                DELETE FROM users WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        tracing::debug!(
            "Deleted user {} ({} subscriptions, {} reminders)",
            user_id,
            subscriptions,
            reminders
        );
        Ok(users)
    })
    .await
}
