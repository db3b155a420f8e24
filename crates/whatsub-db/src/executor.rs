//! Single entry point for every statement the repositories issue.
//!
//! Repositories build their statements with bound parameters and hand the
//! resulting future to [`run`], which times it, classifies a failure into a
//! [`DbError`] and records the outcome in the log and in metrics.
//!
//! Statements issued straight against the pool are autocommitted by the store,
//! so a failure leaves nothing to undo. Multi-statement work runs inside a
//! `sqlx::Transaction`, which rolls back when it is dropped without a commit,
//! including when a `?` inside the future returns early. In both cases the
//! pooled connection goes back to the pool for reuse.

use std::{future::Future, time::Instant};

use metrics::{counter, histogram};

use crate::DbError;

/// Run one repository operation, labelled `operation` (e.g. `"users.create"`).
pub async fn run<T, F>(operation: &'static str, query: F) -> Result<T, DbError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    let start = Instant::now();
    let result = query.await;
    let elapsed = start.elapsed();

    record_db_query(operation, elapsed.as_secs_f64(), result.is_ok());

    match result {
        Ok(value) => {
            tracing::debug!(operation, elapsed_ms = elapsed.as_millis() as u64, "query ok");
            Ok(value)
        }
        Err(err) => {
            let err = DbError::from(err);
            tracing::warn!(operation, elapsed_ms = elapsed.as_millis() as u64, "{}", err);
            Err(err)
        }
    }
}

/// Record database query metrics
fn record_db_query(operation: &'static str, duration_secs: f64, success: bool) {
    let status = if success { "success" } else { "error" };

    counter!(
        "db_queries_total",
        "query" => operation,
        "status" => status
    )
    .increment(1);

    histogram!("db_query_duration_seconds", "query" => operation).record(duration_secs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_success_passes_value_through() {
        let value = run("test.ok", async { Ok::<_, sqlx::Error>(42) })
            .await
            .unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_failure_is_classified() {
        let err = run("test.err", async { Err::<(), _>(sqlx::Error::PoolClosed) })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Connection(_)));

        let err = run("test.err", async { Err::<(), _>(sqlx::Error::RowNotFound) })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Query(_)));
    }
}
