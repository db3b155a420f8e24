use thiserror::Error;

/// Failure raised by the data-access layer.
///
/// A missing row is not an error: lookups return `Ok(None)` instead.
#[derive(Error, Debug)]
pub enum DbError {
    /// The store could not be reached or refused the credentials.
    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),
    /// A statement was rejected (constraint violation, bad input, syntax).
    #[error("Query execution error: {0}")]
    Query(#[source] sqlx::Error),
    /// The bundled migrations could not be applied.
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(err),
            // SQLSTATE class 08 is "connection exception", 28 is "invalid authorization"
            sqlx::Error::Database(db)
                if db
                    .code()
                    .is_some_and(|code| code.starts_with("08") || code.starts_with("28")) =>
            {
                Self::Connection(err)
            }
            _ => Self::Query(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_failures_are_connection_errors() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::Connection(_)
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::Connection(_)
        ));

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(
            DbError::from(sqlx::Error::Io(io)),
            DbError::Connection(_)
        ));
    }

    #[test]
    fn test_statement_failures_are_query_errors() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Query(_)));
        assert!(err.to_string().starts_with("Query execution error: "));

        let err = DbError::from(sqlx::Error::ColumnNotFound("price".to_string()));
        assert!(matches!(err, DbError::Query(_)));
    }

    #[test]
    fn test_connection_message() {
        let err = DbError::from(sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("Database connection error: "));
    }
}
