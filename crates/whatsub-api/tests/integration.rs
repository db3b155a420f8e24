//! HTTP-level tests. Everything that touches the database needs a PostgreSQL
//! instance at `TEST_DATABASE_URL`.

mod common;

mod error_tests;
mod health_tests;
