// Repository functions are generic over `E: Executor<'e, Database = Postgres>`
// so they accept both a `&PgPool` and a `&mut Transaction`. Cascading deletes
// take `A: Acquire<'a, Database = Postgres>` instead: they open their own
// transaction, which becomes a savepoint when the caller already holds one.

pub mod reminder;
pub mod subscription;
pub mod user;
