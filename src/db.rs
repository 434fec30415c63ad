//! Database connection pool and migration management.

use sqlx::{Pool, Postgres};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// The pool is shared by every request handler; connections are opened on
/// demand up to `max_connections` and reused afterwards.
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the server
/// cannot be reached.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Applied migrations are tracked in `_sqlx_migrations`, so each file runs
/// once per database.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // Embedded at compile time
    sqlx::migrate!("./migrations").run(pool).await
}
