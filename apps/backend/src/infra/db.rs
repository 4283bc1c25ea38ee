use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Unified database connector that supports different profiles and owners.
/// This function does NOT run any migrations.
pub async fn connect_db(profile: DbProfile, owner: DbOwner) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile, owner)?;
    info!(profile = ?profile, owner = ?owner, "connecting to database");
    connect_url(&database_url).await
}

/// Connect to an explicit URL.
///
/// In-memory SQLite lives inside a single connection, so the pool is pinned
/// to exactly one connection that is never reaped.
pub async fn connect_url(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    if database_url.starts_with("sqlite") && database_url.contains(":memory:") {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(Duration::from_secs(u32::MAX as u64))
            .max_lifetime(Duration::from_secs(u32::MAX as u64));
    }

    let conn = Database::connect(options).await?;
    Ok(conn)
}
