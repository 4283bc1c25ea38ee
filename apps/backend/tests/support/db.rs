//! Fresh, migrated in-memory SQLite databases.

use migration::MigrationCommand;
use sea_orm::DatabaseConnection;
use tennis::connect_url;

pub async fn sqlite_memory() -> DatabaseConnection {
    let db = connect_url("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    migration::migrate(&db, MigrationCommand::Up)
        .await
        .expect("run migrations");
    db
}
