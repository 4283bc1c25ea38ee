pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

mod m20250901_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250901_000001_init::Migration)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

/// Run a migrator command against an already-open connection.
/// Used by both the CLI and tests.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let before = get_db_diagnostics(db).await?;

    tracing::info!(
        command = ?command,
        backend = %before.backend,
        database = %before.name,
        defined = before.defined_migrations_count,
        applied = before.applied_migrations_count,
        "running migration command"
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            // Status leaves the schema untouched
            if command != MigrationCommand::Status {
                let after = get_db_diagnostics(db).await?;
                tracing::info!(
                    command = ?command,
                    applied = after.applied_migrations_count,
                    "migration command finished"
                );
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(command = ?command, error = %e, "migration command failed");
            Err(e)
        }
    }
}

#[derive(Debug)]
struct DbDiagnostics {
    backend: String,
    name: String,
    applied_migrations_count: usize,
    defined_migrations_count: usize,
}

async fn get_db_diagnostics(db: &DatabaseConnection) -> Result<DbDiagnostics, DbErr> {
    let backend = db.get_database_backend();

    let query = match backend {
        DatabaseBackend::Postgres => Some(("select current_database() as name", "name")),
        DatabaseBackend::Sqlite => Some((
            "SELECT file FROM pragma_database_list WHERE name = 'main'",
            "file",
        )),
        _ => None,
    };

    let name = match query {
        Some((sql, column)) => {
            let stmt = Statement::from_string(backend, sql.to_string());
            match db.query_one(stmt).await? {
                Some(row) => match row.try_get::<String>("", column) {
                    Ok(file) if file.is_empty() => ":memory:".to_string(),
                    Ok(name) => name,
                    Err(_) => "<unknown>".to_string(),
                },
                None => "<unknown>".to_string(),
            }
        }
        None => "<unsupported>".to_string(),
    };

    Ok(DbDiagnostics {
        backend: format!("{backend:?}"),
        name,
        applied_migrations_count: count_applied_migrations(db).await?,
        defined_migrations_count: Migrator::migrations().len(),
    })
}

/// Count the number of migrations that have been applied to the database.
/// Returns 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) | Err(DbErr::Query(_)) => Ok(0), // Migration table doesn't exist yet
        Err(e) => Err(e),
    }
}
