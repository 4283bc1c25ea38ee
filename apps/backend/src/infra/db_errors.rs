//! SeaORM -> DomainError translation for write paths.
//!
//! Reads collapse every store failure into `DomainError::DataRetrieval`
//! inside the services; writes go through [`map_db_err`] so conflicts and
//! outages stay distinguishable.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, ResourceKind};

/// Conflict detail for a second registration of the same person.
pub const PLAYER_ALREADY_REGISTERED: &str = "Player name and birth date already in use";
/// Conflict detail for a reused tournament name.
pub const TOURNAMENT_NAME_IN_USE: &str = "Tournament name already in use";

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract table.column from SQLite "UNIQUE constraint failed: table.column" error messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let prefix = "UNIQUE constraint failed: ";
    let start = error_msg.find(prefix)? + prefix.len();
    error_msg[start..]
        .split(|c: char| c.is_whitespace() || c == '"' || c == ',')
        .next()
        .filter(|s| !s.is_empty())
}

/// Map a violated column (SQLite) or constraint name (PostgreSQL) to a conflict detail.
fn conflict_detail(error_msg: &str) -> &'static str {
    let column = extract_sqlite_table_column(error_msg).unwrap_or("");
    if column == "players.identifier" || error_msg.contains("players_identifier_key") {
        return "Player identifier already in use";
    }
    if column == "players.name_key" || error_msg.contains("ux_players_name_key_birth_date") {
        return PLAYER_ALREADY_REGISTERED;
    }
    if column == "tournaments.identifier" || error_msg.contains("tournaments_identifier_key") {
        return "Tournament identifier already in use";
    }
    if column == "tournaments.name" || error_msg.contains("tournaments_name_key") {
        return TOURNAMENT_NAME_IN_USE;
    }
    "Unique constraint violation"
}

/// Translate a `DbErr` raised while writing `kind` into a `DomainError`.
pub fn map_db_err(kind: ResourceKind, e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) | sea_orm::DbErr::RecordNotUpdated => {
            warn!(resource = kind.label(), raw_error = %error_msg, "Record not found during write");
            return DomainError::not_found(kind, format!("{} not found", kind.label()));
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(resource = kind.label(), raw_error = %error_msg, "Unique constraint violation");
        return DomainError::conflict(kind, conflict_detail(&error_msg));
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(resource = kind.label(), raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
