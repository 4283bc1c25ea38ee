#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod mappers;
pub mod repos;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::db::{db_url, DbOwner, DbProfile};
pub use domain::{Player, Tournament};
pub use error::AppError;
pub use errors::{DomainError, ResourceKind};
pub use infra::{connect_db, connect_url};
pub use services::{PlayerService, TournamentService};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
