//! Domain-level error type used across services and adapters.
//!
//! This error type is transport- and DB-agnostic. Store failures arrive as
//! `sea_orm::DbErr` and are translated either by the services (reads) or by
//! `crate::infra::db_errors::map_db_err` (writes).

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use uuid::Uuid;

use crate::domain::validation::ValidationErrors;

/// The kind of resource an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResourceKind {
    Player,
    Tournament,
}

impl ResourceKind {
    /// Capitalized label, e.g. `"Player"`.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Player => "Player",
            ResourceKind::Tournament => "Tournament",
        }
    }

    /// Lower-case noun, e.g. `"player"`.
    pub fn noun(self) -> &'static str {
        match self {
            ResourceKind::Player => "player",
            ResourceKind::Tournament => "tournament",
        }
    }
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation failed; carries every field-level error
    Validation(ValidationErrors),
    /// Requested resource is absent
    NotFound(ResourceKind, String),
    /// Resource would duplicate an existing one
    Conflict(ResourceKind, String),
    /// The store failed while reading
    DataRetrieval(ResourceKind, String),
    /// Infrastructure/operational failures on writes
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(errors) => write!(f, "{errors}"),
            DomainError::NotFound(_, d)
            | DomainError::Conflict(_, d)
            | DomainError::DataRetrieval(_, d)
            | DomainError::Infra(_, d) => f.write_str(d),
        }
    }
}

impl Error for DomainError {}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors)
    }
}

impl DomainError {
    pub fn not_found(kind: ResourceKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn conflict(kind: ResourceKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn data_retrieval(kind: ResourceKind, detail: impl Into<String>) -> Self {
        Self::DataRetrieval(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// `"{Kind} with identifier {id} could not be found."`
    pub fn not_found_by_identifier(kind: ResourceKind, identifier: Uuid) -> Self {
        Self::not_found(
            kind,
            format!(
                "{} with identifier {identifier} could not be found.",
                kind.label()
            ),
        )
    }

    /// `"Could not retrieve {kind} data"`
    pub fn data_retrieval_failure(kind: ResourceKind) -> Self {
        Self::data_retrieval(kind, format!("Could not retrieve {} data", kind.noun()))
    }

    /// Human-readable message carried by the error.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn resource(&self) -> Option<ResourceKind> {
        match self {
            DomainError::NotFound(kind, _)
            | DomainError::Conflict(kind, _)
            | DomainError::DataRetrieval(kind, _) => Some(*kind),
            DomainError::Validation(_) | DomainError::Infra(..) => None,
        }
    }
}
