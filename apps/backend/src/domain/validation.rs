//! Field-level validation for incoming records.
//!
//! Records implement [`Validate`]; every failing rule is collected so callers
//! get the full list instead of only the first problem.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// A single failed rule on a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Ordered collection of field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Message recorded for `field`, if any rule on it failed.
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn require_identifier(&mut self, identifier: Uuid) {
        if identifier.is_nil() {
            self.push(FieldError::new("identifier", "Identifier is mandatory"));
        }
    }

    pub fn require_not_blank(&mut self, field: &'static str, value: &str, message: &'static str) {
        if value.trim().is_empty() {
            self.push(FieldError::new(field, message));
        }
    }

    pub fn require_past_or_present(
        &mut self,
        field: &'static str,
        value: Date,
        today: Date,
        message: &'static str,
    ) {
        if value > today {
            self.push(FieldError::new(field, message));
        }
    }

    pub fn require_positive_or_zero(&mut self, field: &'static str, value: i32, message: &'static str) {
        if value < 0 {
            self.push(FieldError::new(field, message));
        }
    }

    pub fn require_positive(&mut self, field: &'static str, value: i32, message: &'static str) {
        if value <= 0 {
            self.push(FieldError::new(field, message));
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

/// Records that can check their own field constraints.
pub trait Validate {
    /// Validate against an explicit "today" (birth dates, etc.).
    fn validate_at(&self, today: Date) -> Result<(), ValidationErrors>;

    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_at(OffsetDateTime::now_utc().date())
    }
}
