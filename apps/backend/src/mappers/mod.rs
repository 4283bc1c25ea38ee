//! Conversions between SeaORM models and domain records.
//!
//! Pure field-for-field transformations; no business rules live here.

pub mod players;
pub mod tournaments;
