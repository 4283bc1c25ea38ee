//! Error handling for the tennis backend.

pub mod domain;

pub use domain::{DomainError, InfraErrorKind, ResourceKind};

#[cfg(test)]
mod tests_domain_errors;
