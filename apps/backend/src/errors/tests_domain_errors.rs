// Unit tests for domain error messages - no database involved
use uuid::Uuid;

use crate::domain::validation::{FieldError, ValidationErrors};
use crate::errors::domain::{DomainError, InfraErrorKind, ResourceKind};

#[test]
fn player_not_found_message() {
    let id = Uuid::parse_str("aaaaaaaa-1111-2222-3333-bbbbbbbbbbbb").unwrap();
    let err = DomainError::not_found_by_identifier(ResourceKind::Player, id);
    assert_eq!(
        err.to_string(),
        "Player with identifier aaaaaaaa-1111-2222-3333-bbbbbbbbbbbb could not be found."
    );
    assert_eq!(err.resource(), Some(ResourceKind::Player));
}

#[test]
fn tournament_not_found_message() {
    let id = Uuid::nil();
    let err = DomainError::not_found_by_identifier(ResourceKind::Tournament, id);
    assert_eq!(
        err.message(),
        "Tournament with identifier 00000000-0000-0000-0000-000000000000 could not be found."
    );
}

#[test]
fn data_retrieval_messages() {
    let player = DomainError::data_retrieval_failure(ResourceKind::Player);
    assert_eq!(player.to_string(), "Could not retrieve player data");
    assert!(matches!(
        player,
        DomainError::DataRetrieval(ResourceKind::Player, _)
    ));

    let tournament = DomainError::data_retrieval_failure(ResourceKind::Tournament);
    assert_eq!(tournament.to_string(), "Could not retrieve tournament data");
}

#[test]
fn validation_renders_every_field() {
    let mut errors = ValidationErrors::new();
    errors.push(FieldError::new("first_name", "First name is mandatory"));
    errors.push(FieldError::new("points", "Points must be more than zero"));

    let err = DomainError::from(errors);
    assert_eq!(
        err.to_string(),
        "first_name: First name is mandatory; points: Points must be more than zero"
    );
    assert_eq!(err.resource(), None);
}

#[test]
fn infra_carries_detail_only() {
    let err = DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
    assert_eq!(err.to_string(), "Database unavailable");
}
