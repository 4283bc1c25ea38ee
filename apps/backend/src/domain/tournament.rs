//! Tournament domain records.

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::domain::validation::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub identifier: Uuid,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub prize_money: Option<i32>,
    pub capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentToCreate {
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub prize_money: Option<i32>,
    pub capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentToUpdate {
    pub identifier: Uuid,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub prize_money: Option<i32>,
    pub capacity: i32,
}

fn check_tournament_fields(
    errors: &mut ValidationErrors,
    name: &str,
    prize_money: Option<i32>,
    capacity: i32,
) {
    errors.require_not_blank("name", name, "Name is mandatory");
    // Prize money may be unannounced, but never zero or negative
    if let Some(prize_money) = prize_money {
        errors.require_positive("prize_money", prize_money, "Prize money must be positive");
    }
    errors.require_positive("capacity", capacity, "Capacity must be positive");
}

impl Validate for TournamentToCreate {
    fn validate_at(&self, _today: Date) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_tournament_fields(&mut errors, &self.name, self.prize_money, self.capacity);
        errors.into_result()
    }
}

impl Validate for TournamentToUpdate {
    fn validate_at(&self, _today: Date) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_identifier(self.identifier);
        check_tournament_fields(&mut errors, &self.name, self.prize_money, self.capacity);
        errors.into_result()
    }
}
