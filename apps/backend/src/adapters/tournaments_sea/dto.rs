//! DTOs for tournaments_sea adapter.

use time::Date;
use uuid::Uuid;

/// DTO for creating a new tournament.
#[derive(Debug, Clone)]
pub struct TournamentCreate {
    pub identifier: Uuid,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub prize_money: Option<i32>,
    pub capacity: i32,
}

/// DTO for overwriting an existing tournament.
#[derive(Debug, Clone)]
pub struct TournamentUpdate {
    pub identifier: Uuid,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub prize_money: Option<i32>,
    pub capacity: i32,
}
