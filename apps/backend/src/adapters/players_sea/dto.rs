//! DTOs for players_sea adapter.

use time::Date;
use uuid::Uuid;

/// DTO for registering a new player.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub identifier: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub points: i32,
}

/// DTO for overwriting an existing player's details.
#[derive(Debug, Clone)]
pub struct PlayerUpdate {
    pub identifier: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub points: i32,
}
