//! Domain records, validation and ranking rules.

pub mod player;
pub mod ranking;
pub mod tournament;
pub mod validation;

pub use player::{name_key, PersonalInfo, Player, PlayerToCreate, PlayerToUpdate, Rank};
pub use tournament::{Tournament, TournamentToCreate, TournamentToUpdate};
pub use validation::{FieldError, Validate, ValidationErrors};
