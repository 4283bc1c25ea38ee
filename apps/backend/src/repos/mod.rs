//! Repository traits for domain layer.

pub mod players;
pub mod tournaments;

pub use players::PlayerRepo;
pub use tournaments::TournamentRepo;
