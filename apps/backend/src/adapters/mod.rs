//! Adapters for external dependencies.

pub mod players_memory;
pub mod players_sea;
pub mod tournaments_memory;
pub mod tournaments_sea;

pub use players_memory::InMemoryPlayerRepo;
pub use players_sea::PlayerRepoSea;
pub use tournaments_memory::InMemoryTournamentRepo;
pub use tournaments_sea::TournamentRepoSea;
