pub mod players;
pub mod tournaments;

pub use players::PlayerService;
pub use tournaments::TournamentService;
