pub mod players;
pub mod tournaments;
