//! Player repository contract consumed by the player service.

use async_trait::async_trait;
use time::Date;
use uuid::Uuid;

use crate::adapters::players_sea::{PlayerCreate, PlayerUpdate};
use crate::entities::players;

/// Data access for stored players.
///
/// Implementations recompute ranking positions on every write, so callers
/// never set a position themselves.
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    /// All players ordered by ascending rank position.
    async fn find_all(&self) -> Result<Vec<players::Model>, sea_orm::DbErr>;

    async fn find_one_by_identifier(
        &self,
        identifier: Uuid,
    ) -> Result<Option<players::Model>, sea_orm::DbErr>;

    async fn find_one_by_name_and_birth_date(
        &self,
        first_name: &str,
        last_name: &str,
        birth_date: Date,
    ) -> Result<Option<players::Model>, sea_orm::DbErr>;

    async fn insert(&self, dto: PlayerCreate) -> Result<players::Model, sea_orm::DbErr>;

    /// Fails with `DbErr::RecordNotFound` when the identifier is unknown.
    async fn update(&self, dto: PlayerUpdate) -> Result<players::Model, sea_orm::DbErr>;
}
