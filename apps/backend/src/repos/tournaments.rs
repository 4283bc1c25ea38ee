//! Tournament repository contract consumed by the tournament service.

use async_trait::async_trait;
use uuid::Uuid;

use crate::adapters::tournaments_sea::{TournamentCreate, TournamentUpdate};
use crate::entities::tournaments;

#[async_trait]
pub trait TournamentRepo: Send + Sync {
    /// All tournaments ordered by ascending start date.
    async fn find_all(&self) -> Result<Vec<tournaments::Model>, sea_orm::DbErr>;

    async fn find_one_by_identifier(
        &self,
        identifier: Uuid,
    ) -> Result<Option<tournaments::Model>, sea_orm::DbErr>;

    async fn find_one_by_name(
        &self,
        name: &str,
    ) -> Result<Option<tournaments::Model>, sea_orm::DbErr>;

    async fn insert(&self, dto: TournamentCreate) -> Result<tournaments::Model, sea_orm::DbErr>;

    async fn update(&self, dto: TournamentUpdate) -> Result<tournaments::Model, sea_orm::DbErr>;
}
