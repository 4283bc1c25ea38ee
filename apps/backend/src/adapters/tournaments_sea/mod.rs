//! SeaORM adapter for tournament repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::tournaments;
use crate::repos::tournaments::TournamentRepo;

pub mod dto;

pub use dto::{TournamentCreate, TournamentUpdate};

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<tournaments::Model>, sea_orm::DbErr> {
    tournaments::Entity::find()
        .order_by_asc(tournaments::Column::StartDate)
        .order_by_asc(tournaments::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_identifier<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    identifier: Uuid,
) -> Result<Option<tournaments::Model>, sea_orm::DbErr> {
    tournaments::Entity::find()
        .filter(tournaments::Column::Identifier.eq(identifier))
        .one(conn)
        .await
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<tournaments::Model>, sea_orm::DbErr> {
    tournaments::Entity::find()
        .filter(tournaments::Column::Name.eq(name))
        .one(conn)
        .await
}

pub async fn create_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TournamentCreate,
) -> Result<tournaments::Model, sea_orm::DbErr> {
    let tournament_active = tournaments::ActiveModel {
        id: NotSet,
        identifier: Set(dto.identifier),
        name: Set(dto.name),
        start_date: Set(dto.start_date),
        end_date: Set(dto.end_date),
        prize_money: Set(dto.prize_money),
        capacity: Set(dto.capacity),
    };

    tournament_active.insert(conn).await
}

pub async fn update_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TournamentUpdate,
) -> Result<tournaments::Model, sea_orm::DbErr> {
    let existing = find_by_identifier(conn, dto.identifier)
        .await?
        .ok_or_else(|| {
            sea_orm::DbErr::RecordNotFound(format!("tournaments.identifier {}", dto.identifier))
        })?;

    let mut tournament_active: tournaments::ActiveModel = existing.into();
    tournament_active.name = Set(dto.name);
    tournament_active.start_date = Set(dto.start_date);
    tournament_active.end_date = Set(dto.end_date);
    tournament_active.prize_money = Set(dto.prize_money);
    tournament_active.capacity = Set(dto.capacity);
    tournament_active.update(conn).await
}

/// SeaORM implementation of TournamentRepo.
#[derive(Debug, Clone)]
pub struct TournamentRepoSea {
    db: DatabaseConnection,
}

impl TournamentRepoSea {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TournamentRepo for TournamentRepoSea {
    async fn find_all(&self) -> Result<Vec<tournaments::Model>, sea_orm::DbErr> {
        find_all(&self.db).await
    }

    async fn find_one_by_identifier(
        &self,
        identifier: Uuid,
    ) -> Result<Option<tournaments::Model>, sea_orm::DbErr> {
        find_by_identifier(&self.db, identifier).await
    }

    async fn find_one_by_name(
        &self,
        name: &str,
    ) -> Result<Option<tournaments::Model>, sea_orm::DbErr> {
        find_by_name(&self.db, name).await
    }

    async fn insert(&self, dto: TournamentCreate) -> Result<tournaments::Model, sea_orm::DbErr> {
        create_tournament(&self.db, dto).await
    }

    async fn update(&self, dto: TournamentUpdate) -> Result<tournaments::Model, sea_orm::DbErr> {
        update_tournament(&self.db, dto).await
    }
}
