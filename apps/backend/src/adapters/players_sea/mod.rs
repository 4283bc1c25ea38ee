//! SeaORM adapter for player repository.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, NotSet, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use time::Date;
use tracing::debug;
use uuid::Uuid;

use crate::domain::player::name_key;
use crate::domain::ranking::rerank;
use crate::entities::players;
use crate::repos::players::PlayerRepo;

pub mod dto;

pub use dto::{PlayerCreate, PlayerUpdate};

// Adapter functions return DbErr; services map to DomainError.

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .order_by_asc(players::Column::Rank)
        .all(conn)
        .await
}

pub async fn find_by_identifier<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    identifier: Uuid,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::Identifier.eq(identifier))
        .one(conn)
        .await
}

/// Matches on the folded name key, so case differences (ASCII or not) collide.
pub async fn find_by_name_and_birth_date<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    first_name: &str,
    last_name: &str,
    birth_date: Date,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::NameKey.eq(name_key(first_name, last_name)))
        .filter(players::Column::BirthDate.eq(birth_date))
        .one(conn)
        .await
}

pub async fn create_player(
    txn: &DatabaseTransaction,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let identifier = dto.identifier;
    let player_active = players::ActiveModel {
        id: NotSet,
        identifier: Set(dto.identifier),
        name_key: Set(name_key(&dto.first_name, &dto.last_name)),
        first_name: Set(dto.first_name),
        last_name: Set(dto.last_name),
        birth_date: Set(dto.birth_date),
        points: Set(dto.points),
        // Placeholder until refresh_ranks runs below
        rank: Set(0),
    };
    player_active.insert(txn).await?;

    refresh_ranks(txn).await?;
    reload(txn, identifier).await
}

pub async fn update_player(
    txn: &DatabaseTransaction,
    dto: PlayerUpdate,
) -> Result<players::Model, sea_orm::DbErr> {
    let existing = find_by_identifier(txn, dto.identifier)
        .await?
        .ok_or_else(|| {
            sea_orm::DbErr::RecordNotFound(format!("players.identifier {}", dto.identifier))
        })?;

    let mut player_active: players::ActiveModel = existing.into();
    player_active.name_key = Set(name_key(&dto.first_name, &dto.last_name));
    player_active.first_name = Set(dto.first_name);
    player_active.last_name = Set(dto.last_name);
    player_active.birth_date = Set(dto.birth_date);
    player_active.points = Set(dto.points);
    player_active.update(txn).await?;

    refresh_ranks(txn).await?;
    reload(txn, dto.identifier).await
}

/// Recompute every position from points and persist the ones that moved.
pub async fn refresh_ranks<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<(), sea_orm::DbErr> {
    // Id order is insertion order, which breaks ties
    let mut all = players::Entity::find()
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await?;
    let previous: HashMap<i64, i32> = all.iter().map(|p| (p.id, p.rank)).collect();

    rerank(&mut all);

    let mut moved = 0usize;
    for player in &all {
        if previous.get(&player.id) == Some(&player.rank) {
            continue;
        }
        players::Entity::update_many()
            .col_expr(players::Column::Rank, Expr::value(player.rank))
            .filter(players::Column::Id.eq(player.id))
            .exec(conn)
            .await?;
        moved += 1;
    }

    debug!(players = all.len(), moved, "ranking refreshed");
    Ok(())
}

async fn reload(
    txn: &DatabaseTransaction,
    identifier: Uuid,
) -> Result<players::Model, sea_orm::DbErr> {
    find_by_identifier(txn, identifier).await?.ok_or_else(|| {
        sea_orm::DbErr::RecordNotFound(format!("players.identifier {identifier}"))
    })
}

/// SeaORM implementation of PlayerRepo.
#[derive(Debug, Clone)]
pub struct PlayerRepoSea {
    db: DatabaseConnection,
}

impl PlayerRepoSea {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlayerRepo for PlayerRepoSea {
    async fn find_all(&self) -> Result<Vec<players::Model>, sea_orm::DbErr> {
        find_all(&self.db).await
    }

    async fn find_one_by_identifier(
        &self,
        identifier: Uuid,
    ) -> Result<Option<players::Model>, sea_orm::DbErr> {
        find_by_identifier(&self.db, identifier).await
    }

    async fn find_one_by_name_and_birth_date(
        &self,
        first_name: &str,
        last_name: &str,
        birth_date: Date,
    ) -> Result<Option<players::Model>, sea_orm::DbErr> {
        find_by_name_and_birth_date(&self.db, first_name, last_name, birth_date).await
    }

    async fn insert(&self, dto: PlayerCreate) -> Result<players::Model, sea_orm::DbErr> {
        let txn = self.db.begin().await?;
        let player = create_player(&txn, dto).await?;
        txn.commit().await?;
        Ok(player)
    }

    async fn update(&self, dto: PlayerUpdate) -> Result<players::Model, sea_orm::DbErr> {
        let txn = self.db.begin().await?;
        let player = update_player(&txn, dto).await?;
        txn.commit().await?;
        Ok(player)
    }
}
