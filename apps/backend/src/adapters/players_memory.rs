//! In-memory player repository for tests and local demos.

use async_trait::async_trait;
use parking_lot::Mutex;
use time::Date;
use uuid::Uuid;

use crate::adapters::players_sea::{PlayerCreate, PlayerUpdate};
use crate::domain::player::name_key;
use crate::domain::ranking::rerank;
use crate::entities::players;
use crate::repos::players::PlayerRepo;

/// Keeps rows in insertion order; reads hand them out sorted by rank.
#[derive(Debug, Default)]
pub struct InMemoryPlayerRepo {
    rows: Mutex<Vec<players::Model>>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with stored rows as-is; positions are not recomputed.
    pub fn with_players(rows: Vec<players::Model>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }

    /// Same error text SQLite reports for the name-key unique index.
    fn name_taken() -> sea_orm::DbErr {
        sea_orm::DbErr::Custom(
            "UNIQUE constraint failed: players.name_key, players.birth_date".to_string(),
        )
    }

    fn refresh_ranks(rows: &mut [players::Model]) {
        rows.sort_by_key(|p| p.id);
        rerank(rows);
        rows.sort_by_key(|p| p.id);
    }
}

#[async_trait]
impl PlayerRepo for InMemoryPlayerRepo {
    async fn find_all(&self) -> Result<Vec<players::Model>, sea_orm::DbErr> {
        let mut all = self.rows.lock().clone();
        all.sort_by_key(|p| p.rank);
        Ok(all)
    }

    async fn find_one_by_identifier(
        &self,
        identifier: Uuid,
    ) -> Result<Option<players::Model>, sea_orm::DbErr> {
        Ok(self
            .rows
            .lock()
            .iter()
            .find(|p| p.identifier == identifier)
            .cloned())
    }

    async fn find_one_by_name_and_birth_date(
        &self,
        first_name: &str,
        last_name: &str,
        birth_date: Date,
    ) -> Result<Option<players::Model>, sea_orm::DbErr> {
        let key = name_key(first_name, last_name);
        Ok(self
            .rows
            .lock()
            .iter()
            .find(|p| p.name_key == key && p.birth_date == birth_date)
            .cloned())
    }

    async fn insert(&self, dto: PlayerCreate) -> Result<players::Model, sea_orm::DbErr> {
        let mut rows = self.rows.lock();
        if rows.iter().any(|p| p.identifier == dto.identifier) {
            return Err(sea_orm::DbErr::Custom(
                "UNIQUE constraint failed: players.identifier".to_string(),
            ));
        }
        let key = name_key(&dto.first_name, &dto.last_name);
        if rows
            .iter()
            .any(|p| p.name_key == key && p.birth_date == dto.birth_date)
        {
            return Err(Self::name_taken());
        }

        let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        rows.push(players::Model {
            id,
            identifier: dto.identifier,
            name_key: key,
            first_name: dto.first_name,
            last_name: dto.last_name,
            birth_date: dto.birth_date,
            points: dto.points,
            rank: 0,
        });
        Self::refresh_ranks(&mut rows);

        rows.iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("players.id {id}")))
    }

    async fn update(&self, dto: PlayerUpdate) -> Result<players::Model, sea_orm::DbErr> {
        let mut rows = self.rows.lock();
        let key = name_key(&dto.first_name, &dto.last_name);
        if rows.iter().any(|p| {
            p.identifier != dto.identifier && p.name_key == key && p.birth_date == dto.birth_date
        }) {
            return Err(Self::name_taken());
        }
        let row = rows
            .iter_mut()
            .find(|p| p.identifier == dto.identifier)
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!("players.identifier {}", dto.identifier))
            })?;
        row.name_key = key;
        row.first_name = dto.first_name;
        row.last_name = dto.last_name;
        row.birth_date = dto.birth_date;
        row.points = dto.points;

        Self::refresh_ranks(&mut rows);

        rows.iter()
            .find(|p| p.identifier == dto.identifier)
            .cloned()
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!("players.identifier {}", dto.identifier))
            })
    }
}
