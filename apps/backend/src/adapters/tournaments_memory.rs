//! In-memory tournament repository for tests and local demos.

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::adapters::tournaments_sea::{TournamentCreate, TournamentUpdate};
use crate::entities::tournaments;
use crate::repos::tournaments::TournamentRepo;

#[derive(Debug, Default)]
pub struct InMemoryTournamentRepo {
    rows: Mutex<Vec<tournaments::Model>>,
}

impl InMemoryTournamentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tournaments(rows: Vec<tournaments::Model>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl TournamentRepo for InMemoryTournamentRepo {
    async fn find_all(&self) -> Result<Vec<tournaments::Model>, sea_orm::DbErr> {
        let mut all = self.rows.lock().clone();
        all.sort_by_key(|t| (t.start_date, t.id));
        Ok(all)
    }

    async fn find_one_by_identifier(
        &self,
        identifier: Uuid,
    ) -> Result<Option<tournaments::Model>, sea_orm::DbErr> {
        Ok(self
            .rows
            .lock()
            .iter()
            .find(|t| t.identifier == identifier)
            .cloned())
    }

    async fn find_one_by_name(
        &self,
        name: &str,
    ) -> Result<Option<tournaments::Model>, sea_orm::DbErr> {
        Ok(self.rows.lock().iter().find(|t| t.name == name).cloned())
    }

    async fn insert(&self, dto: TournamentCreate) -> Result<tournaments::Model, sea_orm::DbErr> {
        let mut rows = self.rows.lock();
        if rows
            .iter()
            .any(|t| t.identifier == dto.identifier || t.name == dto.name)
        {
            return Err(sea_orm::DbErr::Custom(
                "UNIQUE constraint failed: tournaments.name".to_string(),
            ));
        }

        let model = tournaments::Model {
            id: rows.iter().map(|t| t.id).max().unwrap_or(0) + 1,
            identifier: dto.identifier,
            name: dto.name,
            start_date: dto.start_date,
            end_date: dto.end_date,
            prize_money: dto.prize_money,
            capacity: dto.capacity,
        };
        rows.push(model.clone());
        Ok(model)
    }

    async fn update(&self, dto: TournamentUpdate) -> Result<tournaments::Model, sea_orm::DbErr> {
        let mut rows = self.rows.lock();
        if rows
            .iter()
            .any(|t| t.identifier != dto.identifier && t.name == dto.name)
        {
            return Err(sea_orm::DbErr::Custom(
                "UNIQUE constraint failed: tournaments.name".to_string(),
            ));
        }
        let row = rows
            .iter_mut()
            .find(|t| t.identifier == dto.identifier)
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!(
                    "tournaments.identifier {}",
                    dto.identifier
                ))
            })?;
        row.name = dto.name;
        row.start_date = dto.start_date;
        row.end_date = dto.end_date;
        row.prize_money = dto.prize_money;
        row.capacity = dto.capacity;
        Ok(row.clone())
    }
}
