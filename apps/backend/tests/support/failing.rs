//! Repositories whose every call fails with a data-access error.

use async_trait::async_trait;
use sea_orm::DbErr;
use tennis::adapters::players_sea::{PlayerCreate, PlayerUpdate};
use tennis::adapters::tournaments_sea::{TournamentCreate, TournamentUpdate};
use tennis::entities::{players, tournaments};
use tennis::repos::{PlayerRepo, TournamentRepo};
use time::Date;
use uuid::Uuid;

fn data_access_error() -> DbErr {
    DbErr::Custom("Data access error".to_string())
}

#[derive(Debug, Default)]
pub struct FailingPlayerRepo;

#[async_trait]
impl PlayerRepo for FailingPlayerRepo {
    async fn find_all(&self) -> Result<Vec<players::Model>, DbErr> {
        Err(data_access_error())
    }

    async fn find_one_by_identifier(&self, _: Uuid) -> Result<Option<players::Model>, DbErr> {
        Err(data_access_error())
    }

    async fn find_one_by_name_and_birth_date(
        &self,
        _: &str,
        _: &str,
        _: Date,
    ) -> Result<Option<players::Model>, DbErr> {
        Err(data_access_error())
    }

    async fn insert(&self, _: PlayerCreate) -> Result<players::Model, DbErr> {
        Err(data_access_error())
    }

    async fn update(&self, _: PlayerUpdate) -> Result<players::Model, DbErr> {
        Err(data_access_error())
    }
}

#[derive(Debug, Default)]
pub struct FailingTournamentRepo;

#[async_trait]
impl TournamentRepo for FailingTournamentRepo {
    async fn find_all(&self) -> Result<Vec<tournaments::Model>, DbErr> {
        Err(data_access_error())
    }

    async fn find_one_by_identifier(
        &self,
        _: Uuid,
    ) -> Result<Option<tournaments::Model>, DbErr> {
        Err(data_access_error())
    }

    async fn find_one_by_name(&self, _: &str) -> Result<Option<tournaments::Model>, DbErr> {
        Err(data_access_error())
    }

    async fn insert(&self, _: TournamentCreate) -> Result<tournaments::Model, DbErr> {
        Err(data_access_error())
    }

    async fn update(&self, _: TournamentUpdate) -> Result<tournaments::Model, DbErr> {
        Err(data_access_error())
    }
}
