//! Tournament domain service.

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::adapters::tournaments_sea::{TournamentCreate, TournamentUpdate};
use crate::domain::tournament::{Tournament, TournamentToCreate, TournamentToUpdate};
use crate::domain::validation::Validate;
use crate::errors::domain::{DomainError, ResourceKind};
use crate::infra::db_errors::{map_db_err, TOURNAMENT_NAME_IN_USE};
use crate::repos::tournaments::TournamentRepo;

pub struct TournamentService<R: TournamentRepo> {
    repo: R,
}

impl<R: TournamentRepo> TournamentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Tournaments ordered by ascending start date.
    pub async fn get_all_tournaments(&self) -> Result<Vec<Tournament>, DomainError> {
        let entities = self
            .repo
            .find_all()
            .await
            .map_err(|e| retrieval_failure("find_all", e))?;

        let mut tournaments: Vec<Tournament> =
            entities.into_iter().map(Tournament::from).collect();
        tournaments.sort_by_key(|t| t.start_date);

        debug!(count = tournaments.len(), "loaded tournaments");
        Ok(tournaments)
    }

    pub async fn get_by_identifier(&self, identifier: Uuid) -> Result<Tournament, DomainError> {
        let entity = self
            .repo
            .find_one_by_identifier(identifier)
            .await
            .map_err(|e| retrieval_failure("find_one_by_identifier", e))?;

        entity.map(Tournament::from).ok_or_else(|| {
            warn!(%identifier, "tournament not found");
            DomainError::not_found_by_identifier(ResourceKind::Tournament, identifier)
        })
    }

    pub async fn create(&self, to_create: TournamentToCreate) -> Result<Tournament, DomainError> {
        to_create.validate()?;

        let duplicate = self
            .repo
            .find_one_by_name(&to_create.name)
            .await
            .map_err(|e| retrieval_failure("find_one_by_name", e))?;
        if duplicate.is_some() {
            warn!(name = %to_create.name, "tournament already exists");
            return Err(name_taken(&to_create.name));
        }

        let name = to_create.name.clone();
        let dto = TournamentCreate {
            identifier: Uuid::new_v4(),
            name: to_create.name,
            start_date: to_create.start_date,
            end_date: to_create.end_date,
            prize_money: to_create.prize_money,
            capacity: to_create.capacity,
        };
        let stored = self
            .repo
            .insert(dto)
            .await
            .map_err(|e| write_failure(e, &name))?;

        info!(identifier = %stored.identifier, name = %stored.name, "tournament created");
        Ok(Tournament::from(stored))
    }

    pub async fn update(&self, to_update: TournamentToUpdate) -> Result<Tournament, DomainError> {
        to_update.validate()?;

        let identifier = to_update.identifier;
        self.get_by_identifier(identifier).await?;

        let clash = self
            .repo
            .find_one_by_name(&to_update.name)
            .await
            .map_err(|e| retrieval_failure("find_one_by_name", e))?;
        if clash.is_some_and(|other| other.identifier != identifier) {
            warn!(%identifier, name = %to_update.name, "rename clashes with another tournament");
            return Err(name_taken(&to_update.name));
        }

        let name = to_update.name.clone();
        let dto = TournamentUpdate {
            identifier,
            name: to_update.name,
            start_date: to_update.start_date,
            end_date: to_update.end_date,
            prize_money: to_update.prize_money,
            capacity: to_update.capacity,
        };
        let stored = self.repo.update(dto).await.map_err(|e| match e {
            sea_orm::DbErr::RecordNotFound(_) => {
                DomainError::not_found_by_identifier(ResourceKind::Tournament, identifier)
            }
            other => write_failure(other, &name),
        })?;

        info!(%identifier, "tournament updated");
        Ok(Tournament::from(stored))
    }
}

fn name_taken(name: &str) -> DomainError {
    DomainError::conflict(
        ResourceKind::Tournament,
        format!("Tournament with name {name} already exists."),
    )
}

fn write_failure(e: sea_orm::DbErr, name: &str) -> DomainError {
    match map_db_err(ResourceKind::Tournament, e) {
        DomainError::Conflict(_, detail) if detail == TOURNAMENT_NAME_IN_USE => name_taken(name),
        other => other,
    }
}

fn retrieval_failure(operation: &'static str, e: sea_orm::DbErr) -> DomainError {
    error!(operation, raw_error = %e, "could not retrieve tournament data");
    DomainError::data_retrieval_failure(ResourceKind::Tournament)
}
