//! Player domain service.

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::adapters::players_sea::{PlayerCreate, PlayerUpdate};
use crate::domain::player::{Player, PlayerToCreate, PlayerToUpdate};
use crate::domain::validation::Validate;
use crate::errors::domain::{DomainError, ResourceKind};
use crate::infra::db_errors::{map_db_err, PLAYER_ALREADY_REGISTERED};
use crate::repos::players::PlayerRepo;

/// Player domain service.
pub struct PlayerService<R: PlayerRepo> {
    repo: R,
}

impl<R: PlayerRepo> PlayerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Players ordered by ascending rank position.
    ///
    /// # Returns
    /// * `Ok(Vec<Player>)` - The ranking, best first
    /// * `Err(DomainError::DataRetrieval)` - If the store fails
    pub async fn get_all_players(&self) -> Result<Vec<Player>, DomainError> {
        let entities = self
            .repo
            .find_all()
            .await
            .map_err(|e| retrieval_failure("find_all", e))?;

        let mut players: Vec<Player> = entities.into_iter().map(Player::from).collect();
        players.sort_by_key(|p| p.rank.position);

        debug!(count = players.len(), "loaded player ranking");
        Ok(players)
    }

    /// Look up a single player.
    ///
    /// # Returns
    /// * `Ok(Player)` - The player whose stored identifier equals `identifier`
    /// * `Err(DomainError::NotFound)` - If no such player exists
    /// * `Err(DomainError::DataRetrieval)` - If the store fails
    pub async fn get_by_identifier(&self, identifier: Uuid) -> Result<Player, DomainError> {
        let entity = self
            .repo
            .find_one_by_identifier(identifier)
            .await
            .map_err(|e| retrieval_failure("find_one_by_identifier", e))?;

        match entity {
            Some(entity) => Ok(Player::from(entity)),
            None => {
                warn!(%identifier, "player not found");
                Err(DomainError::not_found_by_identifier(
                    ResourceKind::Player,
                    identifier,
                ))
            }
        }
    }

    /// Register a new player; the store assigns the ranking position.
    pub async fn create(&self, to_create: PlayerToCreate) -> Result<Player, DomainError> {
        to_create.validate()?;

        let duplicate = self
            .repo
            .find_one_by_name_and_birth_date(
                &to_create.first_name,
                &to_create.last_name,
                to_create.birth_date,
            )
            .await
            .map_err(|e| retrieval_failure("find_one_by_name_and_birth_date", e))?;
        if duplicate.is_some() {
            warn!(last_name = %to_create.last_name, "player already registered");
            return Err(already_registered(&to_create.last_name));
        }

        let last_name = to_create.last_name.clone();
        let dto = PlayerCreate {
            identifier: Uuid::new_v4(),
            first_name: to_create.first_name,
            last_name: to_create.last_name,
            birth_date: to_create.birth_date,
            points: to_create.points,
        };
        // The unique index still catches a registration racing the check above
        let stored = self
            .repo
            .insert(dto)
            .await
            .map_err(|e| write_failure(e, &last_name))?;

        info!(identifier = %stored.identifier, position = stored.rank, "player registered");
        Ok(Player::from(stored))
    }

    /// Overwrite an existing player's details and points.
    pub async fn update(&self, to_update: PlayerToUpdate) -> Result<Player, DomainError> {
        to_update.validate()?;

        let identifier = to_update.identifier;
        // Existence check first so an unknown identifier reports the lookup message
        self.get_by_identifier(identifier).await?;

        let clash = self
            .repo
            .find_one_by_name_and_birth_date(
                &to_update.first_name,
                &to_update.last_name,
                to_update.birth_date,
            )
            .await
            .map_err(|e| retrieval_failure("find_one_by_name_and_birth_date", e))?;
        if clash.is_some_and(|other| other.identifier != identifier) {
            warn!(%identifier, last_name = %to_update.last_name, "update would duplicate a player");
            return Err(already_registered(&to_update.last_name));
        }

        let last_name = to_update.last_name.clone();
        let dto = PlayerUpdate {
            identifier,
            first_name: to_update.first_name,
            last_name: to_update.last_name,
            birth_date: to_update.birth_date,
            points: to_update.points,
        };
        let stored = self.repo.update(dto).await.map_err(|e| match e {
            sea_orm::DbErr::RecordNotFound(_) => {
                DomainError::not_found_by_identifier(ResourceKind::Player, identifier)
            }
            other => write_failure(other, &last_name),
        })?;

        info!(%identifier, position = stored.rank, points = stored.points, "player updated");
        Ok(Player::from(stored))
    }
}

fn already_registered(last_name: &str) -> DomainError {
    DomainError::conflict(
        ResourceKind::Player,
        format!("Player with last name {last_name} already exists."),
    )
}

fn write_failure(e: sea_orm::DbErr, last_name: &str) -> DomainError {
    match map_db_err(ResourceKind::Player, e) {
        DomainError::Conflict(_, detail) if detail == PLAYER_ALREADY_REGISTERED => {
            already_registered(last_name)
        }
        other => other,
    }
}

fn retrieval_failure(operation: &'static str, e: sea_orm::DbErr) -> DomainError {
    error!(operation, raw_error = %e, "could not retrieve player data");
    DomainError::data_retrieval_failure(ResourceKind::Player)
}
