mod support;

use sea_orm::DbErr;
use tennis::adapters::tournaments_sea::{TournamentCreate, TournamentUpdate};
use tennis::adapters::TournamentRepoSea;
use tennis::errors::{DomainError, ResourceKind};
use tennis::infra::db_errors::map_db_err;
use tennis::repos::TournamentRepo;
use time::macros::date;
use uuid::Uuid;

fn us_open() -> TournamentCreate {
    TournamentCreate {
        identifier: Uuid::new_v4(),
        name: "US Open".into(),
        start_date: date!(2025 - 08 - 24),
        end_date: date!(2025 - 09 - 07),
        prize_money: Some(3_500_000),
        capacity: 128,
    }
}

fn indian_wells() -> TournamentCreate {
    TournamentCreate {
        identifier: Uuid::new_v4(),
        name: "Indian Wells".into(),
        start_date: date!(2025 - 03 - 05),
        end_date: date!(2025 - 03 - 16),
        prize_money: None,
        capacity: 96,
    }
}

#[tokio::test]
async fn test_find_all_orders_by_start_date() -> Result<(), DbErr> {
    support::init();
    let repo = TournamentRepoSea::new(support::db::sqlite_memory().await);
    repo.insert(us_open()).await?;
    repo.insert(indian_wells()).await?;

    let names: Vec<_> = repo
        .find_all()
        .await?
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(names, ["Indian Wells", "US Open"]);
    Ok(())
}

#[tokio::test]
async fn test_optional_prize_money_round_trips() -> Result<(), DbErr> {
    support::init();
    let repo = TournamentRepoSea::new(support::db::sqlite_memory().await);
    let dto = indian_wells();
    let identifier = dto.identifier;
    repo.insert(dto).await?;

    let stored = repo
        .find_one_by_identifier(identifier)
        .await?
        .expect("tournament stored");

    assert_eq!(stored.prize_money, None);
    assert_eq!(stored.capacity, 96);
    assert!(repo.find_one_by_name("Indian Wells").await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_update_overwrites_columns() -> Result<(), DbErr> {
    support::init();
    let repo = TournamentRepoSea::new(support::db::sqlite_memory().await);
    let stored = repo.insert(us_open()).await?;

    let updated = repo
        .update(TournamentUpdate {
            identifier: stored.identifier,
            name: "US Open".into(),
            start_date: date!(2025 - 08 - 25),
            end_date: date!(2025 - 09 - 08),
            prize_money: Some(4_000_000),
            capacity: 128,
        })
        .await?;

    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.start_date, date!(2025 - 08 - 25));
    assert_eq!(updated.prize_money, Some(4_000_000));
    Ok(())
}

#[tokio::test]
async fn test_duplicate_name_maps_to_conflict() -> Result<(), DbErr> {
    support::init();
    let repo = TournamentRepoSea::new(support::db::sqlite_memory().await);
    repo.insert(us_open()).await?;

    let err = repo.insert(us_open()).await.unwrap_err();

    assert_eq!(
        map_db_err(ResourceKind::Tournament, err),
        DomainError::conflict(ResourceKind::Tournament, "Tournament name already in use")
    );
    Ok(())
}

#[tokio::test]
async fn test_rename_onto_existing_name_maps_to_conflict() -> Result<(), DbErr> {
    support::init();
    let repo = TournamentRepoSea::new(support::db::sqlite_memory().await);
    repo.insert(us_open()).await?;
    let wells = repo.insert(indian_wells()).await?;

    let err = repo
        .update(TournamentUpdate {
            identifier: wells.identifier,
            name: "US Open".into(),
            start_date: wells.start_date,
            end_date: wells.end_date,
            prize_money: wells.prize_money,
            capacity: wells.capacity,
        })
        .await
        .unwrap_err();

    assert_eq!(
        map_db_err(ResourceKind::Tournament, err),
        DomainError::conflict(ResourceKind::Tournament, "Tournament name already in use")
    );
    Ok(())
}
