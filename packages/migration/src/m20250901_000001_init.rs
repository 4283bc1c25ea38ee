use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Players {
    Table,
    Id,
    Identifier,
    FirstName,
    LastName,
    NameKey,
    BirthDate,
    Points,
    Rank,
}

#[derive(Iden)]
enum Tournaments {
    Table,
    Id,
    Identifier,
    Name,
    StartDate,
    EndDate,
    PrizeMoney,
    Capacity,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Players::Identifier)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Players::FirstName).string().not_null())
                    .col(ColumnDef::new(Players::LastName).string().not_null())
                    .col(ColumnDef::new(Players::NameKey).string().not_null())
                    .col(ColumnDef::new(Players::BirthDate).date().not_null())
                    .col(
                        ColumnDef::new(Players::Points)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Players::Rank).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Ranking reads scan by position
        manager
            .create_index(
                Index::create()
                    .name("ix_players_rank")
                    .table(Players::Table)
                    .col(Players::Rank)
                    .to_owned(),
            )
            .await?;

        // One registration per person
        manager
            .create_index(
                Index::create()
                    .name("ux_players_name_key_birth_date")
                    .table(Players::Table)
                    .col(Players::NameKey)
                    .col(Players::BirthDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // tournaments
        manager
            .create_table(
                Table::create()
                    .table(Tournaments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tournaments::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Tournaments::Identifier)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Tournaments::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Tournaments::StartDate).date().not_null())
                    .col(ColumnDef::new(Tournaments::EndDate).date().not_null())
                    .col(ColumnDef::new(Tournaments::PrizeMoney).integer().null())
                    .col(ColumnDef::new(Tournaments::Capacity).integer().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dropping a table drops its indexes on both backends
        manager
            .drop_table(Table::drop().table(Tournaments::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
