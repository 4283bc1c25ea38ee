use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tournaments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub identifier: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_name = "start_date")]
    pub start_date: Date,
    #[sea_orm(column_name = "end_date")]
    pub end_date: Date,
    #[sea_orm(column_name = "prize_money")]
    pub prize_money: Option<i32>,
    pub capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
