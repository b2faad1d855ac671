use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blessing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    /// Set by the server at write time; the column default covers direct inserts.
    #[sea_orm(indexed, default_expr = "Expr::current_timestamp()")]
    pub timestamp: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
