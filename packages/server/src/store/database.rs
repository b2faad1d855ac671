use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::{Blessing, BlessingStore, StoreError};
use crate::entity::blessing;

/// Durable store backed by the `blessing` table.
pub struct DatabaseBlessingStore {
    db: DatabaseConnection,
}

impl DatabaseBlessingStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlessingStore for DatabaseBlessingStore {
    async fn append(&self, name: &str, message: &str) -> Result<Blessing, StoreError> {
        let model = blessing::ActiveModel {
            name: Set(name.to_string()),
            message: Set(message.to_string()),
            timestamp: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Blessing::from(model))
    }

    async fn list_all(&self) -> Result<Vec<Blessing>, StoreError> {
        let models = blessing::Entity::find()
            .order_by_desc(blessing::Column::Timestamp)
            .order_by_desc(blessing::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Blessing::from).collect())
    }
}
