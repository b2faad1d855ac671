mod database;
mod memory;

pub use database::DatabaseBlessingStore;
pub use memory::MemoryBlessingStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::entity::blessing;

/// A short named message left for the couple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct Blessing {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "Congrats!")]
    pub message: String,
    /// Server-assigned creation time.
    pub timestamp: DateTime<Utc>,
}

impl From<blessing::Model> for Blessing {
    fn from(model: blessing::Model) -> Self {
        Self {
            id: model.id.into(),
            name: model.name,
            message: model.message,
            timestamp: model.timestamp,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or written.
    #[error("blessing store unavailable: {0}")]
    Unavailable(String),
}

impl From<sea_orm::DbErr> for StoreError {
    fn from(err: sea_orm::DbErr) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

/// Append-only persistence for blessings.
#[async_trait]
pub trait BlessingStore: Send + Sync {
    /// Persist a new blessing stamped with the current time and return it.
    async fn append(&self, name: &str, message: &str) -> Result<Blessing, StoreError>;

    /// All blessings, newest first. Blessings sharing a timestamp are
    /// ordered by insertion, latest first.
    async fn list_all(&self) -> Result<Vec<Blessing>, StoreError>;
}
