use std::sync::Arc;

use anyhow::Context;
use common::media::MediaGateway;
use common::media::cloudinary::CloudinaryGateway;
use common::media::memory::MemoryMediaGateway;

use crate::config::{AppConfig, MediaProvider, StoreBackend};
use crate::database::init_db;
use crate::store::{BlessingStore, DatabaseBlessingStore, MemoryBlessingStore};

#[derive(Clone)]
pub struct AppState {
    pub blessings: Arc<dyn BlessingStore>,
    pub media: Arc<dyn MediaGateway>,
    pub config: AppConfig,
}

impl AppState {
    /// Wire the configured blessing store and media gateway.
    pub async fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let blessings: Arc<dyn BlessingStore> = match config.store.backend {
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory blessing store; blessings are lost on restart");
                Arc::new(MemoryBlessingStore::new())
            }
            StoreBackend::Database => {
                let url = config
                    .database
                    .url
                    .as_deref()
                    .context("database.url is required when store.backend = \"database\"")?;
                let db = init_db(url)
                    .await
                    .context("Failed to initialize database")?;
                Arc::new(DatabaseBlessingStore::new(db))
            }
        };

        let media: Arc<dyn MediaGateway> = match config.media.provider {
            MediaProvider::Cloudinary => {
                Arc::new(CloudinaryGateway::new(config.media.cloudinary.clone())?)
            }
            MediaProvider::Memory => {
                tracing::warn!("Using in-memory media gateway; uploads are lost on restart");
                Arc::new(MemoryMediaGateway::new(config.media.memory_base_url.clone()))
            }
        };

        Ok(Self {
            blessings,
            media,
            config,
        })
    }
}
