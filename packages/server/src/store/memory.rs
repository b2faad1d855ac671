use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{Blessing, BlessingStore, StoreError};

/// Volatile store; contents live for the lifetime of the process.
#[derive(Default)]
pub struct MemoryBlessingStore {
    blessings: RwLock<Vec<Blessing>>,
}

impl MemoryBlessingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlessingStore for MemoryBlessingStore {
    async fn append(&self, name: &str, message: &str) -> Result<Blessing, StoreError> {
        // Id assignment and push happen under one lock so ids follow
        // insertion order.
        let mut blessings = self.blessings.write().await;
        let blessing = Blessing {
            id: blessings.len() as i64 + 1,
            name: name.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        };
        blessings.push(blessing.clone());
        Ok(blessing)
    }

    async fn list_all(&self) -> Result<Vec<Blessing>, StoreError> {
        let mut all: Vec<Blessing> = self.blessings.read().await.iter().rev().cloned().collect();
        // Stable sort keeps the reversed insertion order for equal timestamps.
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(all)
    }
}
