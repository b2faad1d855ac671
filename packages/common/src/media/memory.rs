use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::error::MediaError;
use super::traits::{MAX_LIST_RESULTS, MediaGateway, StoredImage, UploadRequest};
use crate::event::EventId;

#[derive(Debug, Clone)]
struct MemoryObject {
    folder: String,
    public_id: String,
    url: String,
    size: u64,
    /// Monotonic upload sequence; stands in for the host's creation time.
    sequence: u64,
    created_at: DateTime<Utc>,
}

/// In-process media host for local development and tests.
///
/// Re-uploading to an existing public id inside a folder replaces the object,
/// mirroring the overwrite behavior of the hosted service.
pub struct MemoryMediaGateway {
    base_url: String,
    objects: RwLock<Vec<MemoryObject>>,
    sequence: AtomicU64,
    remote_calls: AtomicU64,
}

impl MemoryMediaGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            objects: RwLock::new(Vec::new()),
            sequence: AtomicU64::new(0),
            remote_calls: AtomicU64::new(0),
        }
    }

    /// Number of calls that would have reached a remote host.
    pub fn remote_calls(&self) -> u64 {
        self.remote_calls.load(Ordering::SeqCst)
    }

    fn object_url(&self, folder: &str, public_id: &str) -> String {
        format!("{}/{folder}/{public_id}", self.base_url)
    }
}

impl Default for MemoryMediaGateway {
    fn default() -> Self {
        Self::new("memory://media")
    }
}

#[async_trait]
impl MediaGateway for MemoryMediaGateway {
    async fn upload(&self, request: UploadRequest) -> Result<StoredImage, MediaError> {
        self.remote_calls.fetch_add(1, Ordering::SeqCst);

        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let folder = request.event.folder();
        let public_id = request
            .public_id()
            .unwrap_or_else(|| format!("upload_{sequence}"));
        let object = MemoryObject {
            url: self.object_url(&folder, &public_id),
            folder,
            public_id,
            size: request.content.len() as u64,
            sequence,
            created_at: Utc::now(),
        };

        {
            let mut objects = self.objects.write().await;
            objects.retain(|o| !(o.folder == object.folder && o.public_id == object.public_id));
            objects.push(object.clone());
        }

        tracing::debug!(folder = %object.folder, public_id = %object.public_id, "Stored image in memory");

        Ok(StoredImage {
            url: object.url.clone(),
            public_id: format!("{}/{}", object.folder, object.public_id),
            folder: object.folder.clone(),
            original_filename: request.filename,
            content_type: request.content_type,
            size: object.size,
            metadata: serde_json::json!({
                "public_id": format!("{}/{}", object.folder, object.public_id),
                "folder": object.folder,
                "bytes": object.size,
                "resource_type": "image",
                "created_at": object.created_at.to_rfc3339(),
                "secure_url": object.url,
            }),
        })
    }

    async fn list_images(&self, event: &EventId) -> Result<Vec<String>, MediaError> {
        self.remote_calls.fetch_add(1, Ordering::SeqCst);

        let folder = event.folder();
        let objects = self.objects.read().await;
        let mut matching: Vec<&MemoryObject> =
            objects.iter().filter(|o| o.folder == folder).collect();
        matching.sort_by(|a, b| b.sequence.cmp(&a.sequence));

        Ok(matching
            .into_iter()
            .take(MAX_LIST_RESULTS)
            .map(|o| o.url.clone())
            .collect())
    }
}
