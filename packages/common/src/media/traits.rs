use async_trait::async_trait;
use serde::Serialize;

use super::error::MediaError;
use crate::event::{EventId, public_id_from_filename};

/// Upper bound on URLs returned by a single listing.
pub const MAX_LIST_RESULTS: usize = 30;

/// An image to be stored under an event folder.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub event: EventId,
    /// Original filename as sent by the client, if any.
    pub filename: Option<String>,
    pub content: Vec<u8>,
    pub content_type: Option<String>,
}

impl UploadRequest {
    /// Public identifier derived from the original filename.
    pub fn public_id(&self) -> Option<String> {
        self.filename.as_deref().and_then(public_id_from_filename)
    }
}

/// Result of a successful upload, as reported by the media host.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct StoredImage {
    /// Publicly accessible URL of the stored image.
    #[schema(example = "https://res.cloudinary.com/demo/image/upload/v1/wedding/private/ceremony/photo1.jpg")]
    pub url: String,
    /// Identifier of the object on the media host, including its folder.
    #[schema(example = "wedding/private/ceremony/photo1")]
    pub public_id: String,
    #[schema(example = "wedding/private/ceremony")]
    pub folder: String,
    #[schema(example = "photo1.jpg")]
    pub original_filename: Option<String>,
    #[schema(example = "image/jpeg")]
    pub content_type: Option<String>,
    /// Uploaded size in bytes.
    #[schema(example = 142857)]
    pub size: u64,
    /// Raw response returned by the media host.
    #[schema(value_type = Object)]
    pub metadata: serde_json::Value,
}

/// Storage and search over event-scoped image folders.
#[async_trait]
pub trait MediaGateway: Send + Sync {
    /// Store an image under the folder derived from its event.
    ///
    /// Empty content is rejected with [`MediaError::NoFileProvided`] without
    /// contacting the media host.
    async fn store_image(&self, request: UploadRequest) -> Result<StoredImage, MediaError> {
        if request.content.is_empty() {
            return Err(MediaError::NoFileProvided);
        }
        self.upload(request).await
    }

    /// Send non-empty content to the media host.
    async fn upload(&self, request: UploadRequest) -> Result<StoredImage, MediaError>;

    /// URLs of the images in an event folder, newest first, at most
    /// [`MAX_LIST_RESULTS`]. An empty folder yields an empty list.
    async fn list_images(&self, event: &EventId) -> Result<Vec<String>, MediaError>;
}
