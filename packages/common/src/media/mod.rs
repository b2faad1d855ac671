mod error;
mod traits;

#[cfg(feature = "cloudinary")]
pub mod cloudinary;
pub mod memory;

pub use error::MediaError;
pub use traits::{MAX_LIST_RESULTS, MediaGateway, StoredImage, UploadRequest};
