use common::media::cloudinary::CloudinaryConfig;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origins. Empty allows any origin.
    #[serde(default)]
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Volatile, lost on restart.
    Memory,
    /// Durable table in the configured database.
    Database,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaProvider {
    Cloudinary,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MediaConfig {
    pub provider: MediaProvider,
    /// Maximum accepted upload size in bytes.
    pub max_upload_size: u64,
    /// URL prefix for image links produced by the in-memory provider.
    /// Nothing serves these URLs; they only identify the stored image.
    pub memory_base_url: String,
    #[serde(default)]
    pub cloudinary: CloudinaryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub media: MediaConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5055)?
            .set_default("server.cors.max_age", 3600)?
            .set_default("store.backend", "memory")?
            .set_default("media.provider", "cloudinary")?
            .set_default("media.max_upload_size", 20 * 1024 * 1024)?
            .set_default("media.memory_base_url", "memory://media")?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., GALLERY__MEDIA__CLOUDINARY__API_SECRET)
            .add_source(
                Environment::with_prefix("GALLERY")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allow_origins")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
