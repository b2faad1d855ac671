use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};

use super::error::MediaError;
use super::traits::{MAX_LIST_RESULTS, MediaGateway, StoredImage, UploadRequest};
use crate::event::EventId;

/// Credentials and endpoint for a Cloudinary account.
#[derive(Debug, Deserialize, Clone)]
pub struct CloudinaryConfig {
    #[serde(default)]
    pub cloud_name: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
    /// API root. Default: "https://api.cloudinary.com".
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    "https://api.cloudinary.com".into()
}

impl Default for CloudinaryConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            api_base: default_api_base(),
        }
    }
}

/// Media gateway backed by the Cloudinary upload and search APIs.
pub struct CloudinaryGateway {
    config: CloudinaryConfig,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    resources: Vec<SearchResource>,
}

#[derive(Deserialize)]
struct SearchResource {
    secure_url: String,
}

impl CloudinaryGateway {
    pub fn new(config: CloudinaryConfig) -> Result<Self, MediaError> {
        if config.cloud_name.is_empty() || config.api_key.is_empty() || config.api_secret.is_empty()
        {
            return Err(MediaError::Misconfigured(
                "cloud_name, api_key and api_secret are required".into(),
            ));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| MediaError::Misconfigured(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/v1_1/{}/{path}",
            self.config.api_base.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    fn sign(&self, params: &[(&str, String)]) -> String {
        sign_params(params, &self.config.api_secret)
    }
}

/// Cloudinary request signature: SHA-1 over the `key=value` pairs sorted by
/// key and joined with `&`, followed directly by the API secret.
pub(crate) fn sign_params(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Search expression matching exactly one folder.
pub(crate) fn folder_expression(folder: &str) -> String {
    format!("folder=\"{}\"", folder.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Pull the human-readable message out of a Cloudinary error body.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string());
    format!("{status}: {message}")
}

#[async_trait]
impl MediaGateway for CloudinaryGateway {
    async fn upload(&self, request: UploadRequest) -> Result<StoredImage, MediaError> {
        let folder = request.event.folder();
        let timestamp = chrono::Utc::now().timestamp().to_string();

        let mut signed = vec![("folder", folder.clone()), ("timestamp", timestamp)];
        if let Some(public_id) = request.public_id() {
            signed.push(("public_id", public_id));
        }
        let signature = self.sign(&signed);

        let size = request.content.len() as u64;
        let mut part = Part::bytes(request.content);
        if let Some(filename) = &request.filename {
            part = part.file_name(filename.clone());
        }
        if let Some(content_type) = &request.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| MediaError::UploadFailed(format!("invalid content type: {e}")))?;
        }

        let mut form = Form::new()
            .part("file", part)
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature);
        for (key, value) in signed {
            form = form.text(key, value);
        }

        tracing::info!(folder = %folder, "Uploading image to Cloudinary");

        let response = self
            .client
            .post(self.endpoint("image/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::UploadFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MediaError::UploadFailed(e.to_string()))?;
        if !status.is_success() {
            return Err(MediaError::UploadFailed(error_message(status, &body)));
        }

        let metadata: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| MediaError::UploadFailed(format!("malformed upload response: {e}")))?;

        let url = metadata["secure_url"]
            .as_str()
            .ok_or_else(|| MediaError::UploadFailed("upload response has no secure_url".into()))?
            .to_string();
        let public_id = metadata["public_id"].as_str().unwrap_or_default().to_string();

        Ok(StoredImage {
            url,
            public_id,
            folder,
            original_filename: request.filename,
            content_type: request.content_type,
            size: metadata["bytes"].as_u64().unwrap_or(size),
            metadata,
        })
    }

    async fn list_images(&self, event: &EventId) -> Result<Vec<String>, MediaError> {
        let body = serde_json::json!({
            "expression": folder_expression(&event.folder()),
            "sort_by": [{ "created_at": "desc" }],
            "max_results": MAX_LIST_RESULTS,
        });

        let response = self
            .client
            .post(self.endpoint("resources/search"))
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .json(&body)
            .send()
            .await
            .map_err(|e| MediaError::FetchFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(MediaError::FetchFailed(error_message(status, &text)));
        }

        let result: SearchResponse = response
            .json()
            .await
            .map_err(|e| MediaError::FetchFailed(format!("malformed search response: {e}")))?;

        Ok(result
            .resources
            .into_iter()
            .take(MAX_LIST_RESULTS)
            .map(|r| r.secure_url)
            .collect())
    }
}
