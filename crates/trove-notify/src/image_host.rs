//! Client for the image hosting API.
//!
//! The host takes a multipart upload with an API key and answers with a
//! direct URL, a display URL and a thumbnail URL; rejections carry a
//! message and a numeric code. A missing key degrades to a
//! configuration error before any bytes leave the process.

use crate::config::ImageHostConfig;
use crate::NotifyError;
use serde::Deserialize;

/// Default image host.
const DEFAULT_BASE_URL: &str = "https://api.imgbb.com";

/// URLs for a successfully hosted image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedImage {
    /// Direct URL to the asset.
    pub url: String,
    /// URL of the viewer page.
    pub display_url: String,
    /// Thumbnail URL.
    pub thumb_url: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    data: Option<UploadData>,
    error: Option<UploadError>,
    #[serde(default)]
    status: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: String,
    display_url: String,
    thumb: Option<ThumbData>,
}

#[derive(Debug, Deserialize)]
struct ThumbData {
    url: String,
}

#[derive(Debug, Deserialize)]
struct UploadError {
    message: String,
    #[serde(default)]
    code: Option<i64>,
}

/// Uploads admin-panel images to the hosting API.
pub struct ImageHostClient {
    config: ImageHostConfig,
    client: reqwest::Client,
    base_url: String,
}

impl ImageHostClient {
    pub fn new(config: ImageHostConfig) -> Self {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(config: ImageHostConfig, base_url: impl Into<String>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Upload one image, returning its hosted URLs.
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: impl Into<String>,
    ) -> Result<HostedImage, NotifyError> {
        let key = self.config.key()?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.into());
        let form = reqwest::multipart::Form::new().part("image", part);

        let url = format!("{}/1/upload?key={}", self.base_url, key);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| NotifyError::Http(e.to_string()))?;

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| NotifyError::Http(e.to_string()))?;

        match body {
            UploadResponse {
                success: true,
                data: Some(data),
                ..
            } => Ok(HostedImage {
                thumb_url: data
                    .thumb
                    .map(|t| t.url)
                    .unwrap_or_else(|| data.url.clone()),
                display_url: data.display_url,
                url: data.url,
            }),
            UploadResponse { error, status, .. } => {
                let (message, code) = match error {
                    Some(e) => (e.message, e.code.or(status).unwrap_or(0)),
                    None => ("image host rejected the upload".to_string(), status.unwrap_or(0)),
                };
                tracing::warn!(code, message, "image upload failed");
                Err(NotifyError::Upload { code, message })
            }
        }
    }
}
