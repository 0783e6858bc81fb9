//! HTTP client for the cleaning backend.

use std::path::Path;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use dcs_model::{UploadedFile, Variant};

use crate::error::{ApiError, Result};
use crate::types::{Preview, PreviewResponse, ProcessAck, ProcessRequest, RecentUpload};

/// User agent string for backend requests.
const USER_AGENT_VALUE: &str = concat!("data-cleaner-studio/", env!("CARGO_PKG_VERSION"));

/// Client for the four workflow operations plus the uploads listing.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct CleanerClient {
    client: reqwest::Client,
    base_url: String,
}

impl CleanerClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - Root of the backend, e.g. `http://localhost:8000`.
    ///   A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Uploads a file and returns its server-side identity.
    ///
    /// The file is read from disk and sent as the `file` field of a
    /// multipart form.
    pub async fn upload(&self, path: &Path) -> Result<UploadedFile> {
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let url = format!("{}/uploads/", self.base_url);
        tracing::debug!("Uploading {} ({} bytes) to {}", filename, bytes.len(), url);

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        handle_response(response).await
    }

    /// Fetches the most recently uploaded files.
    pub async fn recent_uploads(&self) -> Result<Vec<RecentUpload>> {
        let url = format!("{}/uploads/", self.base_url);
        tracing::debug!("Listing recent uploads from {}", url);

        let response = self.client.get(&url).send().await?;
        handle_response(response).await
    }

    /// Fetches the column preview for an uploaded file.
    ///
    /// The raw response carries two index-aligned arrays; they are zipped
    /// into a validated column map here, and any inconsistency surfaces as
    /// [`ApiError::Ingestion`] rather than a partial mapping.
    pub async fn preview(&self, file_id: i64) -> Result<Preview> {
        let url = format!("{}/clean/clean/preview?file_id={}", self.base_url, file_id);
        tracing::debug!("Requesting preview from {}", url);

        let response = self.client.post(&url).send().await?;
        let raw: PreviewResponse = handle_response(response).await?;
        Ok(raw.validate()?)
    }

    /// Asks the server to clean the file down to the selected columns.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptySelection`] without issuing a request when
    /// `columns` is empty.
    pub async fn process(
        &self,
        file_id: i64,
        columns: Vec<String>,
        generate_image_names: bool,
    ) -> Result<ProcessAck> {
        if columns.is_empty() {
            return Err(ApiError::EmptySelection);
        }

        let url = format!("{}/clean/clean/process", self.base_url);
        tracing::debug!(
            "Processing file {} with {} column(s), generate_image_names={}",
            file_id,
            columns.len(),
            generate_image_names
        );

        let body = ProcessRequest {
            file_id,
            columns,
            generate_image_names,
        };

        let response = self.client.post(&url).json(&body).send().await?;
        handle_response(response).await
    }

    /// URL of the cleaned CSV in the requested delimiter variant.
    ///
    /// Downloads are a side channel: the caller opens this URL in the system
    /// browser and never parses a response.
    pub fn download_url(&self, file_id: i64, variant: Variant) -> String {
        format!(
            "{}/clean/clean/download?file_id={}&variant={}",
            self.base_url,
            file_id,
            variant.as_str()
        )
    }
}

/// Checks the HTTP status and parses the JSON body.
async fn handle_response<T>(response: reqwest::Response) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Backend returned {}: {}", status, body);
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = CleanerClient::new("http://localhost:8000");
        assert!(client.is_ok());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = CleanerClient::new("http://localhost:8000/").unwrap();
        assert_eq!(
            client.download_url(5, Variant::Semicolon),
            "http://localhost:8000/clean/clean/download?file_id=5&variant=semicolon"
        );
    }

    #[test]
    fn download_url_per_variant() {
        let client = CleanerClient::new("http://localhost:8000").unwrap();
        assert_eq!(
            client.download_url(9, Variant::Comma),
            "http://localhost:8000/clean/clean/download?file_id=9&variant=comma"
        );
    }

    #[tokio::test]
    async fn process_rejects_empty_selection_locally() {
        // Unroutable base URL: if the guard failed we would see a network
        // error instead of EmptySelection.
        let client = CleanerClient::new("http://127.0.0.1:1").unwrap();
        let err = client.process(1, Vec::new(), false).await.unwrap_err();
        assert_eq!(err, ApiError::EmptySelection);
    }

    #[tokio::test]
    async fn upload_of_unreadable_file_is_an_io_error() {
        let client = CleanerClient::new("http://127.0.0.1:1").unwrap();
        let err = client
            .upload(Path::new("/nonexistent/catalogo.csv"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }
}
