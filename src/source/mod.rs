//! Remote dataset acquisition.
//!
//! The host publishes a `version.txt` pointer naming the current dataset file.
//! Acquiring the dataset is two sequential requests: resolve the pointer, then
//! fetch the JSON array it names from the same base path.

mod fallback;

pub use fallback::*;

use reqwest::Client;

use crate::config::Config;
use crate::errors::{FetchFailure, GalleryError};
use crate::models::{find_record, Record};

/// Identifies this client in the remote host's logs.
pub const CLIENT_IDENTIFIER: &str = "NotMuch-App/1.0";

/// Client for the remote pointer + dataset files.
#[derive(Debug, Clone)]
pub struct RemoteDataset {
    client: Client,
    config: Config,
}

impl RemoteDataset {
    /// Build a client for the configured host.
    pub fn new(config: &Config) -> Result<Self, GalleryError> {
        let mut builder = Client::builder().user_agent(CLIENT_IDENTIFIER);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| GalleryError::Client(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Fetch the pointer file and return the dataset file name it holds.
    pub async fn resolve_pointer(&self) -> Result<String, FetchFailure> {
        let url = self.config.pointer_url();

        let response = self.client.get(&url).send().await.map_err(|e| {
            FetchFailure::PointerUnavailable(format!("request to {} failed: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::PointerUnavailable(format!(
                "{} returned HTTP {}",
                url,
                status.as_u16()
            )));
        }

        let body = response.text().await.map_err(|e| {
            FetchFailure::PointerUnavailable(format!("failed to read {}: {}", url, e))
        })?;

        let file_name = body.trim();
        if file_name.is_empty() {
            return Err(FetchFailure::PointerUnavailable(format!(
                "{} is empty",
                url
            )));
        }

        tracing::debug!("Pointer resolved to {}", file_name);
        Ok(file_name.to_string())
    }

    /// Resolve the pointer and download the dataset it names.
    pub async fn acquire(&self) -> Result<Vec<Record>, FetchFailure> {
        let file_name = self.resolve_pointer().await?;
        let url = self.config.dataset_url(&file_name);

        let response = self.client.get(&url).send().await.map_err(|e| {
            FetchFailure::DatasetUnavailable(format!("request to {} failed: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::DatasetUnavailable(format!(
                "{} returned HTTP {}",
                url,
                status.as_u16()
            )));
        }

        let body = response.text().await.map_err(|e| {
            FetchFailure::DatasetUnavailable(format!("failed to read {}: {}", url, e))
        })?;

        let records = parse_dataset(&body)?;
        tracing::info!("Acquired {} records from {}", records.len(), file_name);
        Ok(records)
    }

    /// Acquire the dataset and pick out a single record.
    ///
    /// `Ok(None)` means the dataset loaded but holds no record with this id.
    pub async fn fetch_record(&self, id: i64) -> Result<Option<Record>, FetchFailure> {
        let records = self.acquire().await?;
        Ok(find_record(&records, id).cloned())
    }
}

/// Parse a dataset body.
///
/// The body must be JSON with an array at the top level; nothing else about
/// the payload is validated. Entries are decoded one at a time and an entry
/// that cannot become a record (no numeric `id`, not an object) is skipped
/// rather than failing the whole dataset.
pub fn parse_dataset(body: &str) -> Result<Vec<Record>, FetchFailure> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| FetchFailure::MalformedPayload(format!("invalid JSON: {}", e)))?;

    let serde_json::Value::Array(entries) = value else {
        return Err(FetchFailure::MalformedPayload(
            "expected a JSON array of records".to_string(),
        ));
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Record>(entry) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("Skipping dataset entry {}: {}", index, e),
        }
    }

    Ok(records)
}
