//! Configuration module for the prompt gallery.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

use crate::errors::{GalleryError, Result};

/// Where the pointer file and the datasets it names are hosted.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/Larch-C/SavePrompt/main";

/// Records per page.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Gallery configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base path shared by `version.txt` and the dataset files, without trailing slash
    pub base_url: String,
    /// Number of records shown per page
    pub page_size: usize,
    /// Optional per-request timeout; `None` leaves it to the transport
    pub request_timeout: Option<Duration>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = env::var("GALLERY_BASE_URL")
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        if base_url.is_empty() {
            return Err(GalleryError::Config(
                "GALLERY_BASE_URL must not be empty".to_string(),
            ));
        }

        let page_size = match env::var("GALLERY_PAGE_SIZE") {
            Ok(raw) => parse_page_size(&raw)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let request_timeout = match env::var("GALLERY_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        let log_level = env::var("GALLERY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            base_url,
            page_size,
            request_timeout,
            log_level,
        })
    }

    /// URL of the pointer file naming the current dataset.
    pub fn pointer_url(&self) -> String {
        format!("{}/version.txt", self.base_url)
    }

    /// URL of a dataset file living next to the pointer file.
    pub fn dataset_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.base_url, file_name)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn parse_page_size(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size >= 1 => Ok(size),
        _ => Err(GalleryError::Config(format!(
            "GALLERY_PAGE_SIZE must be a positive integer, got {:?}",
            raw
        ))),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| {
            GalleryError::Config(format!(
                "GALLERY_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                raw
            ))
        })
}
