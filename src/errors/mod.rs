//! Error handling module for the prompt gallery.
//!
//! Acquisition failures are recoverable by design: the gallery swaps in the
//! sample dataset. `GalleryError` covers everything else (config, client setup).

use thiserror::Error;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const POINTER_UNAVAILABLE: &str = "POINTER_UNAVAILABLE";
    pub const DATASET_UNAVAILABLE: &str = "DATASET_UNAVAILABLE";
    pub const MALFORMED_PAYLOAD: &str = "MALFORMED_PAYLOAD";
    /// Umbrella code shown to the user for any of the above.
    pub const ACQUISITION_FAILED: &str = "ACQUISITION_FAILED";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const CLIENT_ERROR: &str = "CLIENT_ERROR";
    pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
}

/// Failure of the two-hop dataset acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// The pointer file could not be fetched or named nothing.
    #[error("pointer resource unavailable: {0}")]
    PointerUnavailable(String),
    /// The dataset file named by the pointer could not be fetched.
    #[error("dataset resource unavailable: {0}")]
    DatasetUnavailable(String),
    /// The dataset body was not a JSON array of records.
    #[error("malformed dataset payload: {0}")]
    MalformedPayload(String),
}

impl FetchFailure {
    /// Get the error code for this failure.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchFailure::PointerUnavailable(_) => codes::POINTER_UNAVAILABLE,
            FetchFailure::DatasetUnavailable(_) => codes::DATASET_UNAVAILABLE,
            FetchFailure::MalformedPayload(_) => codes::MALFORMED_PAYLOAD,
        }
    }

    /// The code presented to the user. The view does not tell the variants apart.
    pub fn presentation_code(&self) -> &'static str {
        codes::ACQUISITION_FAILED
    }
}

/// Application error type.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error(transparent)]
    Acquisition(#[from] FetchFailure),

    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GalleryError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            GalleryError::Config(_) => codes::CONFIG_ERROR,
            GalleryError::Client(_) => codes::CLIENT_ERROR,
            GalleryError::Acquisition(failure) => failure.error_code(),
            GalleryError::Serialization(_) => codes::SERIALIZATION_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
