//! Detail view of a single record.
//!
//! Unlike the list, the detail view never substitutes sample data: a failed or
//! empty lookup shows an error with a manual retry.

use crate::errors::FetchFailure;
use crate::models::Record;
use crate::source::RemoteDataset;

/// Outcome of looking up one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Found(Box<Record>),
    NotFound,
    Failed(FetchFailure),
}

impl DetailState {
    pub fn from_lookup(result: Result<Option<Record>, FetchFailure>) -> Self {
        match result {
            Ok(Some(record)) => DetailState::Found(Box::new(record)),
            Ok(None) => DetailState::NotFound,
            Err(failure) => DetailState::Failed(failure),
        }
    }

    pub fn record(&self) -> Option<&Record> {
        match self {
            DetailState::Found(record) => Some(&**record),
            _ => None,
        }
    }
}

/// Read a route id the way links are written: leading whitespace and an
/// optional sign, then digits. Anything after the digits is ignored, so
/// `"2abc"` names record 2.
pub fn parse_record_id(raw_id: &str) -> Option<i64> {
    let trimmed = raw_id.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        return None;
    }

    trimmed[..sign_len + digits_len].parse().ok()
}

/// Parse a detail route id and load the record it names.
pub async fn load_detail(source: &RemoteDataset, raw_id: &str) -> DetailState {
    let Some(id) = parse_record_id(raw_id) else {
        tracing::debug!("Ignoring non-numeric record id {:?}", raw_id);
        return DetailState::NotFound;
    };

    let state = DetailState::from_lookup(source.fetch_record(id).await);
    if let DetailState::Failed(failure) = &state {
        tracing::warn!("Failed to load record {}: {}", id, failure);
    }
    state
}
