//! Prompt gallery data layer.
//!
//! Acquires a versioned JSON dataset of prompts from a static host, falls back
//! to sample records when that fails, and derives the searchable, filterable,
//! paginated view of it.

pub mod config;
pub mod errors;
pub mod gallery;
pub mod models;
pub mod pager;
pub mod query;
pub mod source;

pub use config::Config;
pub use errors::{FetchFailure, GalleryError};
pub use gallery::{DataOrigin, DetailState, EmptyState, Gallery, GalleryView};
pub use models::{Owner, Record, Tag};
pub use pager::{PageLink, Viewport};
pub use source::{fallback_dataset, RemoteDataset};
