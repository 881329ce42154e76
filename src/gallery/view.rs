//! Serializable snapshot handed to the rendering layer.

use serde::Serialize;

use crate::models::Record;
use crate::pager::{PageLink, PagerState};
use crate::query::QueryState;

/// Shown above the list when the live dataset could not be loaded.
pub const SAMPLE_DATA_NOTICE: &str = "Failed to load prompts, showing sample data";

/// Where the displayed records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DataOrigin {
    Live,
    Sample,
}

/// Why the list has nothing to show, if it doesn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyState {
    None,
    /// Records exist but the filters exclude all of them; clearing filters recovers.
    NoResults,
    NoData,
}

/// Everything one render of the gallery needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryView {
    pub loading: bool,
    pub origin: DataOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub query: QueryState,
    pub items: Vec<Record>,
    pub pager: PagerState,
    pub item_range: Option<(usize, usize)>,
    pub page_links: Vec<PageLink>,
    pub show_pagination: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub dataset_count: usize,
    pub available_tags: Vec<String>,
    pub empty_state: EmptyState,
}
