//! Gallery session state.
//!
//! A `Gallery` owns the dataset plus the query and page state of one view.
//! Every derived value (filtered set, visible page, page links) is recomputed
//! from the current inputs on demand; nothing derived is stored.

mod detail;
mod view;

pub use detail::*;
pub use view::*;

use crate::errors::FetchFailure;
use crate::models::{find_record, Record};
use crate::pager::{self, PageLink, PagerState, Viewport};
use crate::query::{self, QueryState};
use crate::source::{fallback_dataset, RemoteDataset};

/// Whether the view is waiting for data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// Identifies one load; only the most recent ticket may publish its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// State of a single gallery view.
#[derive(Debug, Clone)]
pub struct Gallery {
    records: Vec<Record>,
    origin: DataOrigin,
    load_state: LoadState,
    failure: Option<FetchFailure>,
    query: QueryState,
    page: usize,
    page_size: usize,
    generation: u64,
    closed: bool,
}

impl Gallery {
    /// An empty gallery waiting for its first load.
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            origin: DataOrigin::Live,
            load_state: LoadState::Loading,
            failure: None,
            query: QueryState::default(),
            page: 1,
            page_size: page_size.max(1),
            generation: 0,
            closed: false,
        }
    }

    /// Start a load, superseding any load still in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.load_state = LoadState::Loading;
        LoadTicket(self.generation)
    }

    /// Publish the outcome of the load identified by `ticket`.
    ///
    /// Returns `false` when the result was discarded because a newer load
    /// started or the view was closed. On failure the whole dataset is
    /// replaced with the sample records.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Record>, FetchFailure>,
    ) -> bool {
        if self.closed || ticket.0 != self.generation {
            tracing::debug!("Discarding result of superseded load {}", ticket.0);
            return false;
        }

        match result {
            Ok(records) => {
                self.records = records;
                self.origin = DataOrigin::Live;
                self.failure = None;
            }
            Err(failure) => {
                tracing::warn!("Dataset acquisition failed, showing sample data: {}", failure);
                self.records = fallback_dataset();
                self.origin = DataOrigin::Sample;
                self.failure = Some(failure);
            }
        }

        self.load_state = LoadState::Ready;
        self.page = 1;
        true
    }

    /// Acquire the dataset from `source` and publish it.
    pub async fn reload(&mut self, source: &RemoteDataset) -> bool {
        let ticket = self.begin_load();
        let result = source.acquire().await;
        self.finish_load(ticket, result)
    }

    /// Tear the view down. Later load results are ignored.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn origin(&self) -> DataOrigin {
        self.origin
    }

    /// Why the live dataset could not be shown, if it could not.
    pub fn failure(&self) -> Option<&FetchFailure> {
        self.failure.as_ref()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
        self.page = 1;
    }

    pub fn set_tag(&mut self, tag: Option<String>) {
        self.query.selected_tag = tag;
        self.page = 1;
    }

    /// Drop the search text and tag selection.
    pub fn clear_filters(&mut self) {
        self.query = QueryState::default();
        self.page = 1;
    }

    /// Move to `page`, clamped to the pages that exist.
    pub fn set_page(&mut self, page: usize) {
        let total = pager::total_pages(self.filtered().len(), self.page_size);
        self.page = pager::clamp_page(page, total);
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn filtered(&self) -> Vec<&Record> {
        self.query.apply(&self.records)
    }

    /// Records on the current page.
    pub fn visible(&self) -> Vec<&Record> {
        let filtered = self.filtered();
        pager::paginate(&filtered, self.page, self.page_size).to_vec()
    }

    pub fn pager(&self) -> PagerState {
        PagerState::new(self.page, self.page_size, self.filtered().len())
    }

    pub fn page_links(&self, viewport: Viewport) -> Vec<PageLink> {
        self.pager().links(viewport)
    }

    pub fn available_tags(&self) -> Vec<String> {
        query::available_tags(&self.records)
    }

    pub fn find(&self, id: i64) -> Option<&Record> {
        find_record(&self.records, id)
    }

    pub fn empty_state(&self) -> EmptyState {
        if self.records.is_empty() {
            EmptyState::NoData
        } else if self.filtered().is_empty() {
            EmptyState::NoResults
        } else {
            EmptyState::None
        }
    }

    /// Snapshot of everything the rendering layer needs for one frame.
    pub fn view(&self, viewport: Viewport) -> GalleryView {
        let filtered = self.filtered();
        let pager = PagerState::new(self.page, self.page_size, filtered.len());
        let items = pager::paginate(&filtered, pager.current, self.page_size)
            .iter()
            .map(|record| (*record).clone())
            .collect();

        GalleryView {
            loading: self.load_state == LoadState::Loading,
            origin: self.origin,
            notice: self.failure.as_ref().map(|_| SAMPLE_DATA_NOTICE.to_string()),
            query: self.query.clone(),
            items,
            item_range: pager.item_range(),
            page_links: pager.links(viewport),
            show_pagination: pager.is_visible(),
            has_previous: pager.has_previous(),
            has_next: pager.has_next(),
            pager,
            dataset_count: self.records.len(),
            available_tags: self.available_tags(),
            empty_state: self.empty_state(),
        }
    }
}
