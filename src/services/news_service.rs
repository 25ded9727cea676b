use tracing::{info, warn};

use crate::domain::{DateRange, NewsRecord, RelevanceFilter};
use crate::errors::NewsdeskResult;
use crate::services::fetch_service::FetchService;
use crate::sources::FeedSource;
use crate::storage::{CacheStore, KeyValueStore};

/// Upper bound on records kept after relevance filtering
pub const MAX_RECORDS: usize = 100;

/// Only message ever shown for a failed load
pub const LOAD_ERROR_MESSAGE: &str = "Could not load news. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Error,
}

/// Keep records published inside `range`, newest first.
///
/// Ties on `published_at` are broken by a stable sort: records sharing an
/// instant keep the order they had in `records` and are not reversed.
pub fn filter_and_sort(records: &[NewsRecord], range: &DateRange) -> Vec<NewsRecord> {
    let mut view: Vec<NewsRecord> = records
        .iter()
        .filter(|r| range.contains(&r.published_at))
        .cloned()
        .collect();

    view.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    view
}

/// Owns the record list and load state; sequences cache, fetch and filter.
///
/// `load` takes `&mut self`, so loads on one service never overlap.
pub struct NewsService<S: FeedSource, K: KeyValueStore> {
    fetcher: FetchService<S>,
    cache: CacheStore<K>,
    filter: RelevanceFilter,
    records: Vec<NewsRecord>,
    state: LoadState,
    error: Option<String>,
    date_range: DateRange,
    activated: bool,
}

impl<S: FeedSource, K: KeyValueStore> NewsService<S, K> {
    pub fn new(fetcher: FetchService<S>, cache: CacheStore<K>) -> Self {
        Self {
            fetcher,
            cache,
            filter: RelevanceFilter::default(),
            records: Vec::new(),
            state: LoadState::Idle,
            error: None,
            date_range: DateRange::default(),
            activated: false,
        }
    }

    pub fn with_filter(mut self, filter: RelevanceFilter) -> Self {
        self.filter = filter;
        self
    }

    /// First activation runs one non-forced load; later calls do nothing
    pub fn activate(&mut self) -> LoadState {
        if !self.activated {
            self.activated = true;
            self.load(false);
        }
        self.state
    }

    /// Load records from a fresh cache entry, or from the feed when `force`
    /// is set or the cache misses. A failed fetch keeps the current records
    /// and moves to `Error` with [`LOAD_ERROR_MESSAGE`].
    pub fn load(&mut self, force: bool) -> LoadState {
        self.state = LoadState::Loading;

        if !force {
            if let Some(records) = self.cache.load() {
                info!(count = records.len(), "loaded records from cache");
                self.adopt(records);
                return self.state;
            }
        }

        match self.fetch_relevant() {
            Ok(records) => {
                self.cache.save(&records);
                info!(count = records.len(), "loaded records from feed");
                self.adopt(records);
            }
            Err(e) => {
                warn!(error = %e, feed = %self.fetcher.feed_url(), "failed to load news");
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
                self.state = LoadState::Error;
            }
        }

        self.state
    }

    fn fetch_relevant(&self) -> NewsdeskResult<Vec<NewsRecord>> {
        let records = self.fetcher.fetch_records()?;

        Ok(records
            .into_iter()
            .filter(|r| self.filter.is_relevant(r))
            .take(MAX_RECORDS)
            .collect())
    }

    fn adopt(&mut self, records: Vec<NewsRecord>) {
        self.records = records;
        self.error = None;
        self.state = LoadState::Ready;
    }

    /// Records inside the current date range, newest first
    pub fn filtered_sorted(&self) -> Vec<NewsRecord> {
        filter_and_sort(&self.records, &self.date_range)
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
    }

    pub fn date_range(&self) -> &DateRange {
        &self.date_range
    }

    pub fn records(&self) -> &[NewsRecord] {
        &self.records
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn cache(&self) -> &CacheStore<K> {
        &self.cache
    }
}
