use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::NewsRecord;
use crate::errors::NewsdeskResult;
use crate::storage::traits::KeyValueStore;

/// Slot key. The version suffix changes whenever the entry layout does, so
/// entries written by older builds read as a plain miss.
pub const CACHE_KEY: &str = "newsdesk:records:v1";

/// Maximum age of a cache entry before it is ignored, in seconds
pub const FRESHNESS_WINDOW_SECS: i64 = 60 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    /// Epoch milliseconds
    pub written_at: i64,
    pub records: Vec<NewsRecord>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CacheEntryRef<'a> {
    written_at: i64,
    records: &'a [NewsRecord],
}

impl CacheEntry {
    pub fn written_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.written_at)
    }

    /// Time since the entry was written; `None` when the stamp is out of range
    pub fn age(&self, now: DateTime<Utc>) -> Option<Duration> {
        now.timestamp_millis()
            .checked_sub(self.written_at)
            .and_then(Duration::try_milliseconds)
    }

    /// Fresh while `0 <= age <= window`. A stamp from the future is stale.
    pub fn is_fresh(&self, now: DateTime<Utc>, window: Duration) -> bool {
        matches!(self.age(now), Some(age) if age >= Duration::zero() && age <= window)
    }
}

/// Time-bounded record cache over one key-value slot.
///
/// Every failure (missing slot, store error, corrupt JSON) degrades to a
/// miss on read and is dropped on write; callers never see cache errors.
pub struct CacheStore<K: KeyValueStore> {
    store: K,
    key: String,
    window: Duration,
}

impl<K: KeyValueStore> CacheStore<K> {
    pub fn new(store: K, key: impl Into<String>, window: Duration) -> Self {
        Self {
            store,
            key: key.into(),
            window,
        }
    }

    /// Cache with the fixed key and the default one-hour window
    pub fn with_defaults(store: K) -> Self {
        Self::new(store, CACHE_KEY, Duration::seconds(FRESHNESS_WINDOW_SECS))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Fresh records, or `None` on any kind of miss
    pub fn load(&self) -> Option<Vec<NewsRecord>> {
        self.load_at(Utc::now())
    }

    pub fn load_at(&self, now: DateTime<Utc>) -> Option<Vec<NewsRecord>> {
        let entry = self.entry()?;

        if !entry.is_fresh(now, self.window) {
            debug!(
                key = %self.key,
                age_secs = ?entry.age(now).map(|age| age.num_seconds()),
                "cache entry is stale"
            );
            return None;
        }

        Some(entry.records)
    }

    /// Stored entry regardless of freshness
    pub fn entry(&self) -> Option<CacheEntry> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "cache slot is empty");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read cache slot");
                return None;
            }
        };

        let entry = match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring malformed cache entry");
                return None;
            }
        };

        if !entry.records.iter().all(NewsRecord::is_complete) {
            warn!(key = %self.key, "ignoring cache entry with incomplete records");
            return None;
        }

        Some(entry)
    }

    /// Replace the slot with `records`, stamped now
    pub fn save(&self, records: &[NewsRecord]) {
        self.save_at(records, Utc::now());
    }

    pub fn save_at(&self, records: &[NewsRecord], now: DateTime<Utc>) {
        if let Err(e) = self.write(records, now) {
            warn!(key = %self.key, error = %e, "failed to write cache slot");
        }
    }

    fn write(&self, records: &[NewsRecord], now: DateTime<Utc>) -> NewsdeskResult<()> {
        let entry = CacheEntryRef {
            written_at: now.timestamp_millis(),
            records,
        };
        let json = serde_json::to_string(&entry)?;
        self.store.set(&self.key, &json)
    }
}
