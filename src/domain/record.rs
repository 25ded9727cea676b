use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publisher label used when a feed item names none
pub const DEFAULT_SOURCE: &str = "Google News";

/// Display length of a record snippet, in characters
pub const SNIPPET_LENGTH: usize = 180;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsRecord {
    pub id: String,
    pub title: String,
    pub url: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub snippet: String,
}

impl NewsRecord {
    pub fn new(id: String, title: String, url: String, published_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            url,
            source: DEFAULT_SOURCE.to_string(),
            published_at,
            snippet: String::new(),
        }
    }

    /// Synthetic id: publish instant in epoch millis plus the item's position
    /// in the parsed feed. Only unique within one parse pass.
    pub fn synthetic_id(published_at: &DateTime<Utc>, index: usize) -> String {
        format!("{}_{}", published_at.timestamp_millis(), index)
    }

    pub fn with_source(mut self, source: Option<String>) -> Self {
        if let Some(source) = source.filter(|s| !s.trim().is_empty()) {
            self.source = source;
        }
        self
    }

    pub fn with_snippet(mut self, snippet: String) -> Self {
        self.snippet = snippet;
        self
    }

    /// A record is usable only with a non-blank title and url
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }
}
