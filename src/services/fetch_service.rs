use tracing::info;
use url::Url;

use crate::domain::NewsRecord;
use crate::errors::NewsdeskResult;
use crate::sources::{parse_records, FeedSource};

/// Google News RSS search endpoint
pub const DEFAULT_FEED_URL: &str = "https://news.google.com/rss/search";

/// Fixed search: sector phrases OR'd together, each tied to the region
pub const SEARCH_QUERY: &str = concat!(
    r#""Scotland offshore wind" OR "Scottish offshore wind" OR "#,
    r#""Scotland wind farm" OR "Scottish renewables" OR "Scotland hydrogen""#,
);

const LANGUAGE: &str = "en-GB";
const REGION: &str = "GB";
const EDITION: &str = "GB:en";

/// Builds the localized search URL and turns its body into records
pub struct FetchService<S: FeedSource> {
    source: S,
    feed_url: Url,
}

impl<S: FeedSource> FetchService<S> {
    pub fn new(source: S, feed_base: Url) -> Self {
        Self {
            source,
            feed_url: Self::search_url(feed_base),
        }
    }

    fn search_url(mut base: Url) -> Url {
        base.query_pairs_mut()
            .clear()
            .append_pair("q", SEARCH_QUERY)
            .append_pair("hl", LANGUAGE)
            .append_pair("gl", REGION)
            .append_pair("ceid", EDITION);
        base
    }

    pub fn feed_url(&self) -> &Url {
        &self.feed_url
    }

    /// Fetch and parse the feed. Any transport, status or parse failure
    /// fails the whole call; there are no partial results.
    pub fn fetch_records(&self) -> NewsdeskResult<Vec<NewsRecord>> {
        let body = self.source.fetch(&self.feed_url)?;
        let records = parse_records(&body)?;

        info!(count = records.len(), "parsed feed records");
        Ok(records)
    }
}
