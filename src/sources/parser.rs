use feed_rs::model::Entry;
use feed_rs::parser;
use tracing::debug;

use crate::domain::record::SNIPPET_LENGTH;
use crate::domain::NewsRecord;
use crate::errors::{NewsdeskError, NewsdeskResult};
use crate::text;

/// Parse a feed document into records, keeping feed order.
///
/// Items without a title, a link or a usable publish date are dropped whole;
/// a malformed document is an error.
pub fn parse_records(body: &str) -> NewsdeskResult<Vec<NewsRecord>> {
    let feed = parser::parse(body.as_bytes()).map_err(|e| NewsdeskError::FeedParse(e.to_string()))?;

    let total = feed.entries.len();
    let records: Vec<NewsRecord> = feed
        .entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| record_from_entry(index, entry))
        .collect();

    if records.len() < total {
        debug!(
            dropped = total - records.len(),
            kept = records.len(),
            "dropped incomplete feed items"
        );
    }

    Ok(records)
}

fn record_from_entry(index: usize, entry: Entry) -> Option<NewsRecord> {
    let title = entry
        .title
        .map(|t| t.content.trim().to_string())
        .filter(|t| !t.is_empty())?;

    let url = entry
        .links
        .into_iter()
        .map(|l| l.href.trim().to_string())
        .find(|href| !href.is_empty())?;

    let published_at = entry.published.or(entry.updated)?;

    let description = entry
        .summary
        .map(|s| s.content)
        .or_else(|| entry.content.and_then(|c| c.body))
        .unwrap_or_default();
    let snippet = text::truncate(&text::strip_markup(&description), SNIPPET_LENGTH);

    let source = publisher_from_title(&title);

    Some(
        NewsRecord::new(
            NewsRecord::synthetic_id(&published_at, index),
            title,
            url,
            published_at,
        )
        .with_source(source)
        .with_snippet(snippet),
    )
}

/// Google News appends the publisher to every headline: "Headline - Publisher"
fn publisher_from_title(title: &str) -> Option<String> {
    let (headline, publisher) = title.rsplit_once(" - ")?;
    let publisher = publisher.trim();

    if headline.trim().is_empty() || publisher.is_empty() {
        return None;
    }
    Some(publisher.to_string())
}
