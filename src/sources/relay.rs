use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::errors::NewsdeskResult;
use crate::sources::http;
use crate::sources::traits::FeedSource;

/// Public pass-through relay returning the raw body of `?url=`
pub const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/raw";

/// Routes the request through a relay that mirrors the target's raw body.
/// Used where the feed host can't be reached directly.
pub struct RelaySource {
    client: Client,
    relay_url: Url,
}

impl RelaySource {
    pub fn new(relay_url: Url, timeout: Duration) -> Self {
        Self {
            client: http::build_client(timeout),
            relay_url,
        }
    }

    /// Relay URL with the target embedded as its `url` query parameter
    pub fn relayed_url(&self, feed_url: &Url) -> Url {
        let mut url = self.relay_url.clone();
        url.query_pairs_mut().append_pair("url", feed_url.as_str());
        url
    }
}

impl FeedSource for RelaySource {
    fn fetch(&self, feed_url: &Url) -> NewsdeskResult<String> {
        http::get_text(&self.client, &self.relayed_url(feed_url))
    }
}
