use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::errors::NewsdeskResult;
use crate::sources::http;
use crate::sources::traits::FeedSource;

/// Fetches the feed URL itself, without a relay
pub struct DirectSource {
    client: Client,
}

impl DirectSource {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: http::build_client(timeout),
        }
    }
}

impl FeedSource for DirectSource {
    fn fetch(&self, feed_url: &Url) -> NewsdeskResult<String> {
        http::get_text(&self.client, feed_url)
    }
}
