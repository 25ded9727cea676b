use url::Url;

use crate::errors::NewsdeskResult;

/// Capability that turns a feed URL into the raw feed document.
#[cfg_attr(test, mockall::automock)]
pub trait FeedSource: Send + Sync {
    /// Fetch the raw body behind `feed_url`. Non-success statuses are errors.
    fn fetch(&self, feed_url: &Url) -> NewsdeskResult<String>;
}

impl FeedSource for Box<dyn FeedSource> {
    fn fetch(&self, feed_url: &Url) -> NewsdeskResult<String> {
        (**self).fetch(feed_url)
    }
}
