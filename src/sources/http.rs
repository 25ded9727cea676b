use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::errors::{NewsdeskError, NewsdeskResult};

const USER_AGENT: &str = concat!("newsdesk/", env!("CARGO_PKG_VERSION"));

pub fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// GET `url` and return the body as text, failing on any non-2xx status
pub fn get_text(client: &Client, url: &Url) -> NewsdeskResult<String> {
    let response = client.get(url.as_str()).send()?;
    let status = response.status();

    if !status.is_success() {
        return Err(NewsdeskError::HttpStatus(status.as_u16()));
    }

    let body = response.text()?;
    debug!(%url, bytes = body.len(), "fetched feed body");
    Ok(body)
}
