use std::time::Duration;

use url::Url;

use crate::errors::{NewsdeskError, NewsdeskResult};
use crate::services::fetch_service::DEFAULT_FEED_URL;
use crate::sources::DEFAULT_RELAY_URL;
use crate::storage::FRESHNESS_WINDOW_SECS;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// `NEWSDESK_RELAY_URL` value that disables the relay
const NO_RELAY: &str = "none";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    /// `None` fetches the feed directly
    pub relay_url: Option<Url>,
    pub feed_url: Url,
    pub cache_ttl: chrono::Duration,
    pub http_timeout: Duration,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> NewsdeskResult<Self> {
        let exe_dir = Self::exe_dir();

        // Try to load .env from executable's directory first
        if let Some(ref dir) = exe_dir {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let default_db_path = exe_dir
            .map(|d| d.join("newsdesk.db").to_string_lossy().into_owned())
            .unwrap_or_else(|| "./newsdesk.db".to_string());

        Self::from_lookup(|key| std::env::var(key).ok(), default_db_path)
    }

    /// Build from any variable lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F, default_db_path: String) -> NewsdeskResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("NEWSDESK_DB_PATH").unwrap_or(default_db_path);

        let relay_url = match lookup("NEWSDESK_RELAY_URL") {
            Some(value) if value.trim().eq_ignore_ascii_case(NO_RELAY) => None,
            Some(value) => Some(parse_url("NEWSDESK_RELAY_URL", &value)?),
            None => Some(parse_url("NEWSDESK_RELAY_URL", DEFAULT_RELAY_URL)?),
        };

        let feed_url = parse_url(
            "NEWSDESK_FEED_URL",
            &lookup("NEWSDESK_FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
        )?;

        let cache_ttl = match lookup("NEWSDESK_CACHE_TTL_SECS") {
            Some(value) => parse_ttl("NEWSDESK_CACHE_TTL_SECS", &value)?,
            None => chrono::Duration::seconds(FRESHNESS_WINDOW_SECS),
        };

        let http_timeout_secs = match lookup("NEWSDESK_HTTP_TIMEOUT_SECS") {
            Some(value) => parse_number::<u64>("NEWSDESK_HTTP_TIMEOUT_SECS", &value)?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            db_path,
            relay_url,
            feed_url,
            cache_ttl,
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }
}

fn parse_url(name: &str, value: &str) -> NewsdeskResult<Url> {
    Url::parse(value.trim()).map_err(|e| NewsdeskError::Config(format!("{}: {}", name, e)))
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> NewsdeskResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| NewsdeskError::Config(format!("{} must be a whole number, got '{}'", name, value)))
}

fn parse_ttl(name: &str, value: &str) -> NewsdeskResult<chrono::Duration> {
    let secs = parse_number::<i64>(name, value)?;
    if secs < 0 {
        return Err(NewsdeskError::Config(format!(
            "{} must not be negative, got '{}'",
            name, value
        )));
    }
    chrono::Duration::try_seconds(secs)
        .ok_or_else(|| NewsdeskError::Config(format!("{} is out of range, got '{}'", name, value)))
}
