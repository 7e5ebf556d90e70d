//! Runtime configuration.
//!
//! Defaults target the futures testnet. Every field can be overridden from
//! the environment (a `.env` file is honoured) and, in the binary, from the
//! command line.

use crate::auth::Credentials;
use crate::error::DeskError;
use crate::network::{DEFAULT_RECV_WINDOW_MS, DEFAULT_TIMEOUT_SECS, TESTNET_FUTURES_URL};

use std::path::PathBuf;
use std::time::Duration;

pub const ENV_BASE_URL: &str = "FUTURES_DESK_BASE_URL";
pub const ENV_RECV_WINDOW_MS: &str = "FUTURES_DESK_RECV_WINDOW_MS";
pub const ENV_TIMEOUT_SECS: &str = "FUTURES_DESK_TIMEOUT_SECS";
pub const ENV_LOG_FILE: &str = "FUTURES_DESK_LOG_FILE";
pub const ENV_API_KEY: &str = "BINANCE_API_KEY";
pub const ENV_API_SECRET: &str = "BINANCE_API_SECRET";

/// Log file written next to the working directory by default.
pub const DEFAULT_LOG_FILE: &str = "trading_bot.log";

/// Asset whose balance is shown beside the order form.
pub const DEFAULT_QUOTE_ASSET: &str = "USDT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    pub base_url: String,
    pub recv_window_ms: u64,
    pub timeout: Duration,
    pub quote_asset: String,
    pub log_file: PathBuf,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            base_url: TESTNET_FUTURES_URL.to_string(),
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            quote_asset: DEFAULT_QUOTE_ASSET.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl DeskConfig {
    /// Defaults overlaid with `FUTURES_DESK_*` variables, after loading `.env`.
    pub fn from_env() -> Result<Self, DeskError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DeskError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_BASE_URL) {
            config.base_url = url.trim().to_string();
        }
        if let Some(raw) = get(ENV_RECV_WINDOW_MS) {
            config.recv_window_ms = parse_positive(ENV_RECV_WINDOW_MS, &raw)?;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            config.timeout = Duration::from_secs(parse_positive(ENV_TIMEOUT_SECS, &raw)?);
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            config.log_file = PathBuf::from(path.trim());
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_recv_window_ms(mut self, ms: u64) -> Self {
        self.recv_window_ms = ms;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    pub fn validate(&self) -> Result<(), DeskError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(DeskError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.recv_window_ms == 0 || self.recv_window_ms > 60_000 {
            return Err(DeskError::Config(format!(
                "recvWindow must be within 1..=60000 ms, got {}",
                self.recv_window_ms
            )));
        }
        Ok(())
    }
}

/// Credentials from `BINANCE_API_KEY` / `BINANCE_API_SECRET`, when both are set.
pub fn credentials_from_env() -> Option<Credentials> {
    dotenvy::dotenv().ok();
    credentials_from_lookup(|key| std::env::var(key).ok())
}

pub fn credentials_from_lookup<F>(lookup: F) -> Option<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let creds = Credentials::new(lookup(ENV_API_KEY)?, lookup(ENV_API_SECRET)?);
    creds.is_complete().then_some(creds)
}

fn parse_positive(key: &str, raw: &str) -> Result<u64, DeskError> {
    match raw.trim().parse::<u64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(DeskError::Config(format!(
            "{} must be a positive integer, got {:?}",
            key, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DeskConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DeskConfig::default());
        assert_eq!(config.recv_window_ms, 5_000);
        assert_eq!(config.quote_asset, "USDT");
        assert_eq!(config.log_file, PathBuf::from("trading_bot.log"));
    }

    #[test]
    fn test_overrides() {
        let config = DeskConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "http://localhost:8080"),
            (ENV_RECV_WINDOW_MS, "2500"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_LOG_FILE, "/tmp/desk.log"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.recv_window_ms, 2_500);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.log_file, PathBuf::from("/tmp/desk.log"));
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = DeskConfig::from_lookup(lookup(&[(ENV_BASE_URL, "   ")])).unwrap();
        assert_eq!(config.base_url, TESTNET_FUTURES_URL);
    }

    #[test]
    fn test_invalid_values() {
        for pairs in [
            vec![(ENV_RECV_WINDOW_MS, "abc")],
            vec![(ENV_RECV_WINDOW_MS, "0")],
            vec![(ENV_RECV_WINDOW_MS, "90000")],
            vec![(ENV_TIMEOUT_SECS, "-3")],
            vec![(ENV_BASE_URL, "ftp://example.com")],
        ] {
            let err = DeskConfig::from_lookup(lookup(&pairs)).unwrap_err();
            assert!(matches!(err, DeskError::Config(_)), "{pairs:?}");
        }
    }

    #[test]
    fn test_credentials_from_lookup() {
        let creds = credentials_from_lookup(lookup(&[(ENV_API_KEY, "k"), (ENV_API_SECRET, "s")]));
        assert_eq!(creds.unwrap().api_key(), "k");
        assert!(credentials_from_lookup(lookup(&[(ENV_API_KEY, "k")])).is_none());
        assert!(credentials_from_lookup(lookup(&[(ENV_API_KEY, "k"), (ENV_API_SECRET, "")])).is_none());
    }
}
