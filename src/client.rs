//! High-level client: `DeskClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods. Sub-clients
//! return [`HttpError`](crate::error::HttpError); the session decides which
//! [`DeskError`](crate::error::DeskError) kind a failure becomes.

use crate::auth::Credentials;
use crate::domain::account::client::Account;
use crate::domain::market::client::Markets;
use crate::domain::order::client::Orders;
use crate::error::HttpError;
use crate::http::GatewayHttp;
use crate::network::{DEFAULT_RECV_WINDOW_MS, DEFAULT_TIMEOUT_SECS, TESTNET_FUTURES_URL};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::order::client::Orders as OrdersClient;

/// Typed access to the futures gateway.
///
/// Provides nested sub-client accessors for each domain:
/// `client.markets()`, `client.account()`, `client.orders()`.
pub struct DeskClient {
    pub(crate) http: GatewayHttp,
    pub(crate) recv_window_ms: u64,
}

impl DeskClient {
    pub fn builder() -> DeskClientBuilder {
        DeskClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn recv_window_ms(&self) -> u64 {
        self.recv_window_ms
    }

    /// Offset applied to signed request timestamps, in milliseconds.
    pub async fn time_offset(&self) -> i64 {
        self.http.time_offset().await
    }
}

impl Clone for DeskClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            recv_window_ms: self.recv_window_ms,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DeskClientBuilder {
    base_url: String,
    timeout: Duration,
    recv_window_ms: u64,
    credentials: Option<Credentials>,
}

impl Default for DeskClientBuilder {
    fn default() -> Self {
        Self {
            base_url: TESTNET_FUTURES_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
            credentials: None,
        }
    }
}

impl DeskClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn recv_window_ms(mut self, ms: u64) -> Self {
        self.recv_window_ms = ms;
        self
    }

    /// Credentials used for signed endpoints (balance, orders).
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn build(self) -> Result<DeskClient, HttpError> {
        Ok(DeskClient {
            http: GatewayHttp::new(&self.base_url, self.timeout, self.credentials)?,
            recv_window_ms: self.recv_window_ms,
        })
    }
}
