//! Network constants for the futures gateway.

/// USDⓈ-M Futures testnet REST base URL.
pub const TESTNET_FUTURES_URL: &str = "https://testnet.binancefuture.com";

/// Request validity window attached to order submission, in milliseconds.
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5_000;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the API key on authenticated endpoints.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";
