//! # futures-desk
//!
//! An order-entry desk for the Binance USDⓈ-M Futures testnet.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Shared newtypes, domain models, the order form validator
//! 2. **Auth**: Credentials and HMAC request signing
//! 3. **HTTP API**: `GatewayHttp`, one method per exchange endpoint
//! 4. **High-Level Client**: `DeskClient` with nested sub-clients
//! 5. **Session**: Connection initializer, quote fetch, order submitter and
//!    the in-memory order history
//!
//! The terminal front end (`ui` + the `futures-desk` binary) sits on top and
//! only ever talks to [`session::Session`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures_desk::prelude::*;
//!
//! let mut session = Session::new(DeskConfig::default());
//! session.connect(Credentials::new("key", "secret")).await?;
//!
//! let form = OrderForm::new("BTCUSDT", "MARKET", Side::Buy, Decimal::new(1, 2));
//! let result = session.place_order(&form).await?;
//! println!("order {} is {}", result.order_id, result.status);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Runtime configuration.
pub mod config;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Credentials and request signing.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Low-level gateway HTTP client.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `DeskClient`: typed access to the gateway.
pub mod client;

// ── Layer 5: Session ─────────────────────────────────────────────────────────

/// Session context: connection, quotes, order submission, history.
pub mod session;

/// Terminal renderers for the interactive front end.
#[cfg(feature = "cli")]
pub mod ui;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::shared::{Side, Symbol, TimeInForce};

    pub use crate::domain::account::AccountSnapshot;
    pub use crate::domain::market::Quote;
    pub use crate::domain::order::{
        build_order, OrderForm, OrderHistory, OrderHistoryEntry, OrderKind, OrderRequest,
        OrderResult, ValidationErrors,
    };

    pub use crate::auth::Credentials;
    pub use crate::client::{AccountClient, DeskClient, DeskClientBuilder, MarketsClient, OrdersClient};
    pub use crate::config::DeskConfig;
    pub use crate::error::{DeskError, HttpError};
    pub use crate::network::{DEFAULT_RECV_WINDOW_MS, TESTNET_FUTURES_URL};
    pub use crate::session::Session;
}
