//! Market domain: server clock, tradable symbols, live quotes.

pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;

pub use client::Markets;

// ─── Quote ───────────────────────────────────────────────────────────────────

/// Last traded price for a symbol, or the sentinel shown when the ticker
/// could not be fetched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quote {
    Price(Decimal),
    Unavailable,
}

impl Quote {
    pub fn price(&self) -> Option<Decimal> {
        match self {
            Quote::Price(p) => Some(*p),
            Quote::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Quote::Price(_))
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quote::Price(p) => write!(f, "$ {}", crate::shared::fmt::fixed(p, 8)),
            Quote::Unavailable => write!(f, "-"),
        }
    }
}
