//! Order domain: form validation, typed requests, results, session history.

pub mod client;
mod convert;
pub mod form;
pub mod state;
pub mod wire;

use crate::shared::{Side, Symbol, TimeInForce};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use client::Orders;
pub use form::{build_order, default_quantity, min_quantity, OrderForm, ValidationErrors};
pub use state::{OrderHistory, OrderHistoryEntry};

// ─── OrderKind ───────────────────────────────────────────────────────────────

/// Order types the desk can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderKind {
    Market,
    Limit,
    Stop,
}

impl OrderKind {
    pub const ALL: [OrderKind; 3] = [OrderKind::Market, OrderKind::Limit, OrderKind::Stop];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::Market => "MARKET",
            OrderKind::Limit => "LIMIT",
            OrderKind::Stop => "STOP",
        }
    }

    /// LIMIT and STOP rest on the book at a limit price.
    pub fn needs_price(&self) -> bool {
        matches!(self, OrderKind::Limit | OrderKind::Stop)
    }

    pub fn needs_stop_price(&self) -> bool {
        matches!(self, OrderKind::Stop)
    }
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an order type the desk does not offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedOrderKind(pub String);

impl std::fmt::Display for UnsupportedOrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported order type: {:?}", self.0)
    }
}

impl std::error::Error for UnsupportedOrderKind {}

impl FromStr for OrderKind {
    type Err = UnsupportedOrderKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MARKET" => Ok(OrderKind::Market),
            "LIMIT" => Ok(OrderKind::Limit),
            "STOP" => Ok(OrderKind::Stop),
            _ => Err(UnsupportedOrderKind(s.to_string())),
        }
    }
}

// ─── OrderRequest ────────────────────────────────────────────────────────────

/// A validated order, discriminated by type.
///
/// Only [`build_order`] produces these, so every price carried here is
/// strictly positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderRequest {
    Market {
        symbol: Symbol,
        side: Side,
        quantity: Decimal,
    },
    Limit {
        symbol: Symbol,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    },
    Stop {
        symbol: Symbol,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
        time_in_force: TimeInForce,
    },
}

impl OrderRequest {
    pub fn kind(&self) -> OrderKind {
        match self {
            OrderRequest::Market { .. } => OrderKind::Market,
            OrderRequest::Limit { .. } => OrderKind::Limit,
            OrderRequest::Stop { .. } => OrderKind::Stop,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        match self {
            OrderRequest::Market { symbol, .. }
            | OrderRequest::Limit { symbol, .. }
            | OrderRequest::Stop { symbol, .. } => symbol,
        }
    }

    pub fn side(&self) -> Side {
        match self {
            OrderRequest::Market { side, .. }
            | OrderRequest::Limit { side, .. }
            | OrderRequest::Stop { side, .. } => *side,
        }
    }

    pub fn quantity(&self) -> Decimal {
        match self {
            OrderRequest::Market { quantity, .. }
            | OrderRequest::Limit { quantity, .. }
            | OrderRequest::Stop { quantity, .. } => *quantity,
        }
    }

    pub fn price(&self) -> Option<Decimal> {
        match self {
            OrderRequest::Market { .. } => None,
            OrderRequest::Limit { price, .. } | OrderRequest::Stop { price, .. } => Some(*price),
        }
    }

    pub fn stop_price(&self) -> Option<Decimal> {
        match self {
            OrderRequest::Stop { stop_price, .. } => Some(*stop_price),
            _ => None,
        }
    }

    pub fn time_in_force(&self) -> Option<TimeInForce> {
        match self {
            OrderRequest::Market { .. } => None,
            OrderRequest::Limit { time_in_force, .. }
            | OrderRequest::Stop { time_in_force, .. } => Some(*time_in_force),
        }
    }
}

// ─── OrderResult ─────────────────────────────────────────────────────────────

/// The gateway's acknowledgement of a submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub order_id: i64,
    pub symbol: Symbol,
    pub side: Side,
    pub order_type: String,
    pub status: String,
    pub price: Decimal,
    pub orig_qty: Decimal,
    pub executed_qty: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_kind_from_str() {
        assert_eq!("market".parse::<OrderKind>().unwrap(), OrderKind::Market);
        assert_eq!(" LIMIT".parse::<OrderKind>().unwrap(), OrderKind::Limit);
        assert_eq!("Stop".parse::<OrderKind>().unwrap(), OrderKind::Stop);
        assert!("TRAILING_STOP_MARKET".parse::<OrderKind>().is_err());
    }

    #[test]
    fn test_order_kind_price_requirements() {
        assert!(!OrderKind::Market.needs_price());
        assert!(OrderKind::Limit.needs_price());
        assert!(!OrderKind::Limit.needs_stop_price());
        assert!(OrderKind::Stop.needs_stop_price());
    }

    #[test]
    fn test_request_accessors() {
        let req = OrderRequest::Stop {
            symbol: Symbol::from("BTCUSDT"),
            side: Side::Sell,
            quantity: Decimal::ONE,
            price: Decimal::new(100, 0),
            stop_price: Decimal::new(105, 0),
            time_in_force: TimeInForce::GoodTillCancelled,
        };
        assert_eq!(req.kind(), OrderKind::Stop);
        assert_eq!(req.symbol().as_str(), "BTCUSDT");
        assert_eq!(req.side(), Side::Sell);
        assert_eq!(req.quantity(), Decimal::ONE);
        assert_eq!(req.price(), Some(Decimal::new(100, 0)));
        assert_eq!(req.stop_price(), Some(Decimal::new(105, 0)));
        assert_eq!(req.time_in_force(), Some(TimeInForce::GoodTillCancelled));
    }
}
