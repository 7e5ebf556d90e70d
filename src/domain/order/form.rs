//! Order form → [`OrderRequest`] validation.
//!
//! | type   | requires                  | rejected when                  |
//! |--------|---------------------------|--------------------------------|
//! | MARKET | quantity                  | never (quantity is constrained at input) |
//! | LIMIT  | quantity, price           | price missing or ≤ 0           |
//! | STOP   | quantity, price, stop     | price and/or stop missing or ≤ 0 |
//! | other  | n/a                       | always                         |
//!
//! Every applicable message is collected; nothing is built unless the list is
//! empty.

use super::{OrderKind, OrderRequest};
use crate::shared::{Side, Symbol, TimeInForce};
use rust_decimal::Decimal;

pub const LIMIT_PRICE_NOT_POSITIVE: &str = "Limit price must be greater than zero.";
pub const STOP_PRICE_NOT_POSITIVE: &str = "Stop price must be greater than zero.";
pub const UNSUPPORTED_ORDER_TYPE: &str = "Unsupported order type.";

/// Smallest quantity the form accepts.
pub fn min_quantity() -> Decimal {
    Decimal::new(1, 4)
}

/// Default quantity pre-filled in the form.
pub fn default_quantity() -> Decimal {
    Decimal::new(1, 2)
}

// ─── OrderForm ───────────────────────────────────────────────────────────────

/// Raw operator input, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub symbol: Symbol,
    /// Free text; matched case-insensitively against MARKET / LIMIT / STOP.
    pub order_type: String,
    pub side: Side,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
}

impl OrderForm {
    pub fn new(
        symbol: impl Into<Symbol>,
        order_type: impl Into<String>,
        side: Side,
        quantity: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: order_type.into(),
            side,
            quantity,
            price: None,
            stop_price: None,
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_stop_price(mut self, stop_price: Decimal) -> Self {
        self.stop_price = Some(stop_price);
        self
    }
}

// ─── ValidationErrors ────────────────────────────────────────────────────────

/// One or more form problems, in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl std::error::Error for ValidationErrors {}

// ─── build_order ─────────────────────────────────────────────────────────────

/// Validate a form and build the typed request. Pure.
pub fn build_order(form: &OrderForm) -> Result<OrderRequest, ValidationErrors> {
    let kind = match form.order_type.parse::<OrderKind>() {
        Ok(kind) => kind,
        Err(_) => return Err(ValidationErrors(vec![UNSUPPORTED_ORDER_TYPE.to_string()])),
    };

    let symbol = form.symbol.clone();
    let side = form.side;
    let quantity = form.quantity;

    match kind {
        OrderKind::Market => Ok(OrderRequest::Market {
            symbol,
            side,
            quantity,
        }),
        OrderKind::Limit => match positive(form.price) {
            Some(price) => Ok(OrderRequest::Limit {
                symbol,
                side,
                quantity,
                price,
                time_in_force: TimeInForce::GoodTillCancelled,
            }),
            None => Err(ValidationErrors(vec![LIMIT_PRICE_NOT_POSITIVE.to_string()])),
        },
        OrderKind::Stop => {
            let price = positive(form.price);
            let stop_price = positive(form.stop_price);

            let mut errors = Vec::new();
            if price.is_none() {
                errors.push(LIMIT_PRICE_NOT_POSITIVE.to_string());
            }
            if stop_price.is_none() {
                errors.push(STOP_PRICE_NOT_POSITIVE.to_string());
            }

            match (price, stop_price) {
                (Some(price), Some(stop_price)) => Ok(OrderRequest::Stop {
                    symbol,
                    side,
                    quantity,
                    price,
                    stop_price,
                    time_in_force: TimeInForce::GoodTillCancelled,
                }),
                _ => Err(ValidationErrors(errors)),
            }
        }
    }
}

fn positive(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| *v > Decimal::ZERO)
}
