//! Wire types for `POST /fapi/v1/order`.

use crate::shared::{Side, Symbol, TimeInForce};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OrderKind;

/// Form parameters of a new order, in the order they are signed.
///
/// `recvWindow`, `timestamp` and `signature` are appended by the HTTP layer.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    pub symbol: Symbol,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderKind,
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
}

/// Acknowledgement returned for a new order (fields the desk reads).
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderResponse {
    pub order_id: i64,
    pub symbol: Symbol,
    pub status: String,
    pub price: Decimal,
    pub orig_qty: Decimal,
    pub executed_qty: Decimal,
    #[serde(rename = "type")]
    pub order_type: String,
    pub side: Side,
}
