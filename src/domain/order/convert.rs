//! Conversions: order domain types ↔ wire types.

use super::wire;
use super::{OrderRequest, OrderResult};
use crate::shared::fmt;

impl From<&OrderRequest> for wire::NewOrderRequest {
    fn from(request: &OrderRequest) -> Self {
        wire::NewOrderRequest {
            symbol: request.symbol().clone(),
            side: request.side(),
            order_type: request.kind(),
            quantity: fmt::wire(&request.quantity()),
            price: request.price().map(|p| fmt::wire(&p)),
            stop_price: request.stop_price().map(|p| fmt::wire(&p)),
            time_in_force: request.time_in_force(),
        }
    }
}

impl From<wire::NewOrderResponse> for OrderResult {
    fn from(resp: wire::NewOrderResponse) -> Self {
        OrderResult {
            order_id: resp.order_id,
            symbol: resp.symbol,
            side: resp.side,
            order_type: resp.order_type,
            status: resp.status,
            price: resp.price,
            orig_qty: resp.orig_qty,
            executed_qty: resp.executed_qty,
        }
    }
}
