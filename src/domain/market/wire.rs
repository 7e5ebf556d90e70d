//! Wire types for market-data endpoints.

use crate::shared::{serde_util, Symbol};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// `GET /fapi/v1/time`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServerTimeResponse {
    pub server_time: i64,
}

/// `GET /fapi/v1/exchangeInfo` (only the fields the desk reads).
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfoResponse {
    #[serde(default)]
    pub timezone: Option<String>,
    pub symbols: Vec<SymbolInfo>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: Symbol,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub contract_type: Option<String>,
    #[serde(default)]
    pub base_asset: Option<String>,
    #[serde(default)]
    pub quote_asset: Option<String>,
}

/// `GET /fapi/v1/ticker/price?symbol=`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TickerPriceResponse {
    pub symbol: Symbol,
    pub price: Decimal,
    #[serde(default, with = "serde_util::timestamp_ms_opt")]
    pub time: Option<DateTime<Utc>>,
}
