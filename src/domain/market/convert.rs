//! Conversions: market wire types → domain types.

use super::wire;
use super::Quote;
use crate::shared::Symbol;

impl From<wire::ExchangeInfoResponse> for Vec<Symbol> {
    fn from(info: wire::ExchangeInfoResponse) -> Self {
        info.symbols.into_iter().map(|s| s.symbol).collect()
    }
}

impl From<wire::TickerPriceResponse> for Quote {
    fn from(ticker: wire::TickerPriceResponse) -> Self {
        Quote::Price(ticker.price)
    }
}
