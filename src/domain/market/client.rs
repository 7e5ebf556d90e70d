//! Markets sub-client: server clock, symbols, ticker.

use crate::auth::now_millis;
use crate::client::DeskClient;
use crate::domain::market::Quote;
use crate::error::HttpError;
use crate::shared::Symbol;

/// Sub-client for market-data operations.
pub struct Markets<'a> {
    pub(crate) client: &'a DeskClient,
}

impl<'a> Markets<'a> {
    /// Gateway clock in Unix milliseconds.
    pub async fn server_time(&self) -> Result<i64, HttpError> {
        Ok(self.client.http.get_server_time().await?.server_time)
    }

    /// Measure server_time − local_time and store it on the client, so every
    /// later signed request is stamped on the gateway's clock.
    pub async fn sync_time(&self) -> Result<i64, HttpError> {
        let server_time = self.server_time().await?;
        let offset = server_time - now_millis();
        self.client.http.set_time_offset(offset).await;
        tracing::debug!(offset_ms = offset, "clock offset updated");
        Ok(offset)
    }

    /// Every instrument listed in the exchange metadata, in gateway order.
    pub async fn symbols(&self) -> Result<Vec<Symbol>, HttpError> {
        Ok(self.client.http.get_exchange_info().await?.into())
    }

    /// Last price for one symbol.
    pub async fn quote(&self, symbol: &Symbol) -> Result<Quote, HttpError> {
        Ok(self.client.http.get_ticker_price(symbol).await?.into())
    }
}
