//! Session context: everything one interactive session owns.
//!
//! The front end creates one [`Session`] and calls into it from its event
//! handlers. Nothing here is global and nothing outlives the process.

use crate::auth::Credentials;
use crate::client::DeskClient;
use crate::config::DeskConfig;
use crate::domain::account::AccountSnapshot;
use crate::domain::market::Quote;
use crate::domain::order::{build_order, OrderForm, OrderHistory, OrderHistoryEntry, OrderRequest, OrderResult};
use crate::error::{DeskError, HttpError};
use crate::shared::{fmt, Symbol};

use chrono::Local;

pub struct Session {
    config: DeskConfig,
    client: Option<DeskClient>,
    /// Credentials the live client was built with.
    credentials: Option<Credentials>,
    symbols: Vec<Symbol>,
    account: AccountSnapshot,
    history: OrderHistory,
}

impl Session {
    pub fn new(config: DeskConfig) -> Self {
        let account = AccountSnapshot::unavailable(config.quote_asset.clone());
        Self {
            config,
            client: None,
            credentials: None,
            symbols: Vec::new(),
            account,
            history: OrderHistory::new(),
        }
    }

    // ── Read-only views ──────────────────────────────────────────────────

    /// Connected means a live client *and* a non-empty symbol list.
    pub fn is_connected(&self) -> bool {
        self.client.is_some() && !self.symbols.is_empty()
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn client(&self) -> Option<&DeskClient> {
        self.client.as_ref()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn account(&self) -> &AccountSnapshot {
        &self.account
    }

    pub fn history(&self) -> &OrderHistory {
        &self.history
    }

    // ── Connection ───────────────────────────────────────────────────────

    /// Connect only if `credentials` differ from the live connection's.
    ///
    /// Returns `true` when a new connection was made.
    pub async fn ensure_connected(&mut self, credentials: &Credentials) -> Result<bool, DeskError> {
        if self.is_connected() && self.credentials.as_ref() == Some(credentials) {
            return Ok(false);
        }
        self.connect(credentials.clone()).await?;
        Ok(true)
    }

    /// Build a client, sync its clock, load symbols and the balance snapshot.
    ///
    /// Client construction, time sync and symbol load succeed or fail
    /// together: on failure the session is left disconnected with no symbols.
    /// A failed balance fetch only degrades the snapshot to `"N/A"`.
    /// Order history is kept across reconnects.
    pub async fn connect(&mut self, credentials: Credentials) -> Result<(), DeskError> {
        self.disconnect();

        if !credentials.is_complete() {
            return Err(connection_failed("API key and secret are required"));
        }

        let client = DeskClient::builder()
            .base_url(&self.config.base_url)
            .timeout(self.config.timeout)
            .recv_window_ms(self.config.recv_window_ms)
            .credentials(credentials.clone())
            .build()
            .map_err(connection_failed)?;

        let offset = client.markets().sync_time().await.map_err(connection_failed)?;
        tracing::info!(offset_ms = offset, "Time synchronized with exchange server.");

        let symbols = client.markets().symbols().await.map_err(connection_failed)?;
        if symbols.is_empty() {
            return Err(connection_failed("exchange metadata listed no symbols"));
        }
        tracing::info!(count = symbols.len(), "Fetched {} symbols.", symbols.len());

        let asset = self.config.quote_asset.clone();
        let account = match client.account().snapshot(&asset).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                let err = DeskError::BalanceUnavailable(e.to_string());
                tracing::error!(asset = %asset, "Error fetching {} balance: {}", asset, err);
                AccountSnapshot::unavailable(asset)
            }
        };

        self.client = Some(client);
        self.credentials = Some(credentials);
        self.symbols = symbols;
        self.account = account;
        Ok(())
    }

    /// Drop the client and everything loaded through it. History stays.
    pub fn disconnect(&mut self) {
        self.client = None;
        self.credentials = None;
        self.symbols.clear();
        self.account = AccountSnapshot::unavailable(self.config.quote_asset.clone());
    }

    // ── Quotes ───────────────────────────────────────────────────────────

    /// Last price, or `QuoteUnavailable`.
    pub async fn try_fetch_quote(&self, symbol: &Symbol) -> Result<Quote, DeskError> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| DeskError::QuoteUnavailable("not connected".to_string()))?;
        client
            .markets()
            .quote(symbol)
            .await
            .map_err(|e| DeskError::QuoteUnavailable(e.to_string()))
    }

    /// Last price, degrading to [`Quote::Unavailable`]. Never fails; not cached.
    pub async fn fetch_quote(&self, symbol: &Symbol) -> Quote {
        match self.try_fetch_quote(symbol).await {
            Ok(quote) => quote,
            Err(e) => {
                tracing::error!(symbol = %symbol, "Error fetching price for {}: {}", symbol, e);
                Quote::Unavailable
            }
        }
    }

    // ── Orders ───────────────────────────────────────────────────────────

    /// Run the form validator, logging each message at warn.
    pub fn validate_order(&self, form: &OrderForm) -> Result<OrderRequest, DeskError> {
        build_order(form).map_err(|errors| {
            for message in errors.iter() {
                tracing::warn!("Input validation error: {}", message);
            }
            DeskError::from(errors)
        })
    }

    /// Validate then submit.
    pub async fn place_order(&mut self, form: &OrderForm) -> Result<OrderResult, DeskError> {
        let request = self.validate_order(form)?;
        self.submit_order(&request).await
    }

    /// Submit a validated order and record it on success.
    ///
    /// Exchange rejections become `OrderRejected` with the exchange's text;
    /// anything else becomes `OrderSubmissionFailed`. Neither is retried and
    /// neither touches the history. A timeout after the exchange accepted the
    /// order therefore leaves no local entry.
    pub async fn submit_order(&mut self, request: &OrderRequest) -> Result<OrderResult, DeskError> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| DeskError::OrderSubmissionFailed("not connected".to_string()))?;

        tracing::info!(
            symbol = %request.symbol(),
            side = %request.side(),
            order_type = %request.kind(),
            quantity = %fmt::wire(&request.quantity()),
            price = ?request.price().map(|p| fmt::wire(&p)),
            stop_price = ?request.stop_price().map(|p| fmt::wire(&p)),
            time_in_force = ?request.time_in_force(),
            recv_window_ms = client.recv_window_ms(),
            "Placing order"
        );

        let result = match client.orders().submit(request).await {
            Ok(result) => result,
            Err(e) => return Err(classify_submit_error(e)),
        };

        tracing::info!(
            order_id = result.order_id,
            symbol = %result.symbol,
            status = %result.status,
            executed_qty = %result.executed_qty,
            "Order response: {:?}",
            result
        );

        self.history
            .record(OrderHistoryEntry::from_result(&result, Local::now()));
        Ok(result)
    }
}

fn connection_failed(cause: impl std::fmt::Display) -> DeskError {
    let err = DeskError::ConnectionFailed(cause.to_string());
    tracing::error!("API connection failed: {}", cause);
    err
}

fn classify_submit_error(e: HttpError) -> DeskError {
    match e {
        HttpError::Api { code, msg, .. } => {
            tracing::error!(code, "Order API error: {}", msg);
            DeskError::OrderRejected(msg)
        }
        other => {
            if let HttpError::Reqwest(re) = &other {
                if re.is_timeout() {
                    tracing::warn!(
                        "Order request timed out; the exchange may still have accepted it"
                    );
                }
            }
            tracing::error!("Order unexpected error: {}", other);
            DeskError::OrderSubmissionFailed(other.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderForm;
    use crate::shared::Side;
    use rust_decimal::Decimal;

    fn session() -> Session {
        Session::new(DeskConfig::default())
    }

    #[test]
    fn test_new_session_is_disconnected() {
        let s = session();
        assert!(!s.is_connected());
        assert!(s.symbols().is_empty());
        assert_eq!(s.account().balance, "N/A");
        assert!(s.history().is_empty());
    }

    #[tokio::test]
    async fn test_connect_rejects_blank_credentials() {
        let mut s = session();
        let err = s.connect(Credentials::new("key", "")).await.unwrap_err();
        assert!(matches!(err, DeskError::ConnectionFailed(_)));
        assert!(s.client().is_none());
    }

    #[tokio::test]
    async fn test_fetch_quote_when_disconnected() {
        let s = session();
        assert_eq!(s.fetch_quote(&Symbol::from("BTCUSDT")).await, Quote::Unavailable);
        let err = s.try_fetch_quote(&Symbol::from("BTCUSDT")).await.unwrap_err();
        assert!(matches!(err, DeskError::QuoteUnavailable(ref m) if m == "not connected"));
    }

    #[tokio::test]
    async fn test_submit_when_disconnected() {
        let mut s = session();
        let form = OrderForm::new("BTCUSDT", "MARKET", Side::Buy, Decimal::new(1, 2));
        let err = s.place_order(&form).await.unwrap_err();
        assert!(matches!(err, DeskError::OrderSubmissionFailed(ref m) if m == "not connected"));
        assert!(s.history().is_empty());
    }

    #[tokio::test]
    async fn test_place_order_validation_short_circuits() {
        let mut s = session();
        let form = OrderForm::new("BTCUSDT", "STOP", Side::Buy, Decimal::ONE);
        match s.place_order(&form).await.unwrap_err() {
            DeskError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_order_surfaces_messages() {
        let s = session();
        let form = OrderForm::new("BTCUSDT", "LIMIT", Side::Sell, Decimal::ONE);
        let err = s.validate_order(&form).unwrap_err();
        assert_eq!(err.user_message(), "Limit price must be greater than zero.");

        let form = form.with_price(Decimal::new(27_000, 0));
        assert!(matches!(s.validate_order(&form), Ok(OrderRequest::Limit { .. })));
    }

    #[test]
    fn test_classify_submit_error() {
        let rejected = classify_submit_error(HttpError::Api {
            status: 400,
            code: -4003,
            msg: "Quantity less than minimum".to_string(),
        });
        assert!(matches!(rejected, DeskError::OrderRejected(ref m) if m == "Quantity less than minimum"));

        let failed = classify_submit_error(HttpError::Decode("expected value".to_string()));
        assert!(matches!(failed, DeskError::OrderSubmissionFailed(_)));
    }
}
