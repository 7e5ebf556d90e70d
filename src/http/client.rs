//! Low-level HTTP client: `GatewayHttp`.
//!
//! One method per gateway endpoint. Returns wire types (conversion to domain
//! types happens in the sub-clients). Signed endpoints are stamped with the
//! local clock corrected by the server offset measured at connect time.

use crate::auth::{encode_params, now_millis, sign_query, Credentials};
use crate::domain::account::wire::BalanceEntry;
use crate::domain::market::wire::{ExchangeInfoResponse, ServerTimeResponse, TickerPriceResponse};
use crate::domain::order::wire::{NewOrderRequest, NewOrderResponse};
use crate::error::HttpError;
use crate::network::API_KEY_HEADER;
use crate::shared::Symbol;

use async_lock::RwLock;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Error body the gateway returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: i64,
    msg: String,
}

/// Low-level HTTP client for the futures REST API.
pub struct GatewayHttp {
    base_url: String,
    client: Client,
    credentials: Option<Credentials>,
    /// server_time − local_time, in milliseconds.
    time_offset_ms: Arc<RwLock<i64>>,
}

impl GatewayHttp {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        credentials: Option<Credentials>,
    ) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
            time_offset_ms: Arc::new(RwLock::new(0)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    pub(crate) async fn set_time_offset(&self, offset_ms: i64) {
        *self.time_offset_ms.write().await = offset_ms;
    }

    pub async fn time_offset(&self) -> i64 {
        *self.time_offset_ms.read().await
    }

    /// Local clock shifted onto the gateway's clock.
    async fn corrected_timestamp(&self) -> i64 {
        now_millis() + self.time_offset().await
    }

    // ── Market data ──────────────────────────────────────────────────────

    pub async fn get_server_time(&self) -> Result<ServerTimeResponse, HttpError> {
        let url = format!("{}/fapi/v1/time", self.base_url);
        self.get(&url).await
    }

    pub async fn get_exchange_info(&self) -> Result<ExchangeInfoResponse, HttpError> {
        let url = format!("{}/fapi/v1/exchangeInfo", self.base_url);
        self.get(&url).await
    }

    pub async fn get_ticker_price(&self, symbol: &Symbol) -> Result<TickerPriceResponse, HttpError> {
        let url = format!(
            "{}/fapi/v1/ticker/price?symbol={}",
            self.base_url,
            urlencoding::encode(symbol.as_str())
        );
        self.get(&url).await
    }

    // ── Account ──────────────────────────────────────────────────────────

    pub async fn get_balances(&self) -> Result<Vec<BalanceEntry>, HttpError> {
        self.signed(Method::GET, "/fapi/v2/balance", String::new(), None)
            .await
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn post_order(
        &self,
        request: &NewOrderRequest,
        recv_window_ms: u64,
    ) -> Result<NewOrderResponse, HttpError> {
        let query = encode_params(request)?;
        self.signed(Method::POST, "/fapi/v1/order", query, Some(recv_window_ms))
            .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        Self::read_response(resp).await
    }

    /// Send an authenticated request.
    ///
    /// GET carries the signed query in the URL, everything else as a
    /// form-encoded body.
    async fn signed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        mut query: String,
        recv_window_ms: Option<u64>,
    ) -> Result<T, HttpError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(HttpError::MissingCredentials)?;

        if let Some(window) = recv_window_ms {
            push_param(&mut query, "recvWindow", &window.to_string());
        }
        push_param(&mut query, "timestamp", &self.corrected_timestamp().await.to_string());

        let signed = sign_query(credentials.api_secret(), query)?;
        let url = format!("{}{}", self.base_url, path);

        let req = if method == Method::GET {
            self.client
                .request(method, format!("{}?{}", url, signed.as_str()))
        } else {
            self.client
                .request(method, &url)
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(signed.into_string())
        };

        let resp = req
            .header(API_KEY_HEADER, credentials.api_key())
            .send()
            .await?;
        Self::read_response(resp).await
    }

    async fn read_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, HttpError> {
        let status = resp.status();
        let body_text = resp.text().await?;

        if status.is_success() {
            return serde_json::from_str::<T>(&body_text)
                .map_err(|e| HttpError::Decode(format!("{}: {}", e, truncate(&body_text))));
        }

        Err(classify_error(status.as_u16(), body_text))
    }
}

impl Clone for GatewayHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            credentials: self.credentials.clone(),
            time_offset_ms: self.time_offset_ms.clone(),
        }
    }
}

fn push_param(query: &mut String, key: &str, value: &str) {
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(key);
    query.push('=');
    query.push_str(value);
}

/// Map a non-2xx response onto an [`HttpError`].
///
/// Any body in the gateway's `{code, msg}` shape is an exchange-reported
/// error, whatever the status.
fn classify_error(status: u16, body: String) -> HttpError {
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(api) => HttpError::Api {
            status,
            code: api.code,
            msg: api.msg,
        },
        Err(_) => HttpError::ServerError { status, body },
    }
}

fn truncate(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
