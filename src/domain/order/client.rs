//! Orders sub-client: submit.

use crate::client::DeskClient;
use crate::domain::order::{wire, OrderRequest, OrderResult};
use crate::error::HttpError;

pub struct Orders<'a> {
    pub(crate) client: &'a DeskClient,
}

impl<'a> Orders<'a> {
    /// Submit a validated order. Never retried: a timeout here says nothing
    /// about whether the exchange accepted the order.
    pub async fn submit(&self, request: &OrderRequest) -> Result<OrderResult, HttpError> {
        let body = wire::NewOrderRequest::from(request);
        let resp = self
            .client
            .http
            .post_order(&body, self.client.recv_window_ms)
            .await?;
        Ok(resp.into())
    }
}
