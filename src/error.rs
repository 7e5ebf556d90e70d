//! Unified error types.

use crate::domain::order::ValidationErrors;
use thiserror::Error;

/// Top-level desk error. Every gateway failure is converted into one of
/// these kinds at its call site.
#[derive(Error, Debug)]
pub enum DeskError {
    /// Client construction, time sync or symbol load failed.
    #[error("API connection failed: {0}")]
    ConnectionFailed(String),

    /// Balance could not be loaded. Non-fatal.
    #[error("Balance unavailable: {0}")]
    BalanceUnavailable(String),

    /// Ticker price could not be loaded. Non-fatal.
    #[error("Quote unavailable: {0}")]
    QuoteUnavailable(String),

    #[error("Invalid order: {0}")]
    Validation(ValidationErrors),

    /// The exchange explicitly refused the order.
    #[error("Order rejected: {0}")]
    OrderRejected(String),

    /// Any other failure on the submission path.
    #[error("Order submission failed: {0}")]
    OrderSubmissionFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DeskError {
    /// Message suitable for showing to the operator.
    ///
    /// For rejections this is the exchange's own text, unprefixed.
    pub fn user_message(&self) -> String {
        match self {
            DeskError::ConnectionFailed(m)
            | DeskError::BalanceUnavailable(m)
            | DeskError::QuoteUnavailable(m)
            | DeskError::OrderRejected(m)
            | DeskError::OrderSubmissionFailed(m)
            | DeskError::Config(m) => m.clone(),
            DeskError::Validation(errors) => errors.to_string(),
        }
    }
}

impl From<ValidationErrors> for DeskError {
    fn from(errors: ValidationErrors) -> Self {
        DeskError::Validation(errors)
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Error reported by the exchange itself (`{"code": .., "msg": ..}`).
    #[error("APIError(code={code}): {msg}")]
    Api { status: u16, code: i64, msg: String },

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Missing credentials for signed endpoint")]
    MissingCredentials,
}
