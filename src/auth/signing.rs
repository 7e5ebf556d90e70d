//! HMAC-SHA256 query signing for authenticated endpoints.

use crate::error::HttpError;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

/// A url-encoded query string with its `signature` parameter appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedQuery(String);

impl SignedQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Local wall clock in Unix milliseconds.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

/// Hex-encoded HMAC-SHA256 of `payload` keyed by `secret`.
pub fn signature_hex(secret: &str, payload: &str) -> Result<String, HttpError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| HttpError::Signing(e.to_string()))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Url-encode `params` in declaration order.
pub fn encode_params<T: Serialize + ?Sized>(params: &T) -> Result<String, HttpError> {
    serde_urlencoded::to_string(params).map_err(|e| HttpError::Signing(e.to_string()))
}

/// Append `&signature=<hex>` to an already encoded query.
///
/// The signature covers `query` exactly as it is sent.
pub fn sign_query(secret: &str, mut query: String) -> Result<SignedQuery, HttpError> {
    let signature = signature_hex(secret, &query)?;
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str("signature=");
    query.push_str(&signature);
    Ok(SignedQuery(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Worked example from the exchange's API documentation.
    const DOC_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";
    const DOC_PAYLOAD: &str = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";

    #[test]
    fn test_signature_matches_documented_example() {
        let sig = signature_hex(DOC_SECRET, DOC_PAYLOAD).unwrap();
        assert_eq!(
            sig,
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_sign_query_appends_signature_last() {
        let params = vec![
            ("symbol", "LTCBTC".to_string()),
            ("side", "BUY".to_string()),
            ("type", "LIMIT".to_string()),
            ("timeInForce", "GTC".to_string()),
            ("quantity", "1".to_string()),
            ("price", "0.1".to_string()),
            ("recvWindow", "5000".to_string()),
            ("timestamp", "1499827319559".to_string()),
        ];
        let query = encode_params(&params).unwrap();
        assert_eq!(query, DOC_PAYLOAD);
        let signed = sign_query(DOC_SECRET, query).unwrap();
        assert_eq!(
            signed.as_str(),
            format!(
                "{}&signature=c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71",
                DOC_PAYLOAD
            )
        );
    }

    #[test]
    fn test_sign_empty_query() {
        let signed = sign_query("secret", String::new()).unwrap();
        assert!(signed.as_str().starts_with("signature="));
        assert_eq!(signed.as_str().len(), "signature=".len() + 64);
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2023-01-01T00:00:00Z
        assert!(now_millis() > 1_672_531_200_000);
    }
}
