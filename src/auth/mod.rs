//! Authentication: API credentials and request signing.
//!
//! ## Security Model
//!
//! - Credentials live only for the lifetime of a [`Session`](crate::session::Session).
//!   They are never written to disk and never logged.
//! - The secret is never sent over the wire. Signed endpoints carry an
//!   HMAC-SHA256 of the exact query string, plus the key in the
//!   `X-MBX-APIKEY` header.
//! - `Debug` output redacts the secret.

pub mod signing;

pub use signing::{encode_params, now_millis, sign_query, SignedQuery};

/// API key pair issued by the exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into().trim().to_string(),
            api_secret: api_secret.into().trim().to_string(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Both halves present.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("key-123", "very-secret");
        let dbg = format!("{:?}", creds);
        assert!(dbg.contains("key-123"));
        assert!(!dbg.contains("very-secret"));
    }

    #[test]
    fn test_is_complete() {
        assert!(Credentials::new("k", "s").is_complete());
        assert!(!Credentials::new("k", "  ").is_complete());
        assert!(!Credentials::new("", "s").is_complete());
    }
}
