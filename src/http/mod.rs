//! HTTP client layer: `GatewayHttp`, one method per gateway endpoint.
//!
//! No request is ever retried: every failure is returned to the caller
//! exactly once.

pub mod client;

pub use client::GatewayHttp;
