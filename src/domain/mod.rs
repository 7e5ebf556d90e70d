//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types handed to the session and the front end
//! - `wire.rs`: Raw serde structs matching gateway requests/responses
//! - `convert.rs`: `From` conversions from wire to domain types
//! - `state.rs`: Session-owned state containers
//! - `client.rs`: Sub-client with the HTTP calls for the slice

pub mod account;
pub mod market;
pub mod order;
