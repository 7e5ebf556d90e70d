//! Wire types for account endpoints.

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One row of `GET /fapi/v2/balance`.
///
/// Amounts stay as the gateway's strings; the desk only displays them.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BalanceEntry {
    #[serde(default)]
    pub account_alias: Option<String>,
    pub asset: String,
    pub balance: String,
    #[serde(default)]
    pub available_balance: Option<String>,
    #[serde(default, with = "serde_util::timestamp_ms_opt")]
    pub update_time: Option<DateTime<Utc>>,
}
