//! Account domain: the balance snapshot taken at connect time.

pub mod client;
pub mod wire;

pub use client::Account;

/// Shown in place of a balance the gateway did not give us.
pub const BALANCE_UNAVAILABLE: &str = "N/A";

/// Balance of the quote asset as the gateway reported it.
///
/// Refreshed only when the session connects; not live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub asset: String,
    pub balance: String,
}

impl AccountSnapshot {
    pub fn unavailable(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            balance: BALANCE_UNAVAILABLE.to_string(),
        }
    }

    /// Pick `asset` out of a balance listing; missing asset → `"N/A"`.
    pub fn from_balances(asset: &str, balances: &[wire::BalanceEntry]) -> Self {
        balances
            .iter()
            .find(|b| b.asset == asset)
            .map(|b| Self {
                asset: asset.to_string(),
                balance: b.balance.clone(),
            })
            .unwrap_or_else(|| Self::unavailable(asset))
    }

    pub fn is_available(&self) -> bool {
        self.balance != BALANCE_UNAVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(asset: &str, balance: &str) -> wire::BalanceEntry {
        wire::BalanceEntry {
            account_alias: None,
            asset: asset.to_string(),
            balance: balance.to_string(),
            available_balance: None,
            update_time: None,
        }
    }

    #[test]
    fn test_from_balances_picks_asset() {
        let balances = vec![entry("BNB", "0.5"), entry("USDT", "15000.00000000")];
        let snap = AccountSnapshot::from_balances("USDT", &balances);
        assert_eq!(snap.balance, "15000.00000000");
        assert!(snap.is_available());
    }

    #[test]
    fn test_from_balances_missing_asset() {
        let snap = AccountSnapshot::from_balances("USDT", &[entry("BNB", "0.5")]);
        assert_eq!(snap.balance, "N/A");
        assert!(!snap.is_available());
    }
}
