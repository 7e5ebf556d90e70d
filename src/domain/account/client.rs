//! Account sub-client: balances.

use crate::client::DeskClient;
use crate::domain::account::wire::BalanceEntry;
use crate::domain::account::AccountSnapshot;
use crate::error::HttpError;

pub struct Account<'a> {
    pub(crate) client: &'a DeskClient,
}

impl<'a> Account<'a> {
    /// Every asset balance on the futures wallet. Signed.
    pub async fn balances(&self) -> Result<Vec<BalanceEntry>, HttpError> {
        self.client.http.get_balances().await
    }

    /// Snapshot of a single asset.
    pub async fn snapshot(&self, asset: &str) -> Result<AccountSnapshot, HttpError> {
        let balances = self.balances().await?;
        Ok(AccountSnapshot::from_balances(asset, &balances))
    }
}
