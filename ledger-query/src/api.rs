//! Public query entry points

use crate::{
    balances::fetch_balances, config::Config, ledger_version, remote::RemoteQueryPort,
    rpc::JsonRpcClient, trustlines::fetch_trustlines, types::*, validate, Result,
};
use std::sync::Arc;
use tracing::info;

/// Read-only queries against one ledger node
#[derive(Clone)]
pub struct LedgerQuery {
    port: Arc<dyn RemoteQueryPort>,
}

impl std::fmt::Debug for LedgerQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerQuery")
            .field("port", &self.port.name())
            .finish()
    }
}

impl LedgerQuery {
    /// Create a query API over any remote port
    pub fn new(port: Arc<dyn RemoteQueryPort>) -> Self {
        Self { port }
    }

    /// Create a query API talking JSON-RPC to the configured node
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = JsonRpcClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Balances of `account`: native first (unless filtered out), then one per
    /// trust line.
    pub async fn get_balances(
        &self,
        account: &str,
        options: BalancesOptions,
    ) -> Result<Vec<Balance>> {
        validate::address(account)?;
        validate::balances_options(&options)?;

        let ledger_version =
            ledger_version::resolve(self.port.as_ref(), options.ledger_version).await?;
        info!(
            "Fetching balances for {} at ledger {} via {}",
            account,
            ledger_version,
            self.port.name()
        );

        fetch_balances(self.port.as_ref(), account, ledger_version, &options).await
    }

    /// Trust lines of `account`, walking every page up to `options.limit`
    pub async fn get_trustlines(
        &self,
        account: &str,
        options: TrustlinesOptions,
    ) -> Result<TrustlinesPage> {
        validate::address(account)?;
        validate::trustlines_options(&options)?;

        let ledger_version =
            ledger_version::resolve(self.port.as_ref(), options.ledger_version).await?;
        info!(
            "Fetching trust lines for {} at ledger {} via {}",
            account,
            ledger_version,
            self.port.name()
        );

        fetch_trustlines(self.port.as_ref(), account, ledger_version, &options).await
    }
}
