//! Ledger version resolution
//!
//! A logical request reads every page and every sub-query from one ledger
//! snapshot. The version is resolved once, before any paging or fan-out, and
//! then passed down by value.

use crate::{
    error::normalize,
    remote::RemoteQueryPort,
    types::LedgerVersion,
    Result,
};
use tracing::{debug, warn};

/// Return `explicit` unchanged, or ask the node for its latest closed ledger
pub async fn resolve(
    port: &dyn RemoteQueryPort,
    explicit: Option<LedgerVersion>,
) -> Result<LedgerVersion> {
    if let Some(version) = explicit {
        return Ok(version);
    }

    match port.get_ledger_sequence().await {
        Ok(version) => {
            debug!("Resolved current ledger version {} via {}", version, port.name());
            Ok(version)
        }
        Err(e) => {
            warn!("Failed to resolve ledger version via {}: {}", port.name(), e);
            Err(normalize(e, None))
        }
    }
}
