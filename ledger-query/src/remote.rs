//! Remote query port

use crate::types::*;
use async_trait::async_trait;

/// Result type for remote port calls
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Raw failures reported by a remote port
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The node answered with an error status
    Rpc {
        /// Error code, e.g. `actNotFound`
        error: String,
        /// Human readable message, when the node sent one
        error_message: Option<String>,
    },

    /// Request never got an answer
    Transport(String),

    /// Answer did not have the expected shape
    Malformed(String),
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RemoteError {}

impl RemoteError {
    /// Message to surface to callers
    pub fn message(&self) -> &str {
        match self {
            RemoteError::Rpc {
                error,
                error_message,
            } => error_message.as_deref().unwrap_or(error),
            RemoteError::Transport(message) | RemoteError::Malformed(message) => message,
        }
    }
}

/// Read primitives the query engine needs from a ledger node
#[async_trait]
pub trait RemoteQueryPort: Send + Sync {
    /// Fetch one page of an account's trust lines
    async fn request_account_lines(
        &self,
        request: &AccountLinesRequest,
    ) -> RemoteResult<AccountLinesPage>;

    /// Sequence number of the most recent closed ledger
    async fn get_ledger_sequence(&self) -> RemoteResult<LedgerVersion>;

    /// Account root at a given ledger
    async fn request_account_info(
        &self,
        account: &str,
        ledger_version: LedgerVersion,
    ) -> RemoteResult<AccountInfo>;

    /// Port name, for logs
    fn name(&self) -> &str;
}
