//! Shared types for ledger queries

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ledger sequence number identifying one immutable snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LedgerVersion(pub u32);

impl std::fmt::Display for LedgerVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LedgerVersion {
    fn from(sequence: u32) -> Self {
        LedgerVersion(sequence)
    }
}

/// Opaque pagination token issued by the node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Marker(pub serde_json::Value);

impl From<&str> for Marker {
    fn from(token: &str) -> Self {
        Marker(serde_json::Value::String(token.to_string()))
    }
}

/// Caller filters for trust line queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustlinesOptions {
    /// Only return lines in this currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Only return lines with this peer account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
    /// Maximum number of results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Snapshot to read; current closed ledger when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_version: Option<LedgerVersion>,
}

/// Balance queries accept the same filters as trust line queries
pub type BalancesOptions = TrustlinesOptions;

/// One `account_lines` page request
#[derive(Debug, Clone, PartialEq)]
pub struct AccountLinesRequest {
    /// Account whose lines are listed
    pub account: String,
    /// Snapshot every page of the walk reads from
    pub ledger_version: LedgerVersion,
    /// Continuation token, absent on the first page
    pub marker: Option<Marker>,
    /// Page size, already clamped
    pub limit: u32,
    /// Restrict to lines with this peer
    pub peer: Option<String>,
}

/// One `account_lines` page as returned by the node
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AccountLinesPage {
    /// Present when more pages exist
    #[serde(default)]
    pub marker: Option<Marker>,
    /// Raw trust line entries
    #[serde(default)]
    pub lines: Vec<AccountLine>,
}

/// Wire trust line entry (`account_lines` result element)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountLine {
    /// Peer account
    pub account: String,
    /// Signed balance from the perspective of the queried account
    pub balance: String,
    /// Currency code
    pub currency: String,
    /// Limit set by the queried account
    pub limit: String,
    /// Limit set by the peer
    pub limit_peer: String,
    /// Inbound quality, billionths
    #[serde(default)]
    pub quality_in: u32,
    /// Outbound quality, billionths
    #[serde(default)]
    pub quality_out: u32,
    /// Queried account set no-ripple
    #[serde(default)]
    pub no_ripple: Option<bool>,
    /// Peer set no-ripple
    #[serde(default)]
    pub no_ripple_peer: Option<bool>,
    /// Queried account authorized the peer
    #[serde(default)]
    pub authorized: Option<bool>,
    /// Peer authorized the queried account
    #[serde(default)]
    pub peer_authorized: Option<bool>,
    /// Queried account froze the line
    #[serde(default)]
    pub freeze: Option<bool>,
    /// Peer froze the line
    #[serde(default)]
    pub freeze_peer: Option<bool>,
}

/// Account root fields needed for the native balance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountInfo {
    /// Native balance in drops
    #[serde(rename = "Balance")]
    pub balance: String,
    /// Account sequence
    #[serde(rename = "Sequence", default)]
    pub sequence: u32,
}

/// Trust line as seen from the queried account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trustline {
    /// Terms set by the queried account
    pub specification: TrustlineSpecification,
    /// Terms set by the peer
    pub counterparty: TrustlineCounterparty,
    /// Current state
    pub state: TrustlineState,
}

/// Terms set by the queried account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustlineSpecification {
    /// Credit limit
    pub limit: String,
    /// Currency code
    pub currency: String,
    /// Peer account
    pub counterparty: String,
    /// Inbound quality as a ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_in: Option<Decimal>,
    /// Outbound quality as a ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_out: Option<Decimal>,
    /// Rippling disabled on this side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rippling_disabled: Option<bool>,
    /// Frozen on this side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen: Option<bool>,
    /// Peer authorized by this side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized: Option<bool>,
}

/// Terms set by the peer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustlineCounterparty {
    /// Peer's credit limit
    pub limit: String,
    /// Rippling disabled by the peer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rippling_disabled: Option<bool>,
    /// Frozen by the peer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen: Option<bool>,
    /// Queried account authorized by the peer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized: Option<bool>,
}

/// Trust line state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustlineState {
    /// Signed balance
    pub balance: String,
}

/// Balance in one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Currency code
    pub currency: String,
    /// Amount as a decimal string
    pub value: String,
    /// Issuer; absent for the native currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
}

impl Balance {
    /// Native currency balance
    pub fn native(value: impl Into<String>) -> Self {
        Self {
            currency: crate::NATIVE_CURRENCY.to_string(),
            value: value.into(),
            counterparty: None,
        }
    }

    /// Whether this is the native currency balance
    pub fn is_native(&self) -> bool {
        self.counterparty.is_none() && self.currency == crate::NATIVE_CURRENCY
    }
}

/// Raw outputs of the two balance sub-queries
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedBalances {
    /// Native balance, display units
    pub xrp: String,
    /// Trust lines at the same ledger version
    pub trustlines: Vec<Trustline>,
}

/// Trust line query result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustlinesPage {
    /// Latest marker seen; absent when the walk reached the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    /// Matching trust lines in node order
    pub results: Vec<Trustline>,
}
