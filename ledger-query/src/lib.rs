//! # DelTran Ledger Query
//!
//! Read-path client for a remote ledger node's JSON-RPC interface:
//! - Account balances (native + issued currencies)
//! - Account trust lines with marker-based pagination
//! - One consistent ledger snapshot per logical request
//! - Single error taxonomy with partial data attached
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │        LedgerQuery (get_balances / get_trustlines)  │
//! └────────────┬────────────────────────────────────────┘
//!              │ validate → resolve ledger version once
//!     ┌────────┴──────────────┐
//!     │                       │
//! ┌───▼──────────┐   ┌────────▼─────────┐
//! │   Composer   │──▶│  Recursive Pager │
//! │ (xrp ∥ lines)│   │  (marker walk)   │
//! └───┬──────────┘   └────────┬─────────┘
//!     │                       │
//! ┌───▼───────────────────────▼─────────────────────────┐
//! │   Remote Query Port (JSON-RPC) + Error Normalizer   │
//! └─────────────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod amount;
pub mod api;
pub mod balances;
pub mod compose;
pub mod config;
pub mod error;
pub mod ledger_version;
pub mod metrics;
pub mod pager;
pub mod parse;
pub mod remote;
pub mod rpc;
pub mod trustlines;
pub mod types;
pub mod validate;

pub use api::LedgerQuery;
pub use config::Config;
pub use error::{Error, Failure, PartialData, Result};
pub use remote::{RemoteError, RemoteQueryPort, RemoteResult};
pub use rpc::JsonRpcClient;
pub use types::*;

/// Native currency code
pub const NATIVE_CURRENCY: &str = "XRP";

/// Smallest page size ever requested from the node
pub const MIN_PAGE_SIZE: u32 = 10;

/// Largest page size ever requested from the node
pub const MAX_PAGE_SIZE: u32 = 400;

/// Default request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Default JSON-RPC endpoint
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:5005";
