//! Error types and failure normalization
//!
//! Every failure produced while answering a query (version resolution, page
//! fetches, sub-query composition, formatting) leaves the crate as one
//! [`Error`]. Collaborator failures enter as a tagged [`Failure`] and are
//! turned into an [`Error`] by [`normalize`], which also attaches whatever
//! partial data had been produced when the failure happened.

use crate::remote::RemoteError;
use crate::types::Trustline;
use thiserror::Error;

/// Result type for ledger query operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ledger query errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed input, detected before any remote call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Remote node returned an error or a malformed response
    #[error("Remote protocol error: {message}")]
    RemoteProtocol {
        /// Message extracted from the remote failure
        message: String,
        /// Data accumulated before the failure, for diagnostics
        data: Option<PartialData>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a remote protocol error without partial data
    pub fn remote(message: impl Into<String>) -> Self {
        Error::RemoteProtocol {
            message: message.into(),
            data: None,
        }
    }

    /// Stable kind name
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "ValidationError",
            Error::RemoteProtocol { .. } => "RemoteProtocolError",
            Error::Config(_) => "ConfigError",
        }
    }

    /// Message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            Error::Validation(message) | Error::Config(message) => message,
            Error::RemoteProtocol { message, .. } => message,
        }
    }

    /// Partial data attached to the error, if any
    pub fn data(&self) -> Option<&PartialData> {
        match self {
            Error::RemoteProtocol { data, .. } => data.as_ref(),
            _ => None,
        }
    }

    /// Replace the attached partial data.
    ///
    /// Validation and configuration errors happen before anything is fetched
    /// and carry no data slot; they are returned unchanged.
    pub fn with_data(self, data: Option<PartialData>) -> Self {
        match self {
            Error::RemoteProtocol { message, .. } => Error::RemoteProtocol { message, data },
            other => other,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(format!("Failed to parse config: {}", err))
    }
}

/// Data produced before a request failed
#[derive(Debug, Clone, PartialEq)]
pub enum PartialData {
    /// Trust lines accumulated by a pagination walk
    Trustlines(Vec<Trustline>),
    /// Whatever balance sub-queries had completed
    Balances {
        /// Native balance, if that branch finished
        xrp: Option<String>,
        /// Trust lines, complete or partial
        trustlines: Option<Vec<Trustline>>,
    },
}

/// A failure as reported at a collaborator boundary
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// Raw failure from the remote port
    Remote(RemoteError),
    /// Already classified by this crate
    Domain(Error),
}

impl From<RemoteError> for Failure {
    fn from(err: RemoteError) -> Self {
        Failure::Remote(err)
    }
}

impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        Failure::Domain(err)
    }
}

/// Map any failure into an [`Error`] carrying `data`.
///
/// Domain errors pass through with `data` replacing what was attached before.
/// Remote errors become [`Error::RemoteProtocol`] with the node's error message
/// when it sent one. Normalizing an already normalized error is a no-op apart
/// from the data slot.
pub fn normalize(failure: impl Into<Failure>, data: Option<PartialData>) -> Error {
    match failure.into() {
        Failure::Domain(err) => err.with_data(data),
        Failure::Remote(err) => Error::RemoteProtocol {
            message: err.message().to_string(),
            data,
        },
    }
}
