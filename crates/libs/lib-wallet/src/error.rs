//! # Error Types
//!
//! Three layers, each a `thiserror` type:
//!
//! - [`GatewayError`]: anything the wallet library reports, tagged with a
//!   [`GatewayErrorKind`] so callers never inspect message text
//! - [`StorageError`]: `localStorage` access failures
//! - [`WalletError`]: what the connection manager returns
//!
//! ## Cancellation
//!
//! A user closing the wallet selector is [`GatewayErrorKind::Cancelled`]; a
//! request that outlives the configured timeout is [`GatewayErrorKind::TimedOut`].
//! Both answer `true` to [`GatewayError::is_cancellation`], which is the only
//! check the manager uses to decide whether a failure is shown to the user.
//!
//! ```rust
//! use lib_wallet::error::{GatewayError, WalletError};
//!
//! let err: WalletError = GatewayError::cancelled().into();
//! assert!(err.is_cancellation());
//!
//! let err: WalletError = GatewayError::library("Freighter is locked").into();
//! assert!(!err.is_cancellation());
//! assert_eq!(err.to_string(), "Freighter is locked");
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Structured reason attached to every [`GatewayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    /// The user closed the selection surface without choosing a wallet.
    Cancelled,
    /// The wallet did not answer before the configured timeout.
    TimedOut,
    /// The library reported success but gave no address.
    NoAddress,
    /// The library returned no signed transaction.
    NotSigned,
    /// The library (or the requested provider) could not be reached.
    Unavailable,
    /// Any other error thrown by the library.
    Library,
}

/// Failure reported by a [`crate::gateway::WalletGateway`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatewayError {
    kind: GatewayErrorKind,
    message: String,
}

impl GatewayError {
    pub fn new(kind: GatewayErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn cancelled() -> Self {
        Self::new(GatewayErrorKind::Cancelled, "Wallet selection cancelled")
    }

    pub fn timed_out(after_ms: u32) -> Self {
        Self::new(
            GatewayErrorKind::TimedOut,
            format!("Wallet did not respond within {} ms", after_ms),
        )
    }

    pub fn no_address() -> Self {
        Self::new(GatewayErrorKind::NoAddress, "Failed to retrieve wallet address")
    }

    pub fn not_signed() -> Self {
        Self::new(GatewayErrorKind::NotSigned, "Transaction signing failed")
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Unavailable, message)
    }

    pub fn library(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Library, message)
    }

    pub fn kind(&self) -> GatewayErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the failure should be treated as the user backing out.
    pub fn is_cancellation(&self) -> bool {
        matches!(
            self.kind,
            GatewayErrorKind::Cancelled | GatewayErrorKind::TimedOut
        )
    }
}

/// Browser storage failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage read failed: {0}")]
    Read(String),

    #[error("Storage write failed: {0}")]
    Write(String),
}

/// Error returned by [`crate::manager::ConnectionManager`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The persisted record could not be parsed or violates record invariants.
    #[error("Invalid stored connection: {0}")]
    InvalidRecord(String),

    /// A connection resolved with an empty address.
    #[error("Failed to retrieve wallet address")]
    EmptyAddress,

    #[error("No wallet connected")]
    NotConnected,

    /// A newer connect or a disconnect happened while this attempt was in flight.
    #[error("Connection attempt superseded")]
    Superseded,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl WalletError {
    pub fn is_cancellation(&self) -> bool {
        matches!(self, WalletError::Gateway(err) if err.is_cancellation())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::InvalidRecord(err.to_string())
    }
}
