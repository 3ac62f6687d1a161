//! # Connection Record
//!
//! [`ConnectionRecord`] is the single piece of connection state. Its fields are
//! private so the invariants hold by construction:
//!
//! - connected ⇔ `address` is set (and non-empty)
//! - `display_address` is set ⇔ `address` is set, and is always
//!   [`shared::utils::truncate_address`] of it
//!
//! State changes go through [`reduce`], a pure function from the current record
//! and a [`Transition`] to the next record and the [`PersistEffect`] that must
//! be applied to storage. The manager applies the effect; nothing here performs
//! I/O.

use shared::dto::wallet::StoredConnection;
use shared::utils::truncate_address;

use crate::error::{Result, WalletError};

/// Which wallet is connected, under what address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionRecord {
    address: Option<String>,
    provider_id: Option<String>,
    provider_name: Option<String>,
    display_address: Option<String>,
}

impl ConnectionRecord {
    /// The disconnected record.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a connected record. Blank addresses are rejected.
    pub fn connected(
        address: impl Into<String>,
        provider_id: Option<String>,
        provider_name: Option<String>,
    ) -> Result<Self> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(WalletError::EmptyAddress);
        }

        Ok(Self {
            display_address: Some(truncate_address(&address)),
            address: Some(address),
            provider_id,
            provider_name,
        })
    }

    /// Rebuild a record from its persisted form.
    ///
    /// `displayAddress` in storage is ignored. A stored object whose
    /// `isConnected` flag disagrees with its address is rejected.
    pub fn from_stored(stored: StoredConnection) -> Result<Self> {
        match (stored.is_connected, stored.address) {
            (true, Some(address)) => {
                Self::connected(address, stored.wallet_id, stored.wallet_name)
                    .map_err(|_| WalletError::InvalidRecord("empty address".to_string()))
            }
            (false, None) => Ok(Self::empty()),
            (true, None) => Err(WalletError::InvalidRecord(
                "connected record without address".to_string(),
            )),
            (false, Some(_)) => Err(WalletError::InvalidRecord(
                "disconnected record with address".to_string(),
            )),
        }
    }

    /// Parse the raw `localStorage` value.
    pub fn parse(raw: &str) -> Result<Self> {
        let stored: StoredConnection = serde_json::from_str(raw)?;
        Self::from_stored(stored)
    }

    pub fn to_stored(&self) -> StoredConnection {
        StoredConnection {
            is_connected: self.is_connected(),
            address: self.address.clone(),
            wallet_id: self.provider_id.clone(),
            wallet_name: self.provider_name.clone(),
            display_address: self.display_address.clone(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn provider_id(&self) -> Option<&str> {
        self.provider_id.as_deref()
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider_name.as_deref()
    }

    pub fn display_address(&self) -> Option<&str> {
        self.display_address.as_deref()
    }
}

/// Event that replaces the current record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Startup: adopt whatever storage held (raw value, if any).
    Hydrate(Option<String>),
    /// A connect attempt succeeded.
    Connected(ConnectionRecord),
    Disconnect,
}

/// Storage side effect produced by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistEffect {
    None,
    Write(StoredConnection),
    Remove,
}

/// Compute the next record and its storage effect.
///
/// Records are replaced wholesale, never patched. Hydrating from an empty
/// storage slot keeps `current`.
pub fn reduce(current: &ConnectionRecord, transition: Transition) -> (ConnectionRecord, PersistEffect) {
    match transition {
        Transition::Hydrate(None) => (current.clone(), PersistEffect::None),
        Transition::Hydrate(Some(raw)) => match ConnectionRecord::parse(&raw) {
            Ok(record) => (record, PersistEffect::None),
            Err(_) => (ConnectionRecord::empty(), PersistEffect::Remove),
        },
        Transition::Connected(record) => {
            let stored = record.to_stored();
            (record, PersistEffect::Write(stored))
        }
        Transition::Disconnect => (ConnectionRecord::empty(), PersistEffect::Remove),
    }
}
