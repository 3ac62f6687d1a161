//! # Wallet Configuration
//!
//! [`WalletConfig`] is built once at application start and handed to the gateway
//! and the manager. There is no global instance: the web app constructs it from
//! an optional JSON blob embedded in the page, tests construct it directly.
//!
//! ```rust
//! use lib_wallet::config::{StellarNetwork, WalletConfig};
//!
//! let config = WalletConfig::from_json(r#"{ "network": "public", "requestTimeoutMs": 30000 }"#).unwrap();
//! assert_eq!(config.network, StellarNetwork::Public);
//! assert_eq!(config.default_provider_id, "freighter");
//! assert_eq!(config.request_timeout(), Some(30_000));
//! ```

use serde::Deserialize;

use crate::constants::{
    DEFAULT_PROVIDER_ID, DEFAULT_REQUEST_TIMEOUT_MS, FUTURENET_PASSPHRASE, MODAL_TITLE,
    NOT_AVAILABLE_TEXT, PUBLIC_PASSPHRASE, SELECTOR_PROVIDER_NAME, STORAGE_KEY,
    TESTNET_PASSPHRASE,
};
use crate::error::{Result, WalletError};

/// Stellar network the wallet kit is bound to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StellarNetwork {
    #[default]
    Testnet,
    Public,
    Futurenet,
}

impl StellarNetwork {
    /// Network passphrase; the kit also uses it as its network identifier.
    pub fn passphrase(&self) -> &'static str {
        match self {
            StellarNetwork::Testnet => TESTNET_PASSPHRASE,
            StellarNetwork::Public => PUBLIC_PASSPHRASE,
            StellarNetwork::Futurenet => FUTURENET_PASSPHRASE,
        }
    }
}

/// Wallet integration settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WalletConfig {
    pub network: StellarNetwork,

    /// Provider the kit is constructed with.
    pub default_provider_id: String,

    /// `localStorage` key for the persisted connection record.
    pub storage_key: String,

    pub modal_title: String,
    pub not_available_text: String,

    /// Name recorded for connections made through the selector flow.
    pub selector_provider_name: String,

    /// Upper bound for any single wallet request. `0` disables the timeout.
    pub request_timeout_ms: u32,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            network: StellarNetwork::default(),
            default_provider_id: DEFAULT_PROVIDER_ID.to_string(),
            storage_key: STORAGE_KEY.to_string(),
            modal_title: MODAL_TITLE.to_string(),
            not_available_text: NOT_AVAILABLE_TEXT.to_string(),
            selector_provider_name: SELECTOR_PROVIDER_NAME.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl WalletConfig {
    /// Parse and validate a JSON override; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: WalletConfig =
            serde_json::from_str(raw).map_err(|e| WalletError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(WalletError::Config("storageKey must not be empty".to_string()));
        }

        if self.default_provider_id.trim().is_empty() {
            return Err(WalletError::Config(
                "defaultProviderId must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<u32> {
        (self.request_timeout_ms > 0).then_some(self.request_timeout_ms)
    }
}
