//! Wallet connection DTOs

use serde::{Deserialize, Serialize};

/// Connection record as persisted in `localStorage`.
///
/// `display_address` is written for compatibility with older clients but is
/// never trusted on load; readers recompute it from `address`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConnection {
    #[serde(default)]
    pub is_connected: bool,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub wallet_id: Option<String>,
    #[serde(default)]
    pub wallet_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_address: Option<String>,
}

/// A wallet provider known to the Stellar Wallets Kit.
///
/// Mirrors the kit's `ISupportedWallet`; unknown fields (`type`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDescriptor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ProviderDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_available: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_available,
            icon: None,
            url: None,
        }
    }
}
