//! # Wallet Gateway
//!
//! [`WalletGateway`] is the only seam between connection state and the external
//! wallet library. Implementations translate library results into plain
//! strings and [`GatewayError`]s so the manager never sees library types.
//!
//! - `wallet-web` implements it over the Stellar Wallets Kit via wasm-bindgen
//! - [`TimeoutGateway`] bounds any gateway with a per-request timeout
//! - tests script a fake implementation
//!
//! The trait is `?Send`: the browser runtime is single-threaded and the kit's
//! handles are `JsValue`s.

mod timeout;

pub use timeout::{Timer, TimeoutGateway};

use async_trait::async_trait;
use shared::dto::wallet::ProviderDescriptor;

use crate::constants::KNOWN_PROVIDERS;
use crate::error::GatewayError;

#[async_trait(?Send)]
pub trait WalletGateway {
    /// Providers the library reports. An empty list is a valid answer.
    async fn list_providers(&self) -> Result<Vec<ProviderDescriptor>, GatewayError>;

    /// Bind to `provider_id` and return its address.
    async fn connect_by_id(&self, provider_id: &str) -> Result<String, GatewayError>;

    /// Run the library's interactive selector and return the chosen address.
    ///
    /// Closing the selector without a choice is [`GatewayError::cancelled`].
    async fn connect_via_selector(&self) -> Result<String, GatewayError>;

    /// Sign a transaction envelope (XDR) with `address`; returns the signed XDR.
    async fn sign_transaction(&self, xdr: &str, address: &str) -> Result<String, GatewayError>;
}

/// Providers the UI advertises, each with an icon hint.
pub fn known_providers() -> Vec<ProviderDescriptor> {
    KNOWN_PROVIDERS
        .iter()
        .map(|(id, name, icon)| ProviderDescriptor {
            icon: Some(icon.to_string()),
            ..ProviderDescriptor::new(*id, *name, false)
        })
        .collect()
}

/// Known providers with availability taken from `reported`, followed by any
/// reported provider the catalog does not list.
pub fn merge_with_known(reported: &[ProviderDescriptor]) -> Vec<ProviderDescriptor> {
    let mut merged = known_providers();

    for provider in merged.iter_mut() {
        if let Some(found) = reported.iter().find(|r| r.id == provider.id) {
            provider.is_available = found.is_available;
            if found.url.is_some() {
                provider.url = found.url.clone();
            }
        }
    }

    for provider in reported {
        if !merged.iter().any(|m| m.id == provider.id) {
            merged.push(provider.clone());
        }
    }

    merged
}
