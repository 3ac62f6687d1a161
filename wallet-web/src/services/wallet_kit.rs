//! Stellar Wallets Kit Integration via wasm-bindgen
//!
//! The kit is loaded by the host page and exposed as `window.StellarWalletsKit`.
//! This module wraps the handful of kit calls the app needs in small JavaScript
//! helpers and implements [`WalletGateway`] on top of them.

use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use lib_wallet::{GatewayError, WalletConfig, WalletGateway};
use shared::dto::wallet::ProviderDescriptor;

// ============================================================================
// KIT BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function kitModule() {
    const lib = window.StellarWalletsKit;
    if (!lib || typeof lib.StellarWalletsKit !== 'function') {
        throw new Error('Stellar Wallets Kit is not loaded');
    }
    return lib;
}

export function createKit(network, walletId) {
    const lib = kitModule();
    return new lib.StellarWalletsKit({
        network,
        selectedWalletId: walletId,
        modules: lib.allowAllModules(),
    });
}

export async function supportedWallets(kit) {
    const wallets = await kit.getSupportedWallets();
    return wallets.map(w => ({
        id: w.id,
        name: w.name,
        isAvailable: !!w.isAvailable,
        icon: w.icon || null,
        url: w.url || null,
    }));
}

export async function connectById(kit, walletId) {
    kit.setWallet(walletId);
    const { address } = await kit.getAddress();
    return address || null;
}

export function openSelector(kit, modalTitle, notAvailableText) {
    return new Promise((resolve, reject) => {
        let selected = false;
        Promise.resolve(kit.openModal({
            modalTitle,
            notAvailableText,
            onWalletSelected: async (option) => {
                selected = true;
                try {
                    kit.setWallet(option.id);
                    const { address } = await kit.getAddress();
                    resolve({ status: 'selected', walletId: option.id, address: address || null });
                } catch (e) {
                    reject(e);
                }
            },
            onClosed: (err) => {
                if (!selected) {
                    resolve({ status: 'closed', reason: err ? String(err.message || err) : null });
                }
            },
        })).catch(reject);
    });
}

export async function signWithKit(kit, xdr, networkPassphrase, address) {
    const { signedTxXdr } = await kit.signTransaction(xdr, { networkPassphrase, address });
    return signedTxXdr || null;
}
")]
extern "C" {
    /// Construct a kit bound to `network` with `walletId` preselected
    #[wasm_bindgen(catch)]
    fn createKit(network: &str, wallet_id: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn supportedWallets(kit: &JsValue) -> Result<JsValue, JsValue>;

    /// Select `walletId` and ask it for its address (null if none)
    #[wasm_bindgen(catch)]
    async fn connectById(kit: &JsValue, wallet_id: &str) -> Result<JsValue, JsValue>;

    /// Open the kit's modal; resolves with a `SelectorOutcome`
    #[wasm_bindgen(catch)]
    async fn openSelector(
        kit: &JsValue,
        modal_title: &str,
        not_available_text: &str,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn signWithKit(
        kit: &JsValue,
        xdr: &str,
        network_passphrase: &str,
        address: &str,
    ) -> Result<JsValue, JsValue>;
}

/// Best-effort text of a thrown JavaScript value.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }

    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// What the selector modal resolved with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum SelectorOutcome {
    Selected {
        #[serde(rename = "walletId")]
        wallet_id: String,
        address: Option<String>,
    },
    Closed {
        #[serde(default)]
        reason: Option<String>,
    },
}

impl SelectorOutcome {
    fn into_address(self) -> Result<String, GatewayError> {
        match self {
            SelectorOutcome::Selected { wallet_id, address } => {
                log::debug!("Selector picked {}", wallet_id);
                non_empty_address(address)
            }
            SelectorOutcome::Closed { reason } => {
                if let Some(reason) = reason {
                    log::debug!("Selector closed: {}", reason);
                }
                Err(GatewayError::cancelled())
            }
        }
    }
}

fn non_empty_address(address: Option<String>) -> Result<String, GatewayError> {
    address
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(GatewayError::no_address)
}

// ============================================================================
// GATEWAY
// ============================================================================

/// [`WalletGateway`] over the Stellar Wallets Kit.
///
/// The kit instance is created on first use so a page without the kit script
/// still renders; every call then fails with an `Unavailable` error.
pub struct KitGateway {
    config: WalletConfig,
    kit: OnceCell<JsValue>,
}

impl KitGateway {
    pub fn new(config: WalletConfig) -> Self {
        Self {
            config,
            kit: OnceCell::new(),
        }
    }

    fn kit(&self) -> Result<&JsValue, GatewayError> {
        self.kit.get_or_try_init(|| {
            log::info!(
                "Creating wallet kit for '{}' (default wallet: {})",
                self.config.network.passphrase(),
                self.config.default_provider_id
            );
            createKit(
                self.config.network.passphrase(),
                &self.config.default_provider_id,
            )
            .map_err(|e| GatewayError::unavailable(js_error_message(&e)))
        })
    }
}

#[async_trait(?Send)]
impl WalletGateway for KitGateway {
    async fn list_providers(&self) -> Result<Vec<ProviderDescriptor>, GatewayError> {
        let kit = self.kit()?;
        let value = supportedWallets(kit)
            .await
            .map_err(|e| GatewayError::library(js_error_message(&e)))?;

        serde_wasm_bindgen::from_value(value)
            .map_err(|e| GatewayError::library(format!("Unexpected wallet list: {}", e)))
    }

    async fn connect_by_id(&self, provider_id: &str) -> Result<String, GatewayError> {
        let kit = self.kit()?;
        let value = connectById(kit, provider_id)
            .await
            .map_err(|e| GatewayError::library(js_error_message(&e)))?;

        non_empty_address(value.as_string())
    }

    async fn connect_via_selector(&self) -> Result<String, GatewayError> {
        let kit = self.kit()?;
        let value = openSelector(kit, &self.config.modal_title, &self.config.not_available_text)
            .await
            .map_err(|e| GatewayError::library(js_error_message(&e)))?;

        let outcome: SelectorOutcome = serde_wasm_bindgen::from_value(value)
            .map_err(|e| GatewayError::library(format!("Unexpected selector result: {}", e)))?;
        outcome.into_address()
    }

    async fn sign_transaction(&self, xdr: &str, address: &str) -> Result<String, GatewayError> {
        let kit = self.kit()?;
        let value = signWithKit(kit, xdr, self.config.network.passphrase(), address)
            .await
            .map_err(|e| GatewayError::library(js_error_message(&e)))?;

        value
            .as_string()
            .filter(|signed| !signed.is_empty())
            .ok_or_else(GatewayError::not_signed)
    }
}
