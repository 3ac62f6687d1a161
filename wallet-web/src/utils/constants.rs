//! Application constants

/// `id` of the optional `<script type="application/json">` holding a
/// `WalletConfig` override.
pub const CONFIG_ELEMENT_ID: &str = "wallet-config";

/// Element shown until the WASM bundle mounts.
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

// UI constants
pub const TOAST_DURATION_MS: u32 = 5000;
pub const APP_NAME: &str = "ArtChain";

// Button labels
pub const CONNECT_LABEL: &str = "Connect Wallet";
pub const CONNECTING_LABEL: &str = "Connecting...";
