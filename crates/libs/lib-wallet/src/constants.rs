//! Default values and user-facing text

/// `localStorage` key holding the serialized connection record.
pub const STORAGE_KEY: &str = "artchain_wallet";

pub const DEFAULT_PROVIDER_ID: &str = "freighter";

/// Provider name recorded when the user connects through the selector flow.
pub const SELECTOR_PROVIDER_NAME: &str = "Stellar Wallet";

pub const MODAL_TITLE: &str = "Connect Your Stellar Wallet";
pub const NOT_AVAILABLE_TEXT: &str = "Wallet not installed";

/// Two minutes: long enough for a hardware wallet or a mobile bridge.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 120_000;

// Network passphrases
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";
pub const PUBLIC_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";
pub const FUTURENET_PASSPHRASE: &str = "Test SDF Future Network ; October 2022";

// Toast text
pub const TOAST_CONNECTED_TITLE: &str = "Wallet Connected";
pub const TOAST_CONNECTED_GENERIC: &str = "Successfully connected wallet";
pub const TOAST_FAILED_TITLE: &str = "Connection Failed";
pub const TOAST_FAILED_FALLBACK: &str = "Failed to connect wallet. Please try again.";
pub const TOAST_DISCONNECTED_TITLE: &str = "Wallet Disconnected";
pub const TOAST_DISCONNECTED_TEXT: &str = "Your wallet has been disconnected.";

/// Providers the kit ships modules for: (id, name, icon hint).
pub const KNOWN_PROVIDERS: &[(&str, &str, &str)] = &[
    ("freighter", "Freighter", "wallet"),
    ("xbull", "xBull", "bolt"),
    ("albedo", "Albedo", "key"),
    ("walletconnect", "WalletConnect", "link"),
    ("rabet", "Rabet", "shield"),
];
