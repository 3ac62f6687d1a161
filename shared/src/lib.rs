//! # Shared Wallet Types
//!
//! Data shapes that cross a boundary the Rust code does not own:
//!
//! - **[`dto::wallet::StoredConnection`]**: the JSON object persisted in browser
//!   `localStorage` between page loads
//! - **[`dto::wallet::ProviderDescriptor`]**: a wallet provider as reported by
//!   the Stellar Wallets Kit
//! - **[`utils`]**: address formatting for display
//!
//! ## Wire Format
//!
//! Both DTOs use **camelCase** field names because they are read and written by
//! JavaScript (the kit on one side, earlier versions of the web client on the
//! other):
//!
//! ```text
//! {
//!   "isConnected": true,
//!   "address": "GCFX...WXYZ",
//!   "walletId": "freighter",
//!   "walletName": "Freighter"
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::wallet::StoredConnection;
//! use shared::utils::truncate_address;
//!
//! let raw = r#"{"isConnected":true,"address":"GABC123","walletId":"freighter","walletName":"Freighter"}"#;
//! let stored: StoredConnection = serde_json::from_str(raw).unwrap();
//! assert_eq!(stored.wallet_id.as_deref(), Some("freighter"));
//! assert_eq!(truncate_address("GABC123"), "GABC123");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
