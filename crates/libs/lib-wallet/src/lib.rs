//! # Wallet Connection Library
//!
//! Connection state, persistence and gateway abstraction for the browser wallet
//! flow. Nothing in this crate touches the DOM or JavaScript; the web front-end
//! plugs in a concrete [`gateway::WalletGateway`] and [`storage::KeyValueStore`].
//!
//! ```text
//! UI ──► ConnectionManager ──► WalletGateway ──► Stellar Wallets Kit
//!            │      ▲
//!            │      └── ConnectionObserver (record, loading, toasts)
//!            ▼
//!      ConnectionStore ──► KeyValueStore (localStorage)
//! ```
//!
//! The crate is single-threaded by construction: futures are `?Send` and state
//! lives in `Cell`/`RefCell`. Ordering between overlapping operations is kept by
//! a generation counter in [`manager::ConnectionManager`].

pub mod config;
pub mod constants;
pub mod error;
pub mod gateway;
pub mod manager;
pub mod notify;
pub mod record;
pub mod storage;

pub use config::{StellarNetwork, WalletConfig};
pub use error::{GatewayError, GatewayErrorKind, Result, StorageError, WalletError};
pub use gateway::{Timer, TimeoutGateway, WalletGateway};
pub use manager::ConnectionManager;
pub use notify::{ConnectionObserver, Notification, ToastVariant};
pub use record::{ConnectionRecord, PersistEffect, Transition};
pub use storage::{ConnectionStore, KeyValueStore, MemoryStore};
