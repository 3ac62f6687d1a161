//! # Data Transfer Objects (DTOs)
//!
//! - [`wallet`] - Persisted connection record and provider descriptors
//!
//! All DTOs implement both `Serialize` and `Deserialize`. Field names are
//! camelCase on the wire; optional fields deserialize to `None` when absent.

pub mod wallet;

pub use wallet::*;
