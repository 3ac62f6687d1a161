//! UI Components

pub mod navbar;
pub mod toast;
pub mod wallet_modal;

pub use navbar::Navbar;
pub use toast::Toaster;
pub use wallet_modal::{ProviderList, WalletModal};
