//! Page modules

pub mod connect;
pub mod transaction_sign;

pub use connect::ConnectPage;
pub use transaction_sign::TransactionSignPage;
