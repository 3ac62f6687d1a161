//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for rendering Stellar account addresses (56-character `G...` keys):
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - [`format_address`] with the 4/4 split used across the UI
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB";
//! assert_eq!(format_address(address, 4, 4), "GCFX...BJZB");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len` characters it is
/// returned as-is. Lengths are counted in characters, so a corrupted value read
/// back from storage cannot split a multi-byte character.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB";
/// assert_eq!(format_address(addr, 4, 4), "GCFX...BJZB");
/// assert_eq!(format_address(addr, 6, 4), "GCFXHS...BJZB");
/// assert_eq!(format_address("GABC123", 4, 4), "GABC123");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with a 4-character prefix and suffix.
///
/// This is the display form stored in a connection record.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB";
/// assert_eq!(truncate_address(addr), "GCFX...BJZB");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}
