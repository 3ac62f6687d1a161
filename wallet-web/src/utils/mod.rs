//! Utilities

pub mod config;
pub mod constants;
