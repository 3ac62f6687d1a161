//! # UI Notifications
//!
//! The manager never returns errors to the UI as something to render; it pushes
//! state and toasts through a [`ConnectionObserver`]. The web front-end
//! implements the observer with reactive signals.

use crate::constants::{
    TOAST_CONNECTED_GENERIC, TOAST_CONNECTED_TITLE, TOAST_DISCONNECTED_TEXT,
    TOAST_DISCONNECTED_TITLE, TOAST_FAILED_FALLBACK, TOAST_FAILED_TITLE,
};
use crate::error::WalletError;
use crate::record::ConnectionRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A user-visible toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Notification {
    /// `provider_name` is `None` for the selector flow.
    pub fn connected(provider_name: Option<&str>) -> Self {
        let description = match provider_name {
            Some(name) => format!("Successfully connected to {}", name),
            None => TOAST_CONNECTED_GENERIC.to_string(),
        };

        Self {
            title: TOAST_CONNECTED_TITLE.to_string(),
            description,
            variant: ToastVariant::Default,
        }
    }

    pub fn disconnected() -> Self {
        Self {
            title: TOAST_DISCONNECTED_TITLE.to_string(),
            description: TOAST_DISCONNECTED_TEXT.to_string(),
            variant: ToastVariant::Default,
        }
    }

    pub fn connection_failed(error: &WalletError) -> Self {
        let message = error.to_string();
        let description = if message.trim().is_empty() {
            TOAST_FAILED_FALLBACK.to_string()
        } else {
            message
        };

        Self {
            title: TOAST_FAILED_TITLE.to_string(),
            description,
            variant: ToastVariant::Destructive,
        }
    }
}

/// Receives everything the UI needs to re-render.
pub trait ConnectionObserver {
    fn record_changed(&self, _record: &ConnectionRecord) {}

    fn loading_changed(&self, _loading: bool) {}

    fn notify(&self, _notification: Notification) {}
}
