//! Wallet state management
//!
//! The [`ConnectionManager`] owns the connection; this module mirrors what it
//! publishes into reactive signals and exposes the manager's operations to
//! components through [`WalletContext`].

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_wallet::gateway::merge_with_known;
use lib_wallet::{
    ConnectionManager, ConnectionObserver, ConnectionRecord, Notification, TimeoutGateway,
    WalletConfig,
};
use shared::dto::wallet::ProviderDescriptor;

use crate::services::{AppStore, GlooTimer, KitGateway};
use crate::utils::constants::TOAST_DURATION_MS;

pub type AppGateway = TimeoutGateway<KitGateway, GlooTimer>;
pub type AppManager = ConnectionManager<AppGateway, AppStore, SignalObserver>;

/// A toast currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub notification: Notification,
}

/// Writes manager events into signals.
#[derive(Clone, Copy)]
pub struct SignalObserver {
    record: RwSignal<ConnectionRecord>,
    loading: RwSignal<bool>,
    toasts: RwSignal<Vec<Toast>>,
}

impl ConnectionObserver for SignalObserver {
    fn record_changed(&self, record: &ConnectionRecord) {
        self.record.set(record.clone());
    }

    fn loading_changed(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn notify(&self, notification: Notification) {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id: id.clone(),
                notification,
            })
        });

        let toasts = self.toasts;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        });
    }
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub record: RwSignal<ConnectionRecord>,
    pub loading: RwSignal<bool>,
    pub toasts: RwSignal<Vec<Toast>>,
    /// Known providers merged with what the kit reports.
    pub providers: RwSignal<Vec<ProviderDescriptor>>,
    manager: StoredValue<Rc<AppManager>, LocalStorage>,
}

impl WalletContext {
    pub fn new(config: WalletConfig) -> Self {
        let record = RwSignal::new(ConnectionRecord::empty());
        let loading = RwSignal::new(false);
        let toasts = RwSignal::new(Vec::new());
        let providers = RwSignal::new(merge_with_known(&[]));

        let observer = SignalObserver {
            record,
            loading,
            toasts,
        };
        let gateway = TimeoutGateway::new(
            KitGateway::new(config.clone()),
            GlooTimer,
            config.request_timeout(),
        );
        let manager = ConnectionManager::new(Rc::new(gateway), AppStore::open(), observer, config);
        manager.initialize();

        Self {
            record,
            loading,
            toasts,
            providers,
            manager: StoredValue::new_local(Rc::new(manager)),
        }
    }

    fn manager(&self) -> Rc<AppManager> {
        self.manager.get_value()
    }

    pub fn is_connected(&self) -> bool {
        self.record.with(|record| record.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.record.with(|record| record.address().map(str::to_string))
    }

    pub fn display_address(&self) -> Option<String> {
        self.record
            .with(|record| record.display_address().map(str::to_string))
    }

    pub fn provider_name(&self) -> Option<String> {
        self.record
            .with(|record| record.provider_name().map(str::to_string))
    }

    pub async fn connect_via_selector(self) -> lib_wallet::Result<ConnectionRecord> {
        self.manager().connect_via_selector().await
    }

    pub async fn connect_specific(
        self,
        provider_id: String,
        provider_name: String,
    ) -> lib_wallet::Result<ConnectionRecord> {
        self.manager()
            .connect_specific(&provider_id, &provider_name)
            .await
    }

    pub fn disconnect(&self) {
        self.manager().disconnect();
    }

    pub async fn sign_transaction(self, xdr: String) -> lib_wallet::Result<String> {
        self.manager().sign_transaction(&xdr).await
    }

    /// Ask the kit which providers are installed and refresh `providers`.
    pub fn refresh_providers(&self) {
        let manager = self.manager();
        let providers = self.providers;
        leptos::task::spawn_local(async move {
            let reported = manager.providers().await;
            log::debug!("Kit reported {} wallet providers", reported.len());
            providers.try_set(merge_with_known(&reported));
        });
    }

    pub fn dismiss_toast(&self, id: &str) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

pub fn provide_wallet_context(config: WalletConfig) -> WalletContext {
    let context = WalletContext::new(config);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
