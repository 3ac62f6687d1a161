//! # Connection State Manager
//!
//! Single source of truth for "which wallet is connected". The manager
//!
//! - hydrates the record from storage once ([`ConnectionManager::initialize`])
//! - connects through the gateway, either via the selector flow or directly to
//!   a named provider
//! - disconnects, clearing memory and storage
//! - signs transactions with the connected address
//!
//! ## Ordering
//!
//! Every connect attempt and every disconnect advances a generation counter. A
//! connect captures the generation it started with and, when the gateway
//! answers, drops its result if the counter has moved on. The last *started*
//! operation therefore wins, and a disconnect is never undone by a connect that
//! was already in flight.
//!
//! ## Loading
//!
//! Loading is `true` while at least one connect is in flight. The count is held
//! by a drop guard, so it is released on every exit path, including a caller
//! dropping the future.
//!
//! ## Errors
//!
//! Operations return `Result` for callers that care, but the UI contract is the
//! [`ConnectionObserver`]: record changes, loading changes and toasts. User
//! cancellation on the selector path produces no toast.

#[cfg(test)]
mod tests;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shared::dto::wallet::ProviderDescriptor;

use crate::config::WalletConfig;
use crate::error::{GatewayError, Result, WalletError};
use crate::gateway::WalletGateway;
use crate::notify::{ConnectionObserver, Notification};
use crate::record::{reduce, ConnectionRecord, PersistEffect, Transition};
use crate::storage::{ConnectionStore, KeyValueStore};

/// How a failed connect is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailurePolicy {
    /// Cancellations stay silent (selector flow).
    SuppressCancellation,
    /// Every failure raises a toast (direct provider connect).
    SurfaceAll,
}

pub struct ConnectionManager<G, S, O> {
    gateway: Rc<G>,
    store: ConnectionStore<S>,
    observer: O,
    config: WalletConfig,
    record: RefCell<ConnectionRecord>,
    generation: Cell<u64>,
    in_flight: Cell<u32>,
    initialized: Cell<bool>,
}

impl<G, S, O> ConnectionManager<G, S, O>
where
    G: WalletGateway,
    S: KeyValueStore,
    O: ConnectionObserver,
{
    pub fn new(gateway: Rc<G>, store: S, observer: O, config: WalletConfig) -> Self {
        let store = ConnectionStore::new(store, config.storage_key.clone());
        Self {
            gateway,
            store,
            observer,
            config,
            record: RefCell::new(ConnectionRecord::empty()),
            generation: Cell::new(0),
            in_flight: Cell::new(0),
            initialized: Cell::new(false),
        }
    }

    pub fn record(&self) -> ConnectionRecord {
        self.record.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.record.borrow().is_connected()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.get() > 0
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    pub fn gateway(&self) -> &Rc<G> {
        &self.gateway
    }

    /// Adopt the persisted record, if any. Runs once; later calls are no-ops.
    ///
    /// A stored value that does not parse is removed and the record stays empty.
    pub fn initialize(&self) {
        if self.initialized.replace(true) {
            return;
        }

        let raw = self.store.read_raw();
        let had_entry = raw.is_some();
        let effect = self.commit(Transition::Hydrate(raw));

        if effect == PersistEffect::Remove {
            log::warn!(
                "Discarded corrupt wallet connection stored under '{}'",
                self.store.key()
            );
        } else if had_entry {
            let record = self.record.borrow();
            log::info!(
                "Restored wallet connection: {}",
                record.display_address().unwrap_or("disconnected")
            );
        }
    }

    /// Connect through the library's selection flow.
    pub async fn connect_via_selector(&self) -> Result<ConnectionRecord> {
        let _loading = self.begin_loading();
        let generation = self.advance_generation();
        log::info!("Opening wallet selector");

        let outcome = self.gateway.connect_via_selector().await;
        self.settle(
            generation,
            outcome,
            None,
            self.config.selector_provider_name.clone(),
            FailurePolicy::SuppressCancellation,
        )
    }

    /// Connect straight to `provider_id`, skipping the selector.
    pub async fn connect_specific(
        &self,
        provider_id: &str,
        provider_name: &str,
    ) -> Result<ConnectionRecord> {
        let _loading = self.begin_loading();
        let generation = self.advance_generation();
        log::info!("Connecting to {}", provider_name);

        let outcome = self.gateway.connect_by_id(provider_id).await;
        self.settle(
            generation,
            outcome,
            Some(provider_id.to_string()),
            provider_name.to_string(),
            FailurePolicy::SurfaceAll,
        )
    }

    /// Forget the connection. Infallible; in-flight connects become stale.
    pub fn disconnect(&self) {
        self.advance_generation();
        self.commit(Transition::Disconnect);
        log::info!("Wallet disconnected");
        self.observer.notify(Notification::disconnected());
    }

    /// Providers the library reports; failures degrade to an empty list.
    pub async fn providers(&self) -> Vec<ProviderDescriptor> {
        match self.gateway.list_providers().await {
            Ok(providers) => providers,
            Err(e) => {
                log::warn!("Could not list wallet providers: {}", e);
                Vec::new()
            }
        }
    }

    /// Sign `xdr` with the connected wallet.
    pub async fn sign_transaction(&self, xdr: &str) -> Result<String> {
        let address = self
            .record
            .borrow()
            .address()
            .map(str::to_string)
            .ok_or(WalletError::NotConnected)?;

        let signed = self.gateway.sign_transaction(xdr, &address).await?;
        if signed.trim().is_empty() {
            return Err(GatewayError::not_signed().into());
        }

        log::info!("Transaction signed");
        Ok(signed)
    }

    fn settle(
        &self,
        generation: u64,
        outcome: std::result::Result<String, GatewayError>,
        provider_id: Option<String>,
        provider_name: String,
        policy: FailurePolicy,
    ) -> Result<ConnectionRecord> {
        if generation != self.generation.get() {
            log::debug!(
                "Discarding connect result from generation {} (current {})",
                generation,
                self.generation.get()
            );
            return Err(WalletError::Superseded);
        }

        let greeting = provider_id.as_ref().map(|_| provider_name.clone());
        let connected = outcome
            .map_err(WalletError::from)
            .and_then(|address| ConnectionRecord::connected(address, provider_id, Some(provider_name)));

        match connected {
            Ok(record) => {
                self.commit(Transition::Connected(record.clone()));
                log::info!(
                    "Wallet connected: {}",
                    record.display_address().unwrap_or_default()
                );
                self.observer.notify(Notification::connected(greeting.as_deref()));
                Ok(record)
            }
            Err(e) if policy == FailurePolicy::SuppressCancellation && e.is_cancellation() => {
                log::info!("Wallet selection dismissed: {}", e);
                Err(e)
            }
            Err(e) => {
                log::error!("Wallet connection error: {}", e);
                self.observer.notify(Notification::connection_failed(&e));
                Err(e)
            }
        }
    }

    /// Reduce, persist, publish. Returns the storage effect that was applied.
    fn commit(&self, transition: Transition) -> PersistEffect {
        let (next, effect) = reduce(&self.record.borrow(), transition);

        if let Err(e) = self.store.apply(&effect) {
            log::warn!("Could not persist wallet connection: {}", e);
        }

        *self.record.borrow_mut() = next.clone();
        self.observer.record_changed(&next);
        effect
    }

    fn advance_generation(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    fn begin_loading(&self) -> LoadingGuard<'_, G, S, O> {
        let previous = self.in_flight.get();
        self.in_flight.set(previous + 1);
        if previous == 0 {
            self.observer.loading_changed(true);
        }
        LoadingGuard { manager: self }
    }
}

/// Holds one unit of the in-flight count until dropped.
struct LoadingGuard<'a, G, S, O>
where
    G: WalletGateway,
    S: KeyValueStore,
    O: ConnectionObserver,
{
    manager: &'a ConnectionManager<G, S, O>,
}

impl<G, S, O> Drop for LoadingGuard<'_, G, S, O>
where
    G: WalletGateway,
    S: KeyValueStore,
    O: ConnectionObserver,
{
    fn drop(&mut self) {
        let remaining = self.manager.in_flight.get().saturating_sub(1);
        self.manager.in_flight.set(remaining);
        if remaining == 0 {
            self.manager.observer.loading_changed(false);
        }
    }
}
