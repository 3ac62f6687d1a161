use std::cell::RefCell;
use std::collections::VecDeque;
use std::pin::pin;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::poll;
use shared::dto::wallet::ProviderDescriptor;
use shared::utils::truncate_address;

use super::*;
use crate::error::GatewayErrorKind;
use crate::notify::ToastVariant;
use crate::storage::{KeyValueStore, MemoryStore};

const KEY: &str = "artchain_wallet";
const ADDR: &str = "GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB";
const OTHER_ADDR: &str = "GDQNY3PBOJOKYZSRMK2S7LHHGWZIUISD4QORETLMXEWXBI7KFZZMKTL3";

type Reply = std::result::Result<String, GatewayError>;

enum Scripted {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

/// Gateway whose connect answers are scripted in order.
#[derive(Default)]
struct FakeGateway {
    replies: RefCell<VecDeque<Scripted>>,
    providers: RefCell<Option<std::result::Result<Vec<ProviderDescriptor>, GatewayError>>>,
    signed: RefCell<Option<Reply>>,
    calls: RefCell<Vec<String>>,
}

impl FakeGateway {
    fn answering(reply: Reply) -> Self {
        let gateway = Self::default();
        gateway.push(reply);
        gateway
    }

    fn push(&self, reply: Reply) {
        self.replies.borrow_mut().push_back(Scripted::Ready(reply));
    }

    fn defer(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Scripted::Deferred(rx));
        tx
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    async fn next_reply(&self) -> Reply {
        let scripted = self.replies.borrow_mut().pop_front();
        match scripted {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(GatewayError::library("reply dropped"))),
            None => Err(GatewayError::library("no scripted reply")),
        }
    }
}

#[async_trait(?Send)]
impl WalletGateway for FakeGateway {
    async fn list_providers(&self) -> std::result::Result<Vec<ProviderDescriptor>, GatewayError> {
        self.providers.borrow_mut().take().unwrap_or_else(|| Ok(vec![]))
    }

    async fn connect_by_id(&self, provider_id: &str) -> Reply {
        self.calls.borrow_mut().push(format!("connect_by_id:{}", provider_id));
        self.next_reply().await
    }

    async fn connect_via_selector(&self) -> Reply {
        self.calls.borrow_mut().push("connect_via_selector".to_string());
        self.next_reply().await
    }

    async fn sign_transaction(&self, xdr: &str, address: &str) -> Reply {
        self.calls.borrow_mut().push(format!("sign:{}:{}", xdr, address));
        self.signed
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(GatewayError::not_signed()))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Record(ConnectionRecord),
    Loading(bool),
    Toast(Notification),
}

#[derive(Clone, Default)]
struct RecordingObserver {
    events: Rc<RefCell<Vec<Event>>>,
}

impl RecordingObserver {
    fn toasts(&self) -> Vec<Notification> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Toast(n) => Some(n.clone()),
                _ => None,
            })
            .collect()
    }

    fn loading(&self) -> Vec<bool> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Loading(l) => Some(*l),
                _ => None,
            })
            .collect()
    }

    fn last_record(&self) -> Option<ConnectionRecord> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            Event::Record(r) => Some(r.clone()),
            _ => None,
        })
    }
}

impl ConnectionObserver for RecordingObserver {
    fn record_changed(&self, record: &ConnectionRecord) {
        self.events.borrow_mut().push(Event::Record(record.clone()));
    }

    fn loading_changed(&self, loading: bool) {
        self.events.borrow_mut().push(Event::Loading(loading));
    }

    fn notify(&self, notification: Notification) {
        self.events.borrow_mut().push(Event::Toast(notification));
    }
}

type TestManager = ConnectionManager<FakeGateway, MemoryStore, RecordingObserver>;

fn manager_with(gateway: FakeGateway, store: MemoryStore) -> (TestManager, RecordingObserver) {
    let observer = RecordingObserver::default();
    let manager = ConnectionManager::new(
        Rc::new(gateway),
        store,
        observer.clone(),
        WalletConfig::default(),
    );
    manager.initialize();
    (manager, observer)
}

fn stored_freighter(address: &str) -> String {
    format!(
        r#"{{"isConnected":true,"address":"{}","walletId":"freighter","walletName":"Freighter"}}"#,
        address
    )
}

// ========== Initialize ==========

#[test]
fn test_initialize_restores_stored_record() {
    let store = MemoryStore::with_entry(KEY, &stored_freighter("GABC123"));
    let (manager, observer) = manager_with(FakeGateway::default(), store.clone());

    let record = manager.record();
    assert!(record.is_connected());
    assert_eq!(record.address(), Some("GABC123"));
    assert_eq!(record.provider_id(), Some("freighter"));
    assert_eq!(record.provider_name(), Some("Freighter"));
    assert_eq!(record.display_address(), Some(truncate_address("GABC123").as_str()));
    assert_eq!(observer.last_record(), Some(record));
    assert!(store.contains(KEY));
}

#[test]
fn test_initialize_discards_corrupt_entry() {
    let store = MemoryStore::with_entry(KEY, "{bad");
    let (manager, observer) = manager_with(FakeGateway::default(), store.clone());

    assert_eq!(manager.record(), ConnectionRecord::empty());
    assert!(!store.contains(KEY));
    assert!(observer.toasts().is_empty());
}

#[test]
fn test_initialize_without_entry_stays_empty() {
    let store = MemoryStore::new();
    let (manager, _observer) = manager_with(FakeGateway::default(), store.clone());

    assert_eq!(manager.record(), ConnectionRecord::empty());
    assert!(!store.contains(KEY));
}

#[test]
fn test_initialize_runs_once() {
    let store = MemoryStore::new();
    let (manager, _observer) = manager_with(FakeGateway::default(), store.clone());

    store.set(KEY, &stored_freighter(ADDR)).unwrap();
    manager.initialize();

    assert!(!manager.is_connected());
}

// ========== Connect specific ==========

#[tokio::test]
async fn test_connect_specific_success_persists_and_notifies() {
    let store = MemoryStore::new();
    let (manager, observer) = manager_with(FakeGateway::answering(Ok(ADDR.to_string())), store.clone());

    let record = manager.connect_specific("freighter", "Freighter").await.unwrap();

    assert_eq!(record.address(), Some(ADDR));
    assert_eq!(record.provider_id(), Some("freighter"));
    assert_eq!(record.display_address(), Some("GCFX...BJZB"));
    assert_eq!(manager.record(), record);
    assert_eq!(manager.gateway().calls(), vec!["connect_by_id:freighter"]);

    let stored = ConnectionRecord::parse(&store.peek(KEY).unwrap()).unwrap();
    assert_eq!(stored, record);

    let toasts = observer.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Wallet Connected");
    assert_eq!(toasts[0].description, "Successfully connected to Freighter");

    assert_eq!(observer.loading(), vec![true, false]);
    assert!(!manager.is_loading());
}

#[tokio::test]
async fn test_connect_specific_empty_address_leaves_state_unchanged() {
    let store = MemoryStore::with_entry(KEY, &stored_freighter(OTHER_ADDR));
    let (manager, observer) = manager_with(FakeGateway::answering(Ok(String::new())), store.clone());
    let before = manager.record();

    let result = manager.connect_specific("freighter", "Freighter").await;

    assert_eq!(result, Err(WalletError::EmptyAddress));
    assert_eq!(manager.record(), before);
    assert_eq!(store.peek(KEY), Some(stored_freighter(OTHER_ADDR)));
    assert!(!manager.is_loading());
    assert_eq!(observer.loading(), vec![true, false]);

    let toasts = observer.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].variant, ToastVariant::Destructive);
    assert_eq!(toasts[0].description, "Failed to retrieve wallet address");
}

#[tokio::test]
async fn test_connect_specific_never_connects_on_empty_address() {
    let (manager, _observer) = manager_with(FakeGateway::answering(Ok("  ".to_string())), MemoryStore::new());

    assert!(manager.connect_specific("xbull", "xBull").await.is_err());
    assert!(!manager.is_connected());
}

#[tokio::test]
async fn test_connect_specific_surfaces_cancellation() {
    let (manager, observer) = manager_with(FakeGateway::answering(Err(GatewayError::cancelled())), MemoryStore::new());

    let err = manager.connect_specific("freighter", "Freighter").await.unwrap_err();

    assert!(err.is_cancellation());
    assert_eq!(observer.toasts().len(), 1);
    assert_eq!(observer.toasts()[0].title, "Connection Failed");
}

// ========== Connect via selector ==========

#[tokio::test]
async fn test_selector_success_uses_generic_provider() {
    let store = MemoryStore::new();
    let (manager, observer) = manager_with(FakeGateway::answering(Ok(ADDR.to_string())), store.clone());

    let record = manager.connect_via_selector().await.unwrap();

    assert_eq!(record.provider_id(), None);
    assert_eq!(record.provider_name(), Some("Stellar Wallet"));
    assert!(store.contains(KEY));
    assert_eq!(observer.toasts()[0].description, "Successfully connected wallet");
    assert_eq!(observer.loading(), vec![true, false]);
}

#[tokio::test]
async fn test_selector_cancellation_is_silent() {
    let (manager, observer) = manager_with(FakeGateway::answering(Err(GatewayError::cancelled())), MemoryStore::new());

    let err = manager.connect_via_selector().await.unwrap_err();

    assert!(err.is_cancellation());
    assert!(observer.toasts().is_empty());
    assert_eq!(observer.loading(), vec![true, false]);
    assert!(!manager.is_connected());
}

#[tokio::test]
async fn test_selector_timeout_is_silent() {
    let (manager, observer) = manager_with(FakeGateway::answering(Err(GatewayError::timed_out(120_000))), MemoryStore::new());

    assert!(manager.connect_via_selector().await.is_err());
    assert!(observer.toasts().is_empty());
    assert!(!manager.is_loading());
}

#[tokio::test]
async fn test_selector_other_failure_is_surfaced() {
    let (manager, observer) = manager_with(
        FakeGateway::answering(Err(GatewayError::library("Freighter is locked"))),
        MemoryStore::new(),
    );

    let err = manager.connect_via_selector().await.unwrap_err();

    assert!(matches!(&err, WalletError::Gateway(e) if e.kind() == GatewayErrorKind::Library));
    let toasts = observer.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].description, "Freighter is locked");
    assert_eq!(observer.loading(), vec![true, false]);
}

// ========== Disconnect ==========

#[tokio::test]
async fn test_disconnect_resets_everything() {
    let store = MemoryStore::new();
    let (manager, observer) = manager_with(FakeGateway::answering(Ok(ADDR.to_string())), store.clone());
    manager.connect_specific("freighter", "Freighter").await.unwrap();

    manager.disconnect();

    let record = manager.record();
    assert!(!record.is_connected());
    assert_eq!(record.address(), None);
    assert_eq!(record.provider_id(), None);
    assert_eq!(record.provider_name(), None);
    assert_eq!(record.display_address(), None);
    assert!(!store.contains(KEY));
    assert_eq!(observer.toasts().last().map(|t| t.title.as_str()), Some("Wallet Disconnected"));
}

#[test]
fn test_disconnect_when_already_disconnected() {
    let store = MemoryStore::new();
    let (manager, observer) = manager_with(FakeGateway::default(), store.clone());

    manager.disconnect();
    manager.disconnect();

    assert_eq!(manager.record(), ConnectionRecord::empty());
    assert!(!store.contains(KEY));
    assert_eq!(observer.toasts().len(), 2);
}

// ========== In-flight ordering ==========

#[tokio::test]
async fn test_loading_is_true_while_in_flight() {
    let gateway = FakeGateway::default();
    let reply = gateway.defer();
    let (manager, observer) = manager_with(gateway, MemoryStore::new());

    let mut connect = pin!(manager.connect_via_selector());
    assert!(poll!(connect.as_mut()).is_pending());
    assert!(manager.is_loading());
    assert_eq!(observer.loading(), vec![true]);

    reply.send(Err(GatewayError::cancelled())).unwrap();
    assert!(connect.await.is_err());
    assert!(!manager.is_loading());
    assert_eq!(observer.loading(), vec![true, false]);
}

#[tokio::test]
async fn test_dropped_connect_releases_loading() {
    let gateway = FakeGateway::default();
    let _reply = gateway.defer();
    let (manager, observer) = manager_with(gateway, MemoryStore::new());

    {
        let mut connect = pin!(manager.connect_specific("freighter", "Freighter"));
        assert!(poll!(connect.as_mut()).is_pending());
        assert!(manager.is_loading());
    }

    assert!(!manager.is_loading());
    assert_eq!(observer.loading(), vec![true, false]);
}

#[tokio::test]
async fn test_disconnect_during_connect_wins() {
    let gateway = FakeGateway::default();
    let reply = gateway.defer();
    let store = MemoryStore::new();
    let (manager, observer) = manager_with(gateway, store.clone());

    let mut connect = pin!(manager.connect_specific("freighter", "Freighter"));
    assert!(poll!(connect.as_mut()).is_pending());

    manager.disconnect();
    reply.send(Ok(ADDR.to_string())).unwrap();

    assert_eq!(connect.await, Err(WalletError::Superseded));
    assert!(!manager.is_connected());
    assert!(!store.contains(KEY));
    assert!(!manager.is_loading());

    let titles: Vec<String> = observer.toasts().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Wallet Disconnected"]);
}

#[tokio::test]
async fn test_newer_connect_wins_over_slower_older_one() {
    let gateway = FakeGateway::default();
    let first = gateway.defer();
    let second = gateway.defer();
    let store = MemoryStore::new();
    let (manager, observer) = manager_with(gateway, store.clone());

    let mut older = pin!(manager.connect_specific("freighter", "Freighter"));
    assert!(poll!(older.as_mut()).is_pending());
    let mut newer = pin!(manager.connect_specific("xbull", "xBull"));
    assert!(poll!(newer.as_mut()).is_pending());

    second.send(Ok(OTHER_ADDR.to_string())).unwrap();
    let record = newer.await.unwrap();
    assert_eq!(record.provider_id(), Some("xbull"));
    assert!(manager.is_loading());

    first.send(Ok(ADDR.to_string())).unwrap();
    assert_eq!(older.await, Err(WalletError::Superseded));

    assert_eq!(manager.record().address(), Some(OTHER_ADDR));
    let stored = ConnectionRecord::parse(&store.peek(KEY).unwrap()).unwrap();
    assert_eq!(stored.address(), Some(OTHER_ADDR));
    assert_eq!(observer.loading(), vec![true, false]);
    assert_eq!(observer.toasts().len(), 1);
}

#[tokio::test]
async fn test_stale_failure_is_not_surfaced() {
    let gateway = FakeGateway::default();
    let reply = gateway.defer();
    let (manager, observer) = manager_with(gateway, MemoryStore::new());

    let mut connect = pin!(manager.connect_specific("freighter", "Freighter"));
    assert!(poll!(connect.as_mut()).is_pending());
    manager.disconnect();

    reply.send(Err(GatewayError::library("boom"))).unwrap();
    assert_eq!(connect.await, Err(WalletError::Superseded));
    assert!(observer.toasts().iter().all(|t| t.title != "Connection Failed"));
}

// ========== Persistence round trip ==========

#[tokio::test]
async fn test_reload_reconstructs_record() {
    let store = MemoryStore::new();
    let (manager, _observer) = manager_with(FakeGateway::answering(Ok(ADDR.to_string())), store.clone());
    let connected = manager.connect_specific("freighter", "Freighter").await.unwrap();

    let (reloaded, _observer) = manager_with(FakeGateway::default(), store);

    let record = reloaded.record();
    assert_eq!(record.address(), connected.address());
    assert_eq!(record.provider_id(), connected.provider_id());
    assert_eq!(record.provider_name(), connected.provider_name());
    assert_eq!(record.display_address(), Some(truncate_address(ADDR).as_str()));
}

// ========== Providers & signing ==========

#[tokio::test]
async fn test_providers_failure_degrades_to_empty() {
    let gateway = FakeGateway::default();
    *gateway.providers.borrow_mut() = Some(Err(GatewayError::unavailable("kit not loaded")));
    let (manager, _observer) = manager_with(gateway, MemoryStore::new());

    assert!(manager.providers().await.is_empty());
}

#[tokio::test]
async fn test_providers_passes_through() {
    let gateway = FakeGateway::default();
    *gateway.providers.borrow_mut() = Some(Ok(vec![ProviderDescriptor::new("freighter", "Freighter", true)]));
    let (manager, _observer) = manager_with(gateway, MemoryStore::new());

    let providers = manager.providers().await;
    assert_eq!(providers.len(), 1);
    assert!(providers[0].is_available);
}

#[tokio::test]
async fn test_sign_requires_connection() {
    let (manager, _observer) = manager_with(FakeGateway::default(), MemoryStore::new());

    assert_eq!(manager.sign_transaction("AAAA").await, Err(WalletError::NotConnected));
    assert!(manager.gateway().calls().is_empty());
}

#[tokio::test]
async fn test_sign_uses_connected_address() {
    let store = MemoryStore::with_entry(KEY, &stored_freighter(ADDR));
    let gateway = FakeGateway::default();
    *gateway.signed.borrow_mut() = Some(Ok("AAAA-signed".to_string()));
    let (manager, _observer) = manager_with(gateway, store);

    assert_eq!(manager.sign_transaction("AAAA").await, Ok("AAAA-signed".to_string()));
    assert_eq!(manager.gateway().calls(), vec![format!("sign:AAAA:{}", ADDR)]);
}

#[tokio::test]
async fn test_sign_rejects_empty_result() {
    let store = MemoryStore::with_entry(KEY, &stored_freighter(ADDR));
    let gateway = FakeGateway::default();
    *gateway.signed.borrow_mut() = Some(Ok(String::new()));
    let (manager, _observer) = manager_with(gateway, store);

    let err = manager.sign_transaction("AAAA").await.unwrap_err();
    assert!(matches!(err, WalletError::Gateway(e) if e.kind() == GatewayErrorKind::NotSigned));
}
