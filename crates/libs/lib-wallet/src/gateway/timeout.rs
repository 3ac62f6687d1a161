//! Request timeouts for wallet gateways.
//!
//! A wallet extension that never answers would otherwise leave the UI loading
//! forever. [`TimeoutGateway`] races each suspending call against a [`Timer`]
//! and turns an expiry into [`GatewayError::timed_out`], which callers treat
//! like a cancellation.

use std::future::Future;
use std::pin::pin;

use async_trait::async_trait;
use futures::future::{select, Either, LocalBoxFuture};
use shared::dto::wallet::ProviderDescriptor;

use super::WalletGateway;
use crate::error::GatewayError;

/// Runtime-specific sleep. The web app uses `gloo-timers`, tests use tokio.
pub trait Timer {
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()>;
}

/// Wraps a gateway so every connect and sign call is bounded.
pub struct TimeoutGateway<G, T> {
    inner: G,
    timer: T,
    timeout_ms: Option<u32>,
}

impl<G, T> TimeoutGateway<G, T>
where
    G: WalletGateway,
    T: Timer,
{
    /// `timeout_ms` of `None` forwards calls unbounded.
    pub fn new(inner: G, timer: T, timeout_ms: Option<u32>) -> Self {
        Self {
            inner,
            timer,
            timeout_ms,
        }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    async fn bounded<R>(
        &self,
        operation: impl Future<Output = Result<R, GatewayError>>,
    ) -> Result<R, GatewayError> {
        let Some(millis) = self.timeout_ms else {
            return operation.await;
        };

        let operation = pin!(operation);
        match select(operation, self.timer.sleep(millis)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                log::warn!("Wallet request timed out after {} ms", millis);
                Err(GatewayError::timed_out(millis))
            }
        }
    }
}

#[async_trait(?Send)]
impl<G, T> WalletGateway for TimeoutGateway<G, T>
where
    G: WalletGateway,
    T: Timer,
{
    async fn list_providers(&self) -> Result<Vec<ProviderDescriptor>, GatewayError> {
        self.inner.list_providers().await
    }

    async fn connect_by_id(&self, provider_id: &str) -> Result<String, GatewayError> {
        self.bounded(self.inner.connect_by_id(provider_id)).await
    }

    async fn connect_via_selector(&self) -> Result<String, GatewayError> {
        self.bounded(self.inner.connect_via_selector()).await
    }

    async fn sign_transaction(&self, xdr: &str, address: &str) -> Result<String, GatewayError> {
        self.bounded(self.inner.sign_transaction(xdr, address)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayErrorKind;
    use futures::FutureExt;
    use std::time::Duration;

    struct TokioTimer;

    impl Timer for TokioTimer {
        fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
            tokio::time::sleep(Duration::from_millis(millis as u64)).boxed_local()
        }
    }

    /// Answers immediately for `freighter`, never for anything else.
    struct SlowGateway;

    #[async_trait(?Send)]
    impl WalletGateway for SlowGateway {
        async fn list_providers(&self) -> Result<Vec<ProviderDescriptor>, GatewayError> {
            Ok(vec![])
        }

        async fn connect_by_id(&self, provider_id: &str) -> Result<String, GatewayError> {
            if provider_id == "freighter" {
                Ok("GABC123".to_string())
            } else {
                futures::future::pending().await
            }
        }

        async fn connect_via_selector(&self) -> Result<String, GatewayError> {
            futures::future::pending().await
        }

        async fn sign_transaction(&self, _xdr: &str, _address: &str) -> Result<String, GatewayError> {
            Err(GatewayError::not_signed())
        }
    }

    #[tokio::test]
    async fn test_fast_call_passes_through() {
        let gateway = TimeoutGateway::new(SlowGateway, TokioTimer, Some(50));
        assert_eq!(gateway.connect_by_id("freighter").await, Ok("GABC123".to_string()));
    }

    #[tokio::test]
    async fn test_hanging_call_times_out_as_cancellation() {
        let gateway = TimeoutGateway::new(SlowGateway, TokioTimer, Some(10));
        let err = gateway.connect_via_selector().await.unwrap_err();

        assert_eq!(err.kind(), GatewayErrorKind::TimedOut);
        assert!(err.is_cancellation());
    }

    #[tokio::test]
    async fn test_errors_pass_through_unchanged() {
        let gateway = TimeoutGateway::new(SlowGateway, TokioTimer, Some(50));
        let err = gateway.sign_transaction("AAAA", "GABC123").await.unwrap_err();
        assert_eq!(err.kind(), GatewayErrorKind::NotSigned);
    }

    #[tokio::test]
    async fn test_disabled_timeout_forwards() {
        let gateway = TimeoutGateway::new(SlowGateway, TokioTimer, None);
        assert!(gateway.connect_by_id("freighter").await.is_ok());
        assert!(gateway.list_providers().await.unwrap().is_empty());
    }
}
