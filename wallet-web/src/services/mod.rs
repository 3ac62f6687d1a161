//! Browser-side services: wallet kit bridge, storage and timers

pub mod storage;
pub mod wallet_kit;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use lib_wallet::Timer;

pub use storage::AppStore;
pub use wallet_kit::KitGateway;

/// [`Timer`] backed by `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(millis).boxed_local()
    }
}
