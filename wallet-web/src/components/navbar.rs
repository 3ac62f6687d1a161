//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::WalletModal;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{APP_NAME, CONNECTING_LABEL, CONNECT_LABEL};

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let modal_open = RwSignal::new(false);

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/">
                    <span class="nav-title">{APP_NAME}</span>
                </A>
                {move || match wallet_ctx.display_address() {
                    Some(display) => view! {
                        <div style="display: flex; gap: 12px; align-items: center;">
                            <span class="wallet-address" title=wallet_ctx.address()>{display}</span>
                            <button class="btn-secondary" on:click=move |_| wallet_ctx.disconnect()>
                                "Disconnect"
                            </button>
                        </div>
                    }.into_any(),
                    None => view! {
                        <button
                            class="btn"
                            disabled=move || wallet_ctx.loading.get()
                            on:click=move |_| modal_open.set(true)
                        >
                            {move || if wallet_ctx.loading.get() { CONNECTING_LABEL } else { CONNECT_LABEL }}
                        </button>
                    }.into_any(),
                }}
            </div>
            <WalletModal open=modal_open/>
        </nav>
    }
}
