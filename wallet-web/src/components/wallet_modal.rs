//! Wallet selection modal and provider list

use leptos::prelude::*;
use shared::dto::wallet::ProviderDescriptor;

use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{CONNECTING_LABEL, CONNECT_LABEL};

/// One button per known provider plus a button for the kit's own selector.
///
/// `on_settled` runs once a connect attempt finishes, whatever its outcome.
#[component]
pub fn ProviderList(#[prop(optional)] on_settled: Option<Callback<()>>) -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let connect_provider = move |provider: ProviderDescriptor| {
        leptos::task::spawn_local(async move {
            if let Err(e) = wallet_ctx.connect_specific(provider.id, provider.name).await {
                log::debug!("Provider connect ended without a connection: {}", e);
            }
            if let Some(callback) = on_settled {
                callback.run(());
            }
        });
    };

    let open_selector = move |_| {
        leptos::task::spawn_local(async move {
            if let Err(e) = wallet_ctx.connect_via_selector().await {
                log::debug!("Selector ended without a connection: {}", e);
            }
            if let Some(callback) = on_settled {
                callback.run(());
            }
        });
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 12px;">
            <For
                each=move || wallet_ctx.providers.get()
                key=|provider| provider.id.clone()
                children=move |provider: ProviderDescriptor| {
                    let icon = provider.icon.clone().unwrap_or_else(|| "wallet".to_string());
                    let name = provider.name.clone();
                    let status = if provider.is_available { "Detected" } else { "Not detected" };
                    view! {
                        <button
                            class="wallet-button"
                            disabled=move || wallet_ctx.loading.get()
                            on:click=move |_| connect_provider(provider.clone())
                        >
                            <span class=format!("wallet-icon icon-{}", icon)></span>
                            <span style="font-weight: 600; flex: 1; text-align: left;">{name}</span>
                            <span style="font-size: 0.9em; opacity: 0.9;">{status}</span>
                        </button>
                    }
                }
            />

            <button
                class="btn"
                style="width: 100%; margin-top: 8px;"
                disabled=move || wallet_ctx.loading.get()
                on:click=open_selector
            >
                {move || if wallet_ctx.loading.get() { CONNECTING_LABEL } else { CONNECT_LABEL }}
            </button>
        </div>
    }
}

/// Modal overlay around [`ProviderList`]. Closes when a connect attempt completes.
#[component]
pub fn WalletModal(open: RwSignal<bool>) -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    Effect::new(move || {
        if open.get() {
            wallet_ctx.refresh_providers();
        }
    });

    let close = Callback::new(move |_| open.set(false));

    view! {
        <Show when=move || open.get()>
            <div class="wallet-overlay" on:click=move |_| open.set(false)>
                <div class="card wallet-modal" on:click=|ev| ev.stop_propagation()>
                    <h2 style="color: #ffffff; margin-bottom: 8px;">"Connect Wallet"</h2>
                    <p class="subtitle">"Choose a Stellar wallet to continue"</p>
                    <ProviderList on_settled=close/>
                </div>
            </div>
        </Show>
    }
}
