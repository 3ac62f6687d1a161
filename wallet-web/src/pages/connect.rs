//! Connect Wallet Page
//! Split-screen layout with left section (header/subheader) and right section (wallet card)

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::ProviderList;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::APP_NAME;

#[component]
pub fn ConnectPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    wallet_ctx.refresh_providers();

    view! {
        <div class="content-wrapper">
            <div class="left-section">
                <h1 class="main-header">{APP_NAME}</h1>
                <p class="main-subheader">"Collect and trade art on Stellar"</p>
                <p class="signup-text">"connect a wallet to continue"</p>
            </div>
            <div class="right-section">
                <div class="container">
                    <div class="card">
                        <h1 style="color: #ffffff; font-size: 32px; margin-bottom: 12px; font-weight: 700;">
                            "Connect Wallet"
                        </h1>

                        {move || if wallet_ctx.is_connected() {
                            view! {
                                <div>
                                    <div class="success">
                                        <p style="text-align: center; font-weight: bold; font-size: 1.2em; margin-bottom: 12px;">
                                            {move || wallet_ctx.provider_name().unwrap_or_default()}
                                        </p>
                                        <div class="wallet-address" title=move || wallet_ctx.address()>
                                            {move || wallet_ctx.display_address()}
                                        </div>
                                    </div>
                                    <A href="/sign-transaction">
                                        <span class="btn" style="width: 100%; display: block; text-align: center; margin-top: 16px;">
                                            "Sign a Transaction"
                                        </span>
                                    </A>
                                    <button
                                        class="btn-secondary"
                                        style="width: 100%; margin-top: 12px;"
                                        on:click=move |_| wallet_ctx.disconnect()
                                    >
                                        "Disconnect Wallet"
                                    </button>
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <div>
                                    <p class="subtitle">"Select a wallet to connect"</p>
                                    <ProviderList/>
                                </div>
                            }.into_any()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
