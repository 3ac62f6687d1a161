//! Transaction signing page
//!
//! Signs a Stellar transaction envelope passed as `?xdr=<base64 XDR>` with the
//! connected wallet and shows the signed envelope.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn TransactionSignPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let query = use_query_map();

    let (error, set_error) = signal(None::<String>);
    let (signing, set_signing) = signal(false);
    let (signed_xdr, set_signed_xdr) = signal(None::<String>);

    let transaction_xdr = move || {
        query
            .with(|params| params.get("xdr"))
            .filter(|xdr| !xdr.trim().is_empty())
    };

    let sign_transaction = move || {
        let Some(xdr) = transaction_xdr() else {
            set_error.set(Some("No transaction data provided".to_string()));
            return;
        };

        set_signing.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            match wallet_ctx.sign_transaction(xdr).await {
                Ok(signed) => {
                    log::info!("Transaction signed ({} bytes of XDR)", signed.len());
                    set_signed_xdr.set(Some(signed));
                }
                Err(e) => {
                    log::error!("Failed to sign transaction: {}", e);
                    set_error.set(Some(format!("Failed to sign transaction: {}", e)));
                }
            }
            set_signing.set(false);
        });
    };

    view! {
        <div class="wallet-overlay">
            <div class="wallet-setup-card" style="max-width: 600px;">
                <h1>"Sign Transaction"</h1>

                {move || {
                    if transaction_xdr().is_none() {
                        return view! {
                            <div class="error">
                                <p>"No transaction data provided"</p>
                                <p style="font-size: 0.9em; margin-top: 8px;">
                                    "Pass the transaction envelope as the xdr URL parameter."
                                </p>
                            </div>
                        }.into_any();
                    }

                    if !wallet_ctx.is_connected() {
                        return view! {
                            <div class="error">
                                <p>"No wallet connected"</p>
                                <p style="font-size: 0.9em; margin-top: 8px;">
                                    "Please connect a wallet to sign transactions."
                                </p>
                            </div>
                        }.into_any();
                    }

                    if let Some(signed) = signed_xdr.get() {
                        return view! {
                            <div class="success">
                                <p style="text-align: center; font-weight: bold; font-size: 1.2em; margin-bottom: 12px;">
                                    "Transaction Signed"
                                </p>
                                <div style="word-break: break-all; font-family: monospace; font-size: 0.9em; margin-top: 12px;">
                                    <p style="color: #888888; margin-bottom: 4px;">"Signed XDR:"</p>
                                    <p style="color: #00ff88;">{signed}</p>
                                </div>
                            </div>
                        }.into_any();
                    }

                    view! {
                        <div>
                            {move || error.get().map(|err| view! {
                                <div class="error">
                                    <p>{err}</p>
                                </div>
                            })}

                            <div class="info" style="margin: 16px 0;">
                                <p style="margin-bottom: 8px;">"Signing as"</p>
                                <p style="font-family: monospace;">{move || wallet_ctx.display_address()}</p>
                            </div>

                            <button
                                class="btn-secondary"
                                style="width: 100%; padding: 16px; font-size: 1em; margin-top: 16px;"
                                on:click=move |_| sign_transaction()
                                disabled=move || signing.get()
                            >
                                {move || if signing.get() { "Signing..." } else { "Sign Transaction" }}
                            </button>

                            <Show when=move || signing.get()>
                                <p style="text-align: center; color: #888888; font-size: 0.9em; margin-top: 12px;">
                                    "Please approve the transaction in your wallet..."
                                </p>
                            </Show>
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
