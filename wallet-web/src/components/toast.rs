//! Toast notifications

use leptos::prelude::*;
use lib_wallet::ToastVariant;

use crate::state::wallet::{use_wallet_context, Toast};

#[component]
pub fn Toaster() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <div class="toast-viewport">
            <For
                each=move || wallet_ctx.toasts.get()
                key=|toast| toast.id.clone()
                children=move |toast: Toast| {
                    let class = match toast.notification.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast-destructive",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            <div class="toast-title">{toast.notification.title}</div>
                            <div class="toast-description">{toast.notification.description}</div>
                            <button class="toast-close" on:click=move |_| wallet_ctx.dismiss_toast(&id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
