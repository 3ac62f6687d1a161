//! Browser wallet helper for ArtChain
//!
//! Connects a Stellar wallet through the Stellar Wallets Kit, keeps the
//! connection across reloads and signs transactions handed over by URL.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("ArtChain wallet starting...");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen shipped in `index.html`.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("No document available; cannot hide loading screen");
        return;
    };

    let Some(loading) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("Loading element '{}' not found", LOADING_ELEMENT_ID);
        return;
    };

    if let Err(e) = loading.class_list().add_1("hidden") {
        log::warn!("Failed to hide loading screen: {:?}", e);
    }
}
