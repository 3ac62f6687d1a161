//! Page-provided wallet configuration

use lib_wallet::WalletConfig;

use super::constants::CONFIG_ELEMENT_ID;

/// Read the config override embedded in the page, falling back to defaults.
pub fn load_config() -> WalletConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    parse_config(raw.as_deref())
}

fn parse_config(raw: Option<&str>) -> WalletConfig {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return WalletConfig::default();
    };

    match WalletConfig::from_json(raw) {
        Ok(config) => {
            log::info!("Loaded wallet config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::warn!("Ignoring wallet config in #{}: {}", CONFIG_ELEMENT_ID, e);
            WalletConfig::default()
        }
    }
}
