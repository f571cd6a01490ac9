//! Hosting page integration: configuration override and delayed reload.

use gloo_timers::future::TimeoutFuture;

use chat_types::config::ClientConfig;

/// Attribute on the canvas element that may hold a JSON config override
pub const CONFIG_ATTRIBUTE: &str = "data-config";

/// Read the client configuration from the element with the given id.
/// A missing element or attribute yields the defaults, as does invalid JSON
/// (which is logged).
pub fn config_from_element(element_id: &str) -> ClientConfig {
    let raw = gloo_utils::document()
        .get_element_by_id(element_id)
        .and_then(|el| el.get_attribute(CONFIG_ATTRIBUTE));
    match raw {
        Some(json) => parse_config(&json),
        None => ClientConfig::default(),
    }
}

pub fn parse_config(json: &str) -> ClientConfig {
    match ClientConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring invalid {}: {}", CONFIG_ATTRIBUTE, e);
            ClientConfig::default()
        }
    }
}

/// Reload the page once `delay_ms` has elapsed.
pub fn schedule_reload(delay_ms: u32) {
    log::info!("Page reload in {}ms", delay_ms);
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if let Err(e) = gloo_utils::window().location().reload() {
            log::error!("Page reload failed: {:?}", e);
        }
    });
}
