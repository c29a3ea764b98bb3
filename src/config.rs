//! Frontend Configuration
//!
//! Resolves the gateway settings in layers, each overriding the last:
//! built-in defaults, build-time environment, a `window.__SHOPPING_LIST_CONFIG__`
//! object injected by the hosting page, then `?backend=&api=&schema=` query
//! parameters.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use shopping_core::{ConfigError, GatewayConfig};
use wasm_bindgen::JsValue;

const WINDOW_CONFIG_KEY: &str = "__SHOPPING_LIST_CONFIG__";

/// Build-time overrides as `(key, value)` pairs
fn build_time_overrides() -> Vec<(&'static str, &'static str)> {
    [
        ("backend", option_env!("SHOPPING_LIST_BACKEND")),
        ("api", option_env!("SHOPPING_LIST_API_URL")),
        ("schema", option_env!("SHOPPING_LIST_SCHEMA")),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|v| (key, v)))
    .collect()
}

/// Split `?a=1&b=x%20y` into decoded pairs
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Apply overrides in order, collecting rejected ones instead of stopping
pub fn apply_overrides<K, V>(config: &mut GatewayConfig, overrides: impl IntoIterator<Item = (K, V)>) -> Vec<ConfigError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    overrides
        .into_iter()
        .filter_map(|(key, value)| config.apply_override(key.as_ref(), value.as_ref()).err())
        .collect()
}

/// Read the `{ backend, base_url, schema }` object the hosting page may have injected
fn window_config(window: &web_sys::Window) -> Result<Option<HashMap<String, String>>, ConfigError> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(WINDOW_CONFIG_KEY))
        .map_err(|e| ConfigError::Malformed(format!("{:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| ConfigError::Malformed(e.to_string()))
}

/// Resolve the effective configuration; problems are returned, not fatal
pub fn load_config() -> (GatewayConfig, Vec<ConfigError>) {
    let mut config = GatewayConfig::default();
    let mut issues = apply_overrides(&mut config, build_time_overrides());

    if let Some(window) = web_sys::window() {
        match window_config(&window) {
            Ok(Some(injected)) => issues.extend(apply_overrides(&mut config, injected)),
            Ok(None) => {}
            Err(e) => issues.push(e),
        }

        if let Ok(search) = window.location().search() {
            issues.extend(apply_overrides(&mut config, parse_query(&search)));
        }
    }

    for issue in &issues {
        log::warn!("[CONFIG] Ignoring setting: {}", issue);
    }
    log::info!("[CONFIG] backend={} url={} schema={}", config.backend, config.base_url, config.schema);
    (config, issues)
}
