/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use jitsi_types::DEFAULT_DOMAIN;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Optional `window.__APP_CONFIG` injected by the hosting page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "jitsiDomain")]
    #[serde(default)]
    pub jitsi_domain: Option<String>,
}

/// Domain baked in at build time, e.g. `JITSI_DOMAIN=jitsi.example.org trunk build`.
const BUILD_DOMAIN: Option<&str> = std::option_env!("JITSI_DOMAIN");

/// Read the runtime config. A missing `__APP_CONFIG` yields the defaults;
/// a present but malformed one is an error.
pub fn app_config() -> Result<RuntimeConfig, String> {
    let Some(win) = window() else {
        return Ok(RuntimeConfig::default());
    };
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(RuntimeConfig::default());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// The Jitsi deployment to embed: runtime config, then build-time env, then
/// the public `meet.jit.si`.
pub fn jitsi_domain() -> String {
    non_empty(app_config().ok().and_then(|c| c.jitsi_domain))
        .or_else(|| non_empty(BUILD_DOMAIN.map(str::to_string)))
        .unwrap_or_else(|| DEFAULT_DOMAIN.to_string())
}
