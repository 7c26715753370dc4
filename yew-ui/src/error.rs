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

//! Errors raised while loading or driving the widget.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Clone is required: one failed script load is reported to every caller
/// that was waiting on it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JitsiError {
    /// The `<script>` tag fired `error` (network, blocked, bad domain).
    #[error("Failed to load Jitsi external API from {url}")]
    ScriptLoad { url: String },

    /// The script loaded but did not define `JitsiMeetExternalAPI`.
    #[error("JitsiMeetExternalAPI is not available")]
    ApiUnavailable,

    /// The container node the widget renders into is not mounted.
    #[error("Conference container is not mounted")]
    MissingContainer,

    /// Any other exception thrown from JavaScript.
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for JitsiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        JitsiError::Js(message)
    }
}

impl From<serde_wasm_bindgen::Error> for JitsiError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        JitsiError::Js(e.to_string())
    }
}
