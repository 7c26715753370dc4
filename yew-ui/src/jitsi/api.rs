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

//! Bindings for the global `JitsiMeetExternalAPI` class defined by
//! `external_api.js`.

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;

const GLOBAL_NAME: &str = "JitsiMeetExternalAPI";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = JitsiMeetExternalAPI)]
    pub type JitsiMeetExternalApi;

    /// Throws (and so returns `Err`) when the global is not defined.
    #[wasm_bindgen(constructor, catch, js_class = "JitsiMeetExternalAPI")]
    pub fn new(domain: &str, options: &JsValue) -> Result<JitsiMeetExternalApi, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addEventListener)]
    pub fn add_event_listener(
        this: &JitsiMeetExternalApi,
        event: &str,
        listener: &Function,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = executeCommand)]
    pub fn execute_command(this: &JitsiMeetExternalApi, command: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn dispose(this: &JitsiMeetExternalApi) -> Result<(), JsValue>;
}

/// Whether `window.JitsiMeetExternalAPI` is defined.
pub fn is_available() -> bool {
    web_sys::window()
        .map(|w| {
            Reflect::get(&w, &JsValue::from_str(GLOBAL_NAME))
                .map(|v| !v.is_undefined() && !v.is_null())
                .unwrap_or(false)
        })
        .unwrap_or(false)
}
