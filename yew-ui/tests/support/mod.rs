// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for jitsi-chat-ui browser tests.
//
// Provides mount/cleanup helpers, runtime config injection, and a fake
// `JitsiMeetExternalAPI` global so the page can be driven without loading
// the real widget from the network.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventInit, HtmlButtonElement, HtmlInputElement};

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

pub fn input(mount: &web_sys::Element, selector: &str) -> HtmlInputElement {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} missing"))
        .dyn_into::<HtmlInputElement>()
        .unwrap()
}

pub fn button(mount: &web_sys::Element, selector: &str) -> HtmlButtonElement {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} missing"))
        .dyn_into::<HtmlButtonElement>()
        .unwrap()
}

/// Set an input's value and fire a bubbling `input` event, the way typing
/// would.
pub fn type_into(input: &HtmlInputElement, value: &str) {
    input.set_value(value);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

// ---------------------------------------------------------------------------
// Browser state
// ---------------------------------------------------------------------------

pub fn clear_storage() {
    let storage = gloo_utils::window().local_storage().unwrap().unwrap();
    storage.remove_item("jitsi_room").unwrap();
    storage.remove_item("jitsi_name").unwrap();
}

pub fn stored(key: &str) -> Option<String> {
    gloo_utils::window()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item(key)
        .unwrap()
}

pub fn store(key: &str, value: &str) {
    gloo_utils::window()
        .local_storage()
        .unwrap()
        .unwrap()
        .set_item(key, value)
        .unwrap();
}

/// Replace the query string without navigating. Returns the previous URL.
pub fn set_query(query: &str) -> String {
    let window = gloo_utils::window();
    let previous = window.location().href().unwrap();
    window
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(query))
        .unwrap();
    previous
}

pub fn restore_url(url: &str) {
    gloo_utils::window()
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(url))
        .unwrap();
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a frozen `window.__APP_CONFIG` naming a Jitsi domain.
pub fn inject_app_config(domain: &str) {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"jitsiDomain".into(), &domain.into()).unwrap();
    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Inject a `__APP_CONFIG` whose `jitsiDomain` has the wrong type.
pub fn inject_malformed_app_config() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"jitsiDomain".into(), &JsValue::from(42)).unwrap();
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &config).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// Fake widget
// ---------------------------------------------------------------------------

/// Reset `window.__jitsi` and replace `alert` with a recorder.
pub fn stub_alert() {
    js_sys::eval(
        r#"
        window.__jitsi = { instances: [], alerts: [] };
        window.alert = function (message) { window.__jitsi.alerts.push(message); };
        "#,
    )
    .unwrap();
}

/// Define a recording `window.JitsiMeetExternalAPI` and stub `alert`.
pub fn install_fake_jitsi() {
    stub_alert();
    js_sys::eval(
        r#"
        window.JitsiMeetExternalAPI = class {
            constructor(domain, options) {
                this.domain = domain;
                this.options = options;
                this.listeners = {};
                this.commands = [];
                this.disposed = 0;
                window.__jitsi.instances.push(this);
            }
            addEventListener(name, listener) {
                (this.listeners[name] = this.listeners[name] || []).push(listener);
            }
            executeCommand(name) { this.commands.push(name); }
            dispose() { this.disposed += 1; }
            fire(name, payload) {
                (this.listeners[name] || []).forEach((listener) => listener(payload));
            }
        };
        "#,
    )
    .unwrap();
}

pub fn uninstall_fake_jitsi() {
    js_sys::eval("delete window.JitsiMeetExternalAPI; delete window.__jitsi;").unwrap();
}

fn eval(expr: &str) -> JsValue {
    js_sys::eval(expr).unwrap_or_else(|e| panic!("eval {expr} failed: {e:?}"))
}

pub fn instance_count() -> u32 {
    eval("window.__jitsi.instances.length").as_f64().unwrap() as u32
}

/// Evaluate `expr` against the most recent widget instance, bound as `w`.
pub fn last_instance(expr: &str) -> JsValue {
    eval(&format!(
        "(function (w) {{ return {expr}; }})(window.__jitsi.instances[window.__jitsi.instances.length - 1])"
    ))
}

pub fn commands() -> Vec<String> {
    last_instance("w.commands.join(',')")
        .as_string()
        .unwrap()
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fire a widget event on the most recent instance. `payload` is a JS
/// expression.
pub fn fire(name: &str, payload: &str) {
    last_instance(&format!("w.fire('{name}', {payload})"));
}

/// Make every `addEventListener` on the fake widget throw.
pub fn break_fake_subscriptions() {
    js_sys::eval(
        "window.JitsiMeetExternalAPI.prototype.addEventListener = function () { throw new Error('subscribe failed'); };",
    )
    .unwrap();
}

pub fn alerts() -> u32 {
    eval("window.__jitsi.alerts.length").as_f64().unwrap() as u32
}
