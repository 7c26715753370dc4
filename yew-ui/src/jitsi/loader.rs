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

//! Single-flight loader for `external_api.js`.
//!
//! Concurrent callers share one in-flight load, so the script tag is
//! appended at most once. A failed load is forgotten and its tag removed,
//! which lets the next join attempt retry.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use jitsi_types::script_url;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use super::api;
use crate::error::JitsiError;

type LoadFuture = Shared<LocalBoxFuture<'static, Result<(), JitsiError>>>;

thread_local! {
    static IN_FLIGHT: RefCell<Option<LoadFuture>> = const { RefCell::new(None) };
}

/// Make sure `JitsiMeetExternalAPI` is defined, loading it from `domain`
/// if needed.
pub async fn load_external_api(domain: &str) -> Result<(), JitsiError> {
    load_external_api_from_url(&script_url(domain)).await
}

/// Same as [`load_external_api`] for a script served from a custom URL,
/// e.g. a self-hosted copy of `external_api.js`.
pub async fn load_external_api_from_url(url: &str) -> Result<(), JitsiError> {
    if api::is_available() {
        return Ok(());
    }

    let load = IN_FLIGHT.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(|| {
                log::info!("Loading Jitsi external API from {url}");
                inject_script(url.to_string()).boxed_local().shared()
            })
            .clone()
    });

    let result = load.clone().await;
    if result.is_err() {
        IN_FLIGHT.with(|cell| {
            let mut slot = cell.borrow_mut();
            if slot.as_ref().is_some_and(|current| current.ptr_eq(&load)) {
                *slot = None;
            }
        });
    }
    result
}

/// Whether a load is currently cached. Only tests need this.
#[doc(hidden)]
pub fn is_loading() -> bool {
    IN_FLIGHT.with(|cell| cell.borrow().is_some())
}

/// Forget any cached load. Only tests need this.
#[doc(hidden)]
pub fn reset() {
    IN_FLIGHT.with(|cell| *cell.borrow_mut() = None);
}

async fn inject_script(url: String) -> Result<(), JitsiError> {
    let document = gloo_utils::document();
    let script: HtmlScriptElement = document
        .create_element("script")?
        .dyn_into()
        .map_err(|_| JitsiError::Js("created element is not a <script>".to_string()))?;
    script.set_src(&url);
    script.set_async(true);

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let settle = move |loaded: bool| {
        let tx = tx.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(loaded);
            }
        })
    };
    let onload = settle(true);
    let onerror = settle(false);
    script.set_onload(Some(onload.as_ref().unchecked_ref()));
    script.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    let body = document.body().ok_or(JitsiError::MissingContainer)?;
    body.append_child(&script)?;

    // A dropped sender means the closures went away without firing.
    let loaded = rx.await.unwrap_or(false);
    script.set_onload(None);
    script.set_onerror(None);
    drop(onload);
    drop(onerror);

    if !loaded {
        log::error!("Failed to load {url}");
        script.remove();
        return Err(JitsiError::ScriptLoad { url });
    }
    if !api::is_available() {
        log::error!("{url} loaded but did not define JitsiMeetExternalAPI");
        script.remove();
        return Err(JitsiError::ApiUnavailable);
    }
    Ok(())
}
