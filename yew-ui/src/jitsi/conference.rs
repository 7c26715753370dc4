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

//! A live widget instance plus the listeners bridging its events into Yew.

use jitsi_types::event::SUBSCRIBED_EVENTS;
use jitsi_types::{Command, JoinOptions, MuteStatusPayload, WidgetEvent};
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::Callback;

use super::api::JitsiMeetExternalApi;
use crate::error::JitsiError;

/// Owns the widget and its event listeners. Dropping it disposes the
/// widget.
pub struct Conference {
    api: JitsiMeetExternalApi,
    // Held so the JS side can keep calling them.
    #[allow(dead_code)]
    listeners: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl Conference {
    /// Construct the widget inside `parent` and subscribe `on_event` to the
    /// events the page mirrors.
    pub fn start(
        domain: &str,
        options: &JoinOptions,
        parent: &Element,
        on_event: Callback<WidgetEvent>,
    ) -> Result<Self, JitsiError> {
        let js_options = serde_wasm_bindgen::to_value(options)?;
        Reflect::set(&js_options, &JsValue::from_str("parentNode"), parent)?;

        log::info!("Starting Jitsi conference {} on {domain}", options.room_name);
        let api = JitsiMeetExternalApi::new(domain, &js_options)?;

        // Built before subscribing so a failed subscription still disposes
        // the widget on drop.
        let mut conference = Self {
            api,
            listeners: Vec::with_capacity(SUBSCRIBED_EVENTS.len()),
        };
        for name in SUBSCRIBED_EVENTS {
            let on_event = on_event.clone();
            let listener = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
                if let Some(event) = decode_event(name, payload) {
                    on_event.emit(event);
                }
            });
            conference
                .api
                .add_event_listener(name, listener.as_ref().unchecked_ref())?;
            conference.listeners.push(listener);
        }

        Ok(conference)
    }

    /// Send a command to the widget. Failures are logged, not surfaced.
    pub fn execute(&self, command: Command) {
        if let Err(e) = self.api.execute_command(command.as_str()) {
            log::warn!("Jitsi command {command} failed: {:?}", JitsiError::from(e));
        }
    }

    /// Leave the conference and tear the widget down.
    pub fn hang_up(self) {
        self.execute(Command::Hangup);
    }
}

impl Drop for Conference {
    fn drop(&mut self) {
        if let Err(e) = self.api.dispose() {
            log::warn!("Disposing Jitsi widget failed: {:?}", JitsiError::from(e));
        }
    }
}

fn decode_event(name: &str, payload: JsValue) -> Option<WidgetEvent> {
    if !WidgetEvent::carries_mute_payload(name) {
        return WidgetEvent::from_name(name);
    }
    match serde_wasm_bindgen::from_value::<MuteStatusPayload>(payload) {
        Ok(payload) => WidgetEvent::from_mute_payload(name, &payload),
        Err(e) => {
            log::debug!("Ignoring {name} with unexpected payload: {e}");
            None
        }
    }
}
