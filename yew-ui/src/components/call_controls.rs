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

//! In-call controls: chat, microphone, camera and leave.
//!
//! Every button is disabled until the widget reports that we joined.

use jitsi_types::{Command, ConferenceState};
use yew::prelude::*;

// =============================================================================
// Single control button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct ControlButtonProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub disabled: bool,
    #[prop_or_default]
    pub danger: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ControlButton)]
pub fn control_button(props: &ControlButtonProps) -> Html {
    let class = classes!("button", "control-button", props.danger.then_some("danger"));

    html! {
        <button
            id={props.id.clone()}
            {class}
            title={props.title.clone()}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { props.label.clone() }
        </button>
    }
}

// =============================================================================
// Control bar
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct CallControlsProps {
    pub state: ConferenceState,
    pub on_command: Callback<Command>,
    pub on_leave: Callback<()>,
}

#[function_component(CallControls)]
pub fn call_controls(props: &CallControlsProps) -> Html {
    let disabled = !props.state.controls_enabled();
    let send = |command: Command| {
        let on_command = props.on_command.clone();
        Callback::from(move |_: MouseEvent| on_command.emit(command))
    };
    let on_leave = {
        let on_leave = props.on_leave.clone();
        Callback::from(move |_: MouseEvent| on_leave.emit(()))
    };

    html! {
        <div class="call-controls">
            <ControlButton
                id="toggle-chat"
                label="Toggle chat"
                {disabled}
                onclick={send(Command::ToggleChat)}
            />
            <ControlButton
                id="toggle-mic"
                label={props.state.mic_label()}
                title={Some(AttrValue::from(props.state.mic_title()))}
                {disabled}
                onclick={send(Command::ToggleAudio)}
            />
            <ControlButton
                id="toggle-camera"
                label={props.state.camera_label()}
                title={Some(AttrValue::from(props.state.camera_title()))}
                {disabled}
                onclick={send(Command::ToggleVideo)}
            />
            <ControlButton
                id="leave"
                label="Leave"
                danger={true}
                {disabled}
                onclick={on_leave}
            />
        </div>
    }
}
