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

//! Room and display-name inputs with the join button.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct JoinFormProps {
    pub room: AttrValue,
    pub display_name: AttrValue,
    pub joining: bool,
    pub join_label: AttrValue,
    pub on_room_change: Callback<String>,
    pub on_name_change: Callback<String>,
    pub on_join: Callback<()>,
}

fn input_callback(target: Callback<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        target.emit(input.value());
    })
}

#[function_component(JoinForm)]
pub fn join_form(props: &JoinFormProps) -> Html {
    let on_join = {
        let on_join = props.on_join.clone();
        Callback::from(move |_: MouseEvent| on_join.emit(()))
    };

    html! {
        <>
            <label class="form-field">
                <span class="form-label">{ "Room name" }</span>
                <input
                    id="room-name"
                    type="text"
                    class="form-input"
                    value={props.room.clone()}
                    oninput={input_callback(props.on_room_change.clone())}
                    placeholder="room-name"
                />
            </label>
            <label class="form-field">
                <span class="form-label">{ "Your name (optional)" }</span>
                <input
                    id="display-name"
                    type="text"
                    class="form-input"
                    value={props.display_name.clone()}
                    oninput={input_callback(props.on_name_change.clone())}
                    placeholder="Display name"
                />
            </label>
            <button
                id="join-button"
                class="button primary"
                disabled={props.joining}
                onclick={on_join}
            >
                { props.join_label.clone() }
            </button>
        </>
    }
}
