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

//! The chat page: join form, in-call controls and the widget container.

use gloo_utils::window;
use jitsi_types::{Command, ConferenceState, JoinOptions, LaunchParams, WidgetEvent};
use web_sys::Element;
use yew::prelude::*;

use crate::components::call_controls::CallControls;
use crate::components::join_form::JoinForm;
use crate::constants::jitsi_domain;
use crate::context::{
    load_name_from_storage, load_room_from_storage, save_name_to_storage, save_room_to_storage,
};
use crate::error::JitsiError;
use crate::jitsi::{load_external_api, Conference};

const JOIN_FAILED_ALERT: &str =
    "Could not load or start Jitsi. Check your network connection and the configured domain.";

#[derive(Debug)]
pub enum FormAction {
    RoomChanged(String),
    NameChanged(String),
}

#[derive(Debug)]
pub enum CallAction {
    Join,
    ApiLoaded(Result<(), JitsiError>),
    Command(Command),
    Leave,
}

pub enum Msg {
    Form(FormAction),
    Call(CallAction),
    Widget(WidgetEvent),
}

impl From<FormAction> for Msg {
    fn from(action: FormAction) -> Self {
        Msg::Form(action)
    }
}

impl From<CallAction> for Msg {
    fn from(action: CallAction) -> Self {
        Msg::Call(action)
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct ChatClientProps {
    /// Room taken from the `/chat/:room` path, already decoded.
    #[prop_or_default]
    pub initial_room: Option<String>,
}

pub struct ChatClient {
    domain: String,
    launch: LaunchParams,
    room: String,
    display_name: String,
    joining: bool,
    auto_joined: bool,
    state: ConferenceState,
    conference: Option<Conference>,
    container: NodeRef,
    error: Option<String>,
}

impl Component for ChatClient {
    type Message = Msg;
    type Properties = ChatClientProps;

    fn create(ctx: &Context<Self>) -> Self {
        let search = window().location().search().unwrap_or_default();
        let launch = LaunchParams::from_query(&search);
        let (room, display_name) = launch.resolve(
            ctx.props().initial_room.as_deref(),
            load_room_from_storage(),
            load_name_from_storage(),
        );
        save_room_to_storage(&room);
        save_name_to_storage(&display_name);

        Self {
            domain: jitsi_domain(),
            launch,
            room,
            display_name,
            joining: false,
            auto_joined: false,
            state: ConferenceState::default(),
            conference: None,
            container: NodeRef::default(),
            error: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.auto_joined && self.launch.should_autojoin(&self.room) {
            self.auto_joined = true;
            log::info!("Auto-joining room {}", self.room);
            ctx.link().send_message(CallAction::Join);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Form(FormAction::RoomChanged(room)) => {
                save_room_to_storage(&room);
                self.room = room;
                true
            }
            Msg::Form(FormAction::NameChanged(name)) => {
                save_name_to_storage(&name);
                self.display_name = name;
                true
            }
            Msg::Call(CallAction::Join) => {
                if self.joining {
                    return false;
                }
                if self.container.get().is_none() {
                    self.fail(JitsiError::MissingContainer);
                    return true;
                }
                self.joining = true;
                self.error = None;
                let domain = self.domain.clone();
                ctx.link().send_future(async move {
                    CallAction::ApiLoaded(load_external_api(&domain).await)
                });
                true
            }
            Msg::Call(CallAction::ApiLoaded(result)) => {
                self.joining = false;
                match result.and_then(|_| self.start_conference(ctx)) {
                    Ok(conference) => self.conference = Some(conference),
                    Err(e) => self.fail(e),
                }
                true
            }
            Msg::Call(CallAction::Command(command)) => {
                if let Some(conference) = &self.conference {
                    conference.execute(command);
                }
                false
            }
            Msg::Call(CallAction::Leave) => {
                if let Some(conference) = self.conference.take() {
                    conference.hang_up();
                }
                self.state.left();
                true
            }
            Msg::Widget(event) => {
                log::debug!("Jitsi event {}", event.name());
                if let Some(follow_up) = self.state.apply(event) {
                    if let Some(conference) = &self.conference {
                        conference.execute(follow_up);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="chat-page">
                <h1 class="page-title">{ "Jitsi Chat" }</h1>

                <div class="chat-toolbar">
                    <JoinForm
                        room={self.room.clone()}
                        display_name={self.display_name.clone()}
                        joining={self.joining}
                        join_label={self.state.join_label(self.joining)}
                        on_room_change={link.callback(FormAction::RoomChanged)}
                        on_name_change={link.callback(FormAction::NameChanged)}
                        on_join={link.callback(|_| CallAction::Join)}
                    />
                    <CallControls
                        state={self.state.clone()}
                        on_command={link.callback(CallAction::Command)}
                        on_leave={link.callback(|_| CallAction::Leave)}
                    />
                </div>

                {
                    if let Some(error) = &self.error {
                        html! { <p class="error-message">{ error.clone() }</p> }
                    } else {
                        html! {}
                    }
                }

                <div class="conference-frame">
                    <div ref={self.container.clone()} id="jitsi-container" class="conference-container" />
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Dropping the handle disposes the widget.
        self.conference.take();
    }
}

impl ChatClient {
    fn start_conference(&mut self, ctx: &Context<Self>) -> Result<Conference, JitsiError> {
        let parent = self
            .container
            .cast::<Element>()
            .ok_or(JitsiError::MissingContainer)?;

        // Re-joining replaces the previous widget.
        self.conference.take();

        let options = JoinOptions::new(&self.room, &self.display_name);
        Conference::start(
            &self.domain,
            &options,
            &parent,
            ctx.link().callback(Msg::Widget),
        )
    }

    fn fail(&mut self, error: JitsiError) {
        log::error!("Joining Jitsi failed: {error}");
        let _ = window().alert_with_message(JOIN_FAILED_ALERT);
        self.error = Some(error.to_string());
    }
}
