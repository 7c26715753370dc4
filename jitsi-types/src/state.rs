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

//! Local mirror of the widget's conference state.
//!
//! The widget owns the truth; this only tracks what its events have told us
//! so the controls can render the right labels and enabled state.

use crate::{Command, WidgetEvent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConferenceState {
    pub connected: bool,
    /// `None` until the widget reports a mute status.
    pub audio_muted: Option<bool>,
    pub video_muted: Option<bool>,
}

impl ConferenceState {
    /// Fold a widget event into the state. Returns a follow-up command to
    /// send back to the widget, if any.
    pub fn apply(&mut self, event: WidgetEvent) -> Option<Command> {
        match event {
            WidgetEvent::Joined => {
                self.connected = true;
                // Open the chat panel as soon as we are in.
                Some(Command::ToggleChat)
            }
            WidgetEvent::ReadyToClose => {
                self.connected = false;
                None
            }
            WidgetEvent::AudioMuteChanged(muted) => {
                self.audio_muted = Some(muted);
                None
            }
            WidgetEvent::VideoMuteChanged(muted) => {
                self.video_muted = Some(muted);
                None
            }
        }
    }

    /// The user left through our own controls.
    pub fn left(&mut self) {
        self.connected = false;
    }

    pub fn join_label(&self, joining: bool) -> &'static str {
        if joining {
            "Connecting..."
        } else if self.connected {
            "Reconnect"
        } else {
            "Join chat"
        }
    }

    pub fn mic_label(&self) -> &'static str {
        if self.audio_muted == Some(true) {
            "Unmute mic"
        } else {
            "Mute mic"
        }
    }

    pub fn mic_title(&self) -> &'static str {
        if self.audio_muted == Some(true) {
            "Turn the microphone on"
        } else {
            "Turn the microphone off"
        }
    }

    pub fn camera_label(&self) -> &'static str {
        if self.video_muted == Some(true) {
            "Unmute cam"
        } else {
            "Mute cam"
        }
    }

    pub fn camera_title(&self) -> &'static str {
        if self.video_muted == Some(true) {
            "Turn the camera on"
        } else {
            "Turn the camera off"
        }
    }

    /// Chat, mic, camera and leave only make sense inside a conference.
    pub fn controls_enabled(&self) -> bool {
        self.connected
    }
}
