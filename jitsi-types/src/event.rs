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

//! Events emitted by the embedded widget that the page reacts to.

use serde::Deserialize;

pub const VIDEO_CONFERENCE_JOINED: &str = "videoConferenceJoined";
pub const READY_TO_CLOSE: &str = "readyToClose";
pub const AUDIO_MUTE_STATUS_CHANGED: &str = "audioMuteStatusChanged";
pub const VIDEO_MUTE_STATUS_CHANGED: &str = "videoMuteStatusChanged";

/// Every event name the page subscribes to.
pub const SUBSCRIBED_EVENTS: [&str; 4] = [
    VIDEO_CONFERENCE_JOINED,
    READY_TO_CLOSE,
    AUDIO_MUTE_STATUS_CHANGED,
    VIDEO_MUTE_STATUS_CHANGED,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    Joined,
    ReadyToClose,
    AudioMuteChanged(bool),
    VideoMuteChanged(bool),
}

/// Payload of the `*MuteStatusChanged` events. The widget sends
/// `{ muted: bool }`; anything else decodes to `muted: None`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct MuteStatusPayload {
    #[serde(default)]
    pub muted: Option<bool>,
}

impl WidgetEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetEvent::Joined => VIDEO_CONFERENCE_JOINED,
            WidgetEvent::ReadyToClose => READY_TO_CLOSE,
            WidgetEvent::AudioMuteChanged(_) => AUDIO_MUTE_STATUS_CHANGED,
            WidgetEvent::VideoMuteChanged(_) => VIDEO_MUTE_STATUS_CHANGED,
        }
    }

    /// Events that carry no payload the page cares about.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            VIDEO_CONFERENCE_JOINED => Some(WidgetEvent::Joined),
            READY_TO_CLOSE => Some(WidgetEvent::ReadyToClose),
            _ => None,
        }
    }

    /// Mute events. Returns `None` for an unknown name or when the payload
    /// has no boolean `muted` field, in which case the event is ignored.
    pub fn from_mute_payload(name: &str, payload: &MuteStatusPayload) -> Option<Self> {
        let muted = payload.muted?;
        match name {
            AUDIO_MUTE_STATUS_CHANGED => Some(WidgetEvent::AudioMuteChanged(muted)),
            VIDEO_MUTE_STATUS_CHANGED => Some(WidgetEvent::VideoMuteChanged(muted)),
            _ => None,
        }
    }

    pub fn carries_mute_payload(name: &str) -> bool {
        name == AUDIO_MUTE_STATUS_CHANGED || name == VIDEO_MUTE_STATUS_CHANGED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_without_muted_is_ignored() {
        let payload: MuteStatusPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(
            WidgetEvent::from_mute_payload(AUDIO_MUTE_STATUS_CHANGED, &payload),
            None
        );
    }

    #[test]
    fn non_boolean_muted_fails_to_decode() {
        assert!(serde_json::from_str::<MuteStatusPayload>(r#"{"muted":"yes"}"#).is_err());
    }

    #[test]
    fn mute_payload_maps_to_matching_event() {
        let payload: MuteStatusPayload = serde_json::from_str(r#"{"muted":true}"#).unwrap();
        assert_eq!(
            WidgetEvent::from_mute_payload(AUDIO_MUTE_STATUS_CHANGED, &payload),
            Some(WidgetEvent::AudioMuteChanged(true))
        );
        assert_eq!(
            WidgetEvent::from_mute_payload(VIDEO_MUTE_STATUS_CHANGED, &payload),
            Some(WidgetEvent::VideoMuteChanged(true))
        );
        assert_eq!(WidgetEvent::from_mute_payload(READY_TO_CLOSE, &payload), None);
    }

    #[test]
    fn extra_payload_fields_are_tolerated() {
        let payload: MuteStatusPayload =
            serde_json::from_str(r#"{"muted":false,"id":"abc"}"#).unwrap();
        assert_eq!(payload.muted, Some(false));
    }

    #[test]
    fn names_cover_every_subscription() {
        assert_eq!(
            WidgetEvent::from_name(VIDEO_CONFERENCE_JOINED),
            Some(WidgetEvent::Joined)
        );
        assert_eq!(
            WidgetEvent::from_name(READY_TO_CLOSE),
            Some(WidgetEvent::ReadyToClose)
        );
        for name in SUBSCRIBED_EVENTS {
            assert!(
                WidgetEvent::from_name(name).is_some() || WidgetEvent::carries_mute_payload(name),
                "{name} would never produce an event"
            );
        }
        assert_eq!(WidgetEvent::VideoMuteChanged(false).name(), VIDEO_MUTE_STATUS_CHANGED);
    }
}
