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

//! Types shared by the Jitsi chat page.
//!
//! Everything in here is DOM-free so it can be unit tested natively; the
//! browser glue lives in the `jitsi-chat-ui` crate.

pub mod command;
pub mod event;
pub mod launch;
pub mod options;
pub mod state;

pub use command::Command;
pub use event::{MuteStatusPayload, WidgetEvent};
pub use launch::LaunchParams;
pub use options::JoinOptions;
pub use state::ConferenceState;

/// Jitsi deployment used when nothing else is configured.
pub const DEFAULT_DOMAIN: &str = "meet.jit.si";

/// Room joined when the user leaves the room field empty.
pub const DEFAULT_ROOM: &str = "demo-chat-room";

/// `localStorage` key holding the last room.
pub const ROOM_STORAGE_KEY: &str = "jitsi_room";

/// `localStorage` key holding the last display name.
pub const NAME_STORAGE_KEY: &str = "jitsi_name";

pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true", "1", "yes", "y"].contains(&s.trim().to_lowercase().as_str())
    } else {
        false
    }
}

/// URL of the widget's `external_api.js` on the given deployment.
///
/// Accepts a bare host (`meet.jit.si`) as well as one pasted with a scheme
/// or trailing slash.
pub fn script_url(domain: &str) -> String {
    let host = domain
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    format!("https://{host}/external_api.js")
}

/// The room actually handed to the widget.
pub fn effective_room(room: &str) -> &str {
    let room = room.trim();
    if room.is_empty() {
        DEFAULT_ROOM
    } else {
        room
    }
}

/// Percent-decode a room taken from a URL path segment.
pub fn decode_room_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
