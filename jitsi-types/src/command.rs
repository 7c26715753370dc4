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

use std::fmt;

/// Commands the page sends to the widget through `executeCommand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleChat,
    ToggleAudio,
    ToggleVideo,
    Hangup,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::ToggleChat => "toggleChat",
            Command::ToggleAudio => "toggleAudio",
            Command::ToggleVideo => "toggleVideo",
            Command::Hangup => "hangup",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
