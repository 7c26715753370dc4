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

//! Page launch parameters: `?room=..&name=..&autojoin=1`.

use crate::{truthy, DEFAULT_ROOM};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchParams {
    pub room: Option<String>,
    pub name: Option<String>,
    pub autojoin: bool,
}

impl LaunchParams {
    /// Parse a `location.search` string. The leading `?` is optional and the
    /// first occurrence of a key wins. An empty `room=` is kept as present so
    /// it can suppress the default room; an empty `name=` counts as absent.
    pub fn from_query(search: &str) -> Self {
        let pairs: Vec<(String, String)> = search
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };
        let non_empty = |v: Option<String>| v.filter(|v| !v.is_empty());

        let autojoin = get("autojoin").or_else(|| get("auto"));
        Self {
            room: get("room"),
            name: non_empty(get("name")),
            autojoin: truthy(autojoin.as_deref()),
        }
    }

    /// Pick the initial `(room, display_name)`.
    ///
    /// A room from the path beats a non-empty `room` query parameter, which
    /// beats the stored room. Without any of those, an explicit empty `room=`
    /// leaves the field empty, otherwise [`DEFAULT_ROOM`] is used. The stored
    /// name is only used without a `name` parameter.
    pub fn resolve(
        &self,
        initial_room: Option<&str>,
        saved_room: Option<String>,
        saved_name: Option<String>,
    ) -> (String, String) {
        let room = initial_room
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .or_else(|| self.room.clone().filter(|r| !r.is_empty()))
            .or_else(|| saved_room.filter(|r| !r.is_empty()))
            .unwrap_or_else(|| match &self.room {
                Some(_) => String::new(),
                None => DEFAULT_ROOM.to_string(),
            });
        let name = self
            .name
            .clone()
            .or_else(|| saved_name.filter(|n| !n.is_empty()))
            .unwrap_or_default();
        (room, name)
    }

    /// Auto-join only fires when there is something to join.
    pub fn should_autojoin(&self, room: &str) -> bool {
        self.autojoin && !room.is_empty()
    }
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|s| s.into_owned())
        .unwrap_or(raw)
}
