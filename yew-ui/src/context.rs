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

// -----------------------------------------------------------------------------
// Local-storage helpers
// -----------------------------------------------------------------------------
//
// Storage can be unavailable (private mode, blocked cookies); every helper
// degrades to a no-op in that case.

use jitsi_types::{NAME_STORAGE_KEY, ROOM_STORAGE_KEY};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load(key: &str) -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .filter(|v| !v.is_empty())
}

/// Last room the user typed or joined.
pub fn load_room_from_storage() -> Option<String> {
    load(ROOM_STORAGE_KEY)
}

/// Persist the room. Empty rooms are not written, so clearing the field
/// keeps the previous value around.
pub fn save_room_to_storage(room: &str) {
    if room.is_empty() {
        return;
    }
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ROOM_STORAGE_KEY, room);
    }
}

pub fn load_name_from_storage() -> Option<String> {
    load(NAME_STORAGE_KEY)
}

/// Persist the display name; an empty name removes the key.
pub fn save_name_to_storage(name: &str) {
    if let Some(storage) = local_storage() {
        let _ = if name.is_empty() {
            storage.remove_item(NAME_STORAGE_KEY)
        } else {
            storage.set_item(NAME_STORAGE_KEY, name)
        };
    }
}
