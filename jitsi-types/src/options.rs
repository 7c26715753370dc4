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

//! Options handed to the `JitsiMeetExternalAPI` constructor.
//!
//! `parentNode` is a DOM element and is attached by the UI after
//! serialization.

use serde::Serialize;

use crate::effective_room;

const FULL_SIZE: &str = "100%";
const TILE_VIEW_MAX_COLUMNS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinOptions {
    pub room_name: String,
    pub width: String,
    pub height: String,
    pub interface_config_overwrite: InterfaceConfigOverwrite,
    pub config_overwrite: ConfigOverwrite,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceConfigOverwrite {
    #[serde(rename = "TILE_VIEW_MAX_COLUMNS")]
    pub tile_view_max_columns: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverwrite {
    pub prejoin_config: PrejoinConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrejoinConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub display_name: String,
}

impl JoinOptions {
    pub fn new(room: &str, display_name: &str) -> Self {
        let display_name = display_name.trim();
        Self {
            room_name: effective_room(room).to_string(),
            width: FULL_SIZE.to_string(),
            height: FULL_SIZE.to_string(),
            interface_config_overwrite: InterfaceConfigOverwrite {
                tile_view_max_columns: TILE_VIEW_MAX_COLUMNS,
            },
            config_overwrite: ConfigOverwrite {
                prejoin_config: PrejoinConfig { enabled: true },
            },
            user_info: (!display_name.is_empty()).then(|| UserInfo {
                display_name: display_name.to_string(),
            }),
        }
    }
}
