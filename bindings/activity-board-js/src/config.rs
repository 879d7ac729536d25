// activity-board/activity-board-js
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use wasm_bindgen::prelude::*;

#[derive(Debug, PartialEq, Clone)]
#[wasm_bindgen(js_name = "ActivityBoardConfig")]
pub struct ActivityBoardConfig {
    /// Defines how long status messages stay visible (in milliseconds). Default is 5000ms.
    #[wasm_bindgen(js_name = "statusDisplayDurationMs")]
    pub status_display_duration_ms: u32,

    #[wasm_bindgen(js_name = "loggingEnabled")]
    pub logging_enabled: bool,

    #[wasm_bindgen(skip)]
    pub logging_min_level: String,

    /// The root of the activities API. Defaults to the origin of the current page.
    #[wasm_bindgen(skip)]
    pub api_base_url: Option<String>,
}

#[wasm_bindgen(js_class = "ActivityBoardConfig")]
impl ActivityBoardConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Default::default()
    }

    #[wasm_bindgen(getter, js_name = "loggingMinLevel")]
    pub fn logging_min_level(&self) -> String {
        self.logging_min_level.clone()
    }

    #[wasm_bindgen(setter, js_name = "loggingMinLevel")]
    pub fn set_logging_min_level(&mut self, level: String) {
        self.logging_min_level = level
    }

    #[wasm_bindgen(getter, js_name = "apiBaseUrl")]
    pub fn api_base_url(&self) -> Option<String> {
        self.api_base_url.clone()
    }

    #[wasm_bindgen(setter, js_name = "apiBaseUrl")]
    pub fn set_api_base_url(&mut self, url: Option<String>) {
        self.api_base_url = url
    }
}

impl Default for ActivityBoardConfig {
    fn default() -> Self {
        ActivityBoardConfig {
            status_display_duration_ms: 5000,
            logging_enabled: true,
            logging_min_level: "info".to_string(),
            api_base_url: None,
        }
    }
}
