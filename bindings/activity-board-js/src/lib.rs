// activity-board/activity-board-js
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;

mod app;
mod config;
mod dom;
mod error;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
