// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use activity_board_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::BoardEvent;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait BoardEventDispatcherTrait: SendUnlessWasm + SyncUnlessWasm {
    fn dispatch_event(&self, event: BoardEvent);
}
