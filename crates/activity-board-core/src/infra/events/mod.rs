// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use immediate_board_event_dispatcher::ImmediateBoardEventDispatcher;

mod immediate_board_event_dispatcher;
