// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::debug;

use activity_board_wasm_utils::{sleep, spawn};

use crate::app::deps::{AppDependencies, DynAppContext, DynBoardEventDispatcher};
use crate::domain::view::models::StatusMessage;
use crate::BoardEvent;

/// Owns the single status banner slot.
#[derive(Clone)]
pub struct StatusService {
    board_event_dispatcher: DynBoardEventDispatcher,
    ctx: DynAppContext,
}

impl From<&AppDependencies> for StatusService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            board_event_dispatcher: deps.board_event_dispatcher.clone(),
            ctx: deps.ctx.clone(),
        }
    }
}

impl StatusService {
    /// Shows `message` and hides it again once the configured display duration elapsed,
    /// unless another message was shown in the meantime.
    pub fn show(&self, message: StatusMessage) {
        debug!(kind = %message.kind, "Showing status message \"{}\"", message.text);

        let generation = self.ctx.next_status_generation();
        self.ctx.view_state.write().status = Some(message);
        self.board_event_dispatcher
            .dispatch_event(BoardEvent::StatusChanged);

        let ctx = self.ctx.clone();
        let dispatcher = self.board_event_dispatcher.clone();

        spawn(async move {
            sleep(ctx.config.status_display_duration).await;

            if !ctx.is_current_status(generation) {
                return;
            }

            {
                let mut view_state = ctx.view_state.write();
                let Some(status) = view_state.status.as_mut() else {
                    return;
                };
                status.visible = false;
            }

            dispatcher.dispatch_event(BoardEvent::StatusChanged);
        });
    }
}
