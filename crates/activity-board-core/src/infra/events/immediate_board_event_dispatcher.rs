// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{OnceLock, Weak};

use tracing::warn;

use crate::app::event_handlers::BoardEventDispatcherTrait;
use crate::board::ActivityBoardInner;
use crate::{ActivityBoard, ActivityBoardDelegate, BoardEvent};

/// Forwards events to the delegate synchronously. Holds the board weakly so that the delegate
/// never keeps it alive.
pub struct ImmediateBoardEventDispatcher {
    board_inner: OnceLock<Weak<ActivityBoardInner>>,
    delegate: Option<Box<dyn ActivityBoardDelegate>>,
}

impl ImmediateBoardEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ActivityBoardDelegate>>) -> Self {
        Self {
            board_inner: Default::default(),
            delegate,
        }
    }

    pub(crate) fn set_board_inner(&self, board_inner: Weak<ActivityBoardInner>) {
        if self.board_inner.set(board_inner).is_err() {
            warn!("Tried to set board_inner on ImmediateBoardEventDispatcher more than once.");
        }
    }
}

impl BoardEventDispatcherTrait for ImmediateBoardEventDispatcher {
    fn dispatch_event(&self, event: BoardEvent) {
        let Some(delegate) = &self.delegate else {
            return;
        };

        let Some(board_inner) = self.board_inner.get().and_then(Weak::upgrade) else {
            return;
        };

        delegate.handle_event(ActivityBoard::from(board_inner), event);
    }
}
