// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{AppContext, AppDependencies};
use crate::app::event_handlers::MockBoardEventDispatcherTrait;
use crate::domain::activities::services::mocks::MockActivitiesApi;

#[derive(Default)]
pub struct MockAppDependencies {
    pub activities_api: MockActivitiesApi,
    pub board_event_dispatcher: MockBoardEventDispatcherTrait,
    pub ctx: AppContext,
}

impl MockAppDependencies {
    pub fn into_deps(self) -> AppDependencies {
        AppDependencies::from(self)
    }
}

impl From<MockAppDependencies> for AppDependencies {
    fn from(mock: MockAppDependencies) -> Self {
        AppDependencies {
            activities_api: Arc::new(mock.activities_api),
            board_event_dispatcher: Arc::new(mock.board_event_dispatcher),
            ctx: Arc::new(mock.ctx),
        }
    }
}
