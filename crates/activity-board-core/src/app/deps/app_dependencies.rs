// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::BoardEventDispatcherTrait;
use crate::domain::activities::services::ActivitiesApi;

pub type DynActivitiesApi = Arc<dyn ActivitiesApi>;
pub type DynAppContext = Arc<AppContext>;
pub type DynBoardEventDispatcher = Arc<dyn BoardEventDispatcherTrait>;

pub struct AppDependencies {
    pub activities_api: DynActivitiesApi,
    pub board_event_dispatcher: DynBoardEventDispatcher,
    pub ctx: DynAppContext,
}
