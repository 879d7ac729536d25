// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use url::Url;

use crate::app::deps::{AppConfig, AppContext, AppDependencies, DynActivitiesApi};
use crate::board::ActivityBoardInner;
use crate::infra::events::ImmediateBoardEventDispatcher;
use crate::infra::http::RestActivitiesApi;
use crate::services::{CatalogService, RegistrationService, StatusService};
use crate::{ActivityBoard, ActivityBoardDelegate};

pub struct UndefinedActivitiesApi;

pub struct ActivityBoardBuilder<A> {
    activities_api: A,
    app_config: AppConfig,
    delegate: Option<Box<dyn ActivityBoardDelegate>>,
}

impl ActivityBoardBuilder<UndefinedActivitiesApi> {
    pub(crate) fn new() -> Self {
        ActivityBoardBuilder {
            activities_api: UndefinedActivitiesApi,
            app_config: Default::default(),
            delegate: None,
        }
    }

    pub fn set_activities_api(
        self,
        activities_api: DynActivitiesApi,
    ) -> ActivityBoardBuilder<DynActivitiesApi> {
        ActivityBoardBuilder {
            activities_api,
            app_config: self.app_config,
            delegate: self.delegate,
        }
    }

    /// Talks to the REST API rooted at `base_url`.
    pub fn set_api_base_url(
        self,
        base_url: Url,
    ) -> Result<ActivityBoardBuilder<DynActivitiesApi>> {
        let api = RestActivitiesApi::new(base_url)?;
        Ok(self.set_activities_api(Arc::new(api)))
    }
}

impl<A> ActivityBoardBuilder<A> {
    pub fn set_delegate(mut self, delegate: Option<Box<dyn ActivityBoardDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_status_display_duration(mut self, duration: Duration) -> Self {
        self.app_config.status_display_duration = duration;
        self
    }
}

impl ActivityBoardBuilder<DynActivitiesApi> {
    pub fn build(self) -> ActivityBoard {
        let event_dispatcher = Arc::new(ImmediateBoardEventDispatcher::new(self.delegate));

        let dependencies = AppDependencies {
            activities_api: self.activities_api,
            board_event_dispatcher: event_dispatcher.clone(),
            ctx: Arc::new(AppContext::new(self.app_config)),
        };

        let board_inner = Arc::new(ActivityBoardInner {
            catalog: CatalogService::from(&dependencies),
            registration: RegistrationService::from(&dependencies),
            status: StatusService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
        });

        event_dispatcher.set_board_inner(Arc::downgrade(&board_inner));

        ActivityBoard::from(board_inner)
    }
}
