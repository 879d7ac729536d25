// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use activity_board_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::app::deps::DynAppContext;
use crate::board_builder::{ActivityBoardBuilder, UndefinedActivitiesApi};
use crate::dtos::{ActivityName, EmailAddress, StatusMessage, ViewState};
use crate::services::{CatalogService, RegistrationService, StatusService};
use crate::BoardEvent;

/// The view controller of the activities page. Cheap to clone, all clones share the same
/// view state.
#[derive(Clone)]
pub struct ActivityBoard {
    inner: Arc<ActivityBoardInner>,
}

pub trait ActivityBoardDelegate: SendUnlessWasm + SyncUnlessWasm {
    fn handle_event(&self, board: ActivityBoard, event: BoardEvent);
}

impl ActivityBoard {
    pub fn builder() -> ActivityBoardBuilder<UndefinedActivitiesApi> {
        ActivityBoardBuilder::new()
    }
}

pub struct ActivityBoardInner {
    pub catalog: CatalogService,
    pub registration: RegistrationService,
    pub status: StatusService,
    pub(crate) ctx: DynAppContext,
}

impl From<Arc<ActivityBoardInner>> for ActivityBoard {
    fn from(inner: Arc<ActivityBoardInner>) -> Self {
        ActivityBoard { inner }
    }
}

impl Deref for ActivityBoard {
    type Target = ActivityBoardInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl ActivityBoard {
    pub async fn load_activities(&self) {
        self.catalog.load_activities().await
    }

    pub async fn submit_signup(
        &self,
        activity: impl Into<ActivityName>,
        email: impl Into<EmailAddress>,
    ) {
        self.registration
            .submit_signup(&activity.into(), &email.into())
            .await
    }

    pub async fn submit_unregister(
        &self,
        activity: impl Into<ActivityName>,
        email: impl Into<EmailAddress>,
    ) {
        self.registration
            .submit_unregister(&activity.into(), &email.into())
            .await
    }

    pub fn show_status(&self, message: StatusMessage) {
        self.status.show(message)
    }

    pub fn update_signup_form(&self, activity: impl Into<String>, email: impl Into<String>) {
        self.registration.update_signup_form(activity, email)
    }

    /// A snapshot of everything the page should currently display.
    pub fn view_state(&self) -> ViewState {
        self.ctx.view_state.read().clone()
    }
}
