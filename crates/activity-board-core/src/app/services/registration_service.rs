// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{error, info, instrument, warn};

use crate::app::deps::{
    AppDependencies, DynActivitiesApi, DynAppContext, DynBoardEventDispatcher,
};
use crate::app::services::{CatalogService, StatusService};
use crate::domain::activities::models::{ActivityName, EmailAddress};
use crate::domain::shared::models::RequestError;
use crate::domain::view::models::StatusMessage;
use crate::BoardEvent;

pub const GENERIC_REJECTION_TEXT: &str = "An error occurred";
pub const SIGNUP_FAILURE_TEXT: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILURE_TEXT: &str = "Failed to unregister participant. Please try again.";
pub const INCOMPLETE_SIGNUP_TEXT: &str = "Please select an activity and enter your email.";

/// Signs participants up for activities and removes them again. Every outcome ends up in the
/// status banner; successful mutations refresh the catalog.
///
/// Mutations of the same activity are serialized, including the refresh that follows them.
#[derive(Clone)]
pub struct RegistrationService {
    activities_api: DynActivitiesApi,
    board_event_dispatcher: DynBoardEventDispatcher,
    catalog: CatalogService,
    ctx: DynAppContext,
    status: StatusService,
}

impl From<&AppDependencies> for RegistrationService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            activities_api: deps.activities_api.clone(),
            board_event_dispatcher: deps.board_event_dispatcher.clone(),
            catalog: CatalogService::from(deps),
            ctx: deps.ctx.clone(),
            status: StatusService::from(deps),
        }
    }
}

impl RegistrationService {
    #[instrument(skip(self))]
    pub async fn submit_signup(&self, activity: &ActivityName, email: &EmailAddress) {
        if activity.as_str().is_empty() || email.as_str().is_empty() {
            warn!("Ignoring signup with missing activity or email.");
            self.status.show(StatusMessage::error(INCOMPLETE_SIGNUP_TEXT));
            return;
        }

        let lock = self.ctx.mutation_lock(activity);
        let _guard = lock.lock().await;

        match self.activities_api.sign_up(activity, email).await {
            Ok(message) => {
                info!("Signed up {email} for {activity}.");
                self.status.show(StatusMessage::success(message));
                self.reset_signup_form();
                self.catalog.load_activities().await;
            }
            Err(err) => self.show_failure("signing up", err, SIGNUP_FAILURE_TEXT),
        }
    }

    #[instrument(skip(self))]
    pub async fn submit_unregister(&self, activity: &ActivityName, email: &EmailAddress) {
        let lock = self.ctx.mutation_lock(activity);
        let _guard = lock.lock().await;

        match self.activities_api.unregister(activity, email).await {
            Ok(message) => {
                info!("Unregistered {email} from {activity}.");
                self.status.show(StatusMessage::success(message));
                self.catalog.load_activities().await;
            }
            Err(err) => {
                self.show_failure("unregistering participant", err, UNREGISTER_FAILURE_TEXT)
            }
        }
    }

    /// Records what the user typed into the signup form.
    pub fn update_signup_form(&self, activity: impl Into<String>, email: impl Into<String>) {
        let mut view_state = self.ctx.view_state.write();
        view_state.signup_form.activity = activity.into();
        view_state.signup_form.email = email.into();
    }
}

impl RegistrationService {
    fn reset_signup_form(&self) {
        self.ctx.view_state.write().signup_form.reset();
        self.board_event_dispatcher
            .dispatch_event(BoardEvent::SignupFormReset);
    }

    fn show_failure(&self, action: &str, err: RequestError, transport_failure_text: &str) {
        let text = match err {
            RequestError::Rejected { status, detail } => {
                warn!("Server rejected {action} with status {status}.");
                detail
                    .filter(|detail| !detail.is_empty())
                    .unwrap_or_else(|| GENERIC_REJECTION_TEXT.to_string())
            }
            err @ (RequestError::Transport(_) | RequestError::Malformed(_)) => {
                error!("Error {action}: {err}");
                transport_failure_text.to_string()
            }
        };

        self.status.show(StatusMessage::error(text));
    }
}
