// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{debug, error, info, instrument};

use crate::app::deps::{
    AppDependencies, DynActivitiesApi, DynAppContext, DynBoardEventDispatcher,
};
use crate::BoardEvent;

/// Fetches the catalog and renders it into the view state.
#[derive(Clone)]
pub struct CatalogService {
    activities_api: DynActivitiesApi,
    board_event_dispatcher: DynBoardEventDispatcher,
    ctx: DynAppContext,
}

impl From<&AppDependencies> for CatalogService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            activities_api: deps.activities_api.clone(),
            board_event_dispatcher: deps.board_event_dispatcher.clone(),
            ctx: deps.ctx.clone(),
        }
    }
}

impl CatalogService {
    /// Replaces the rendered catalog with the server's current one. Failures are rendered as
    /// a placeholder and never returned.
    #[instrument(skip(self))]
    pub async fn load_activities(&self) {
        let ticket = self.ctx.next_catalog_request();
        let result = self.activities_api.load_catalog().await;

        {
            let mut view_state = self.ctx.view_state.write();

            if !self.ctx.is_latest_catalog_request(ticket) {
                debug!("Discarding catalog response {ticket} since a newer request was issued.");
                return;
            }

            match result {
                Ok(catalog) => {
                    info!("Loaded {} activities.", catalog.len());
                    view_state.render_catalog(&catalog);
                }
                Err(err) => {
                    error!("Error fetching activities: {err}");
                    view_state.render_load_failure();
                }
            }
        }

        self.board_event_dispatcher
            .dispatch_event(BoardEvent::CatalogChanged);
    }
}
