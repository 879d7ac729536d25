// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use activity_board_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::activities::models::{ActivityCatalog, ActivityName, EmailAddress};
use crate::domain::shared::models::RequestError;

/// The backend contract. Mutating calls resolve to the server's confirmation message.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ActivitiesApi: SendUnlessWasm + SyncUnlessWasm {
    async fn load_catalog(&self) -> Result<ActivityCatalog, RequestError>;

    async fn sign_up(
        &self,
        activity: &ActivityName,
        email: &EmailAddress,
    ) -> Result<String, RequestError>;

    async fn unregister(
        &self,
        activity: &ActivityName,
        email: &EmailAddress,
    ) -> Result<String, RequestError>;
}
