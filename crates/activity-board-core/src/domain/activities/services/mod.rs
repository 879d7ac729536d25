// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use activities_api::ActivitiesApi;

mod activities_api;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::activities_api::MockActivitiesApi;
}
