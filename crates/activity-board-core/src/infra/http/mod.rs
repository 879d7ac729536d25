// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use rest_activities_api::RestActivitiesApi;

mod endpoints;
mod responses;
mod rest_activities_api;
