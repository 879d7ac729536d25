// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use catalog_service::CatalogService;
pub use registration_service::RegistrationService;
pub use status_service::StatusService;

mod catalog_service;
mod registration_service;
mod status_service;
