// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use activity::Activity;
pub use activity_catalog::ActivityCatalog;
pub use activity_name::ActivityName;
pub use email_address::EmailAddress;

mod activity;
mod activity_catalog;
mod activity_name;
mod email_address;
