// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use activity_card::{ActivityCard, ParticipantEntry};
pub use select_option::SelectOption;
pub use signup_form::SignupForm;
pub use status_message::{StatusKind, StatusMessage};
pub use view_state::{CatalogView, ViewState};

mod activity_card;
mod select_option;
mod signup_form;
mod status_message;
mod view_state;
