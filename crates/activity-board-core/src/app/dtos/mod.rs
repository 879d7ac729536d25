// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use url::Url;

pub use crate::domain::{
    activities::models::{Activity, ActivityCatalog, ActivityName, EmailAddress},
    shared::models::RequestError,
    view::models::{
        ActivityCard, CatalogView, ParticipantEntry, SelectOption, SignupForm, StatusKind,
        StatusMessage, ViewState,
    },
};
