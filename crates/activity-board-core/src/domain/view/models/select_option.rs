// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::activities::models::ActivityName;

/// An option of the activity selection backing the signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub const PLACEHOLDER_LABEL: &'static str = "-- Select an activity --";

    /// The leading "no activity selected" option.
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: Self::PLACEHOLDER_LABEL.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<&ActivityName> for SelectOption {
    fn from(name: &ActivityName) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}
