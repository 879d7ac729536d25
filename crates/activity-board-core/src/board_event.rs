// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Tells the delegate which part of the view state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// The activity cards and the activity options were rebuilt.
    CatalogChanged,

    /// A status message was shown or hidden.
    StatusChanged,

    /// The signup form fields were cleared after a successful signup.
    SignupFormReset,
}
