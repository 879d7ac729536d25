// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::util::name_string;

name_string!(
    /// A participant's email address. Validation happens in the browser's form controls, the
    /// server owns uniqueness.
    EmailAddress
);
