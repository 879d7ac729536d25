// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::util::name_string;

name_string!(
    /// The unique key of an activity as used by the server, e.g. "Chess Club".
    ActivityName
);
