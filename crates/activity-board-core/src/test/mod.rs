// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use mock_app_dependencies::MockAppDependencies;
pub use recording_delegate::RecordingDelegate;

mod mock_app_dependencies;

pub mod mock_data {
    use crate::dtos::{Activity, ActivityCatalog};

    /// A catalog resembling what the school's server hands out.
    pub fn catalog() -> ActivityCatalog {
        [
            (
                "Chess Club",
                Activity::new(
                    "Learn strategies and compete in chess tournaments",
                    "Fridays, 3:30 PM - 5:00 PM",
                    12,
                )
                .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
            ),
            (
                "Programming Class",
                Activity::new(
                    "Learn programming fundamentals and build software projects",
                    "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                    20,
                ),
            ),
            (
                "Gym Class",
                Activity::new(
                    "Physical education and sports activities",
                    "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                    1,
                )
                .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
            ),
        ]
        .into_iter()
        .collect()
    }

    /// `catalog()` after `email` signed up for the chess club.
    pub fn catalog_with_chess_participant(email: &str) -> ActivityCatalog {
        catalog()
            .iter()
            .map(|(name, activity)| {
                let mut activity = activity.clone();
                if name.as_str() == "Chess Club" {
                    activity.participants.push(email.into());
                }
                (name.clone(), activity)
            })
            .collect()
    }
}
