// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::activities::models::{Activity, ActivityName, EmailAddress};

/// The rendered form of a single activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: ActivityName,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantEntry {
    /// A registered participant. Rendered with an unregister control.
    Participant { email: EmailAddress },
    /// Stands in for an empty roster.
    Placeholder,
}

impl ActivityCard {
    pub const PARTICIPANTS_TITLE: &'static str = "Participants";

    pub fn new(name: ActivityName, activity: &Activity) -> Self {
        let participants = if activity.participants.is_empty() {
            vec![ParticipantEntry::Placeholder]
        } else {
            activity
                .participants
                .iter()
                .cloned()
                .map(|email| ParticipantEntry::Participant { email })
                .collect()
        };

        Self {
            name,
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    pub fn schedule_text(&self) -> String {
        format!("Schedule: {}", self.schedule)
    }

    pub fn availability_text(&self) -> String {
        format!("Availability: {} spots left", self.spots_left)
    }

    /// The number shown in the badge next to the participants title.
    pub fn participant_count(&self) -> usize {
        self.participant_emails().count()
    }

    /// The participants that carry an unregister control, in display order.
    pub fn participant_emails(&self) -> impl Iterator<Item = &EmailAddress> {
        self.participants.iter().filter_map(|entry| match entry {
            ParticipantEntry::Participant { email } => Some(email),
            ParticipantEntry::Placeholder => None,
        })
    }
}

impl ParticipantEntry {
    pub const PLACEHOLDER_TEXT: &'static str = "No participants yet";
    pub const UNREGISTER_CONTROL_TEXT: &'static str = "✕";
    pub const UNREGISTER_CONTROL_TITLE: &'static str = "Unregister participant";

    pub fn label(&self) -> &str {
        match self {
            ParticipantEntry::Participant { email } => email.as_str(),
            ParticipantEntry::Placeholder => Self::PLACEHOLDER_TEXT,
        }
    }

    pub fn has_unregister_control(&self) -> bool {
        matches!(self, ParticipantEntry::Participant { .. })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_roster_renders_single_placeholder() {
        let card = ActivityCard::new("Chess Club".into(), &Activity::new("", "", 12));

        assert_eq!(card.participants, vec![ParticipantEntry::Placeholder]);
        assert_eq!(card.participant_count(), 0);
        assert_eq!(
            card.participants
                .iter()
                .filter(|entry| entry.has_unregister_control())
                .count(),
            0
        );
        assert_eq!(card.participants[0].label(), "No participants yet");
    }

    #[test]
    fn test_renders_participants_in_server_order() {
        let activity = Activity::new("Learn chess", "Fridays, 3:30 PM - 5:00 PM", 12)
            .with_participants(["a@x.com", "b@x.com"]);
        let card = ActivityCard::new("Chess Club".into(), &activity);

        assert_eq!(card.participant_count(), 2);
        assert_eq!(
            card.participant_emails()
                .map(EmailAddress::as_str)
                .collect::<Vec<_>>(),
            vec!["a@x.com", "b@x.com"]
        );
        assert_eq!(card.schedule_text(), "Schedule: Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(card.availability_text(), "Availability: 10 spots left");
    }

    #[test]
    fn test_renders_negative_availability_literally() {
        let activity = Activity::new("", "", 0).with_participants(["a@x.com"]);
        let card = ActivityCard::new("Gym".into(), &activity);

        assert_eq!(card.spots_left, -1);
        assert_eq!(card.availability_text(), "Availability: -1 spots left");
    }
}
