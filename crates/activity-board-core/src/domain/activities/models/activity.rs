// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use super::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    pub max_participants: u32,
    /// Participants in the order the server returned them. A value that isn't a list is read
    /// as "no participants" instead of failing the whole catalog.
    #[serde(default, deserialize_with = "deserialize_participants")]
    pub participants: Vec<EmailAddress>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: vec![],
        }
    }

    pub fn with_participants<I, E>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EmailAddress>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Capacity minus the current roster size. Overbooked activities yield a negative number.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

fn deserialize_participants<'de, D>(deserializer: D) -> Result<Vec<EmailAddress>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        Value::Null => return Ok(vec![]),
        other => {
            warn!("Treating malformed participants {other} as an empty list.");
            return Ok(vec![]);
        }
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(email) => Some(EmailAddress::from(email)),
            other => {
                warn!("Skipping malformed participant entry {other}.");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_spots_left_goes_negative_when_overbooked() {
        let activity =
            Activity::new("Chess", "Fridays", 1).with_participants(["a@x.com", "b@x.com"]);
        assert_eq!(activity.spots_left(), -1);
    }

    #[test]
    fn test_deserializes_malformed_participants_as_empty() -> anyhow::Result<()> {
        let activity = serde_json::from_str::<Activity>(
            r#"{"description":"d","schedule":"s","max_participants":3,"participants":"nope"}"#,
        )?;
        assert_eq!(activity.participants, Vec::<EmailAddress>::new());
        assert_eq!(activity.spots_left(), 3);
        Ok(())
    }

    #[test]
    fn test_skips_non_string_participants() -> anyhow::Result<()> {
        let activity = serde_json::from_str::<Activity>(
            r#"{"max_participants":3,"participants":["a@x.com",12,null,"b@x.com"]}"#,
        )?;
        assert_eq!(
            activity,
            Activity::new("", "", 3).with_participants(["a@x.com", "b@x.com"])
        );
        Ok(())
    }

    #[test]
    fn test_rejects_missing_capacity() {
        assert!(serde_json::from_str::<Activity>(r#"{"participants":[]}"#).is_err());
    }
}
