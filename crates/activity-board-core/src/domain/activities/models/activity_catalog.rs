// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Activity, ActivityName};

/// All activities as known to the server at the time of the request, in the order of the
/// response document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityCatalog(IndexMap<ActivityName, Activity>);

impl ActivityCatalog {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActivityName, &Activity)> {
        self.0.iter()
    }
}

impl<N: Into<ActivityName>> FromIterator<(N, Activity)> for ActivityCatalog {
    fn from_iter<T: IntoIterator<Item = (N, Activity)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, activity)| (name.into(), activity))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_preserves_server_order() -> anyhow::Result<()> {
        let catalog = serde_json::from_str::<ActivityCatalog>(
            r#"{
                "Programming Class": {"description":"","schedule":"","max_participants":20,"participants":[]},
                "Chess Club": {"description":"","schedule":"","max_participants":12,"participants":[]},
                "Art Studio": {"description":"","schedule":"","max_participants":15,"participants":[]}
            }"#,
        )?;

        assert_eq!(
            catalog.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
            vec!["Programming Class", "Chess Club", "Art Studio"]
        );
        Ok(())
    }
}
