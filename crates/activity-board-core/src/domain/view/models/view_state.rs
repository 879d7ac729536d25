// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::activities::models::ActivityCatalog;

use super::{ActivityCard, SelectOption, SignupForm, StatusMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    /// Nothing was loaded yet.
    Loading,
    Loaded(Vec<ActivityCard>),
    /// The last load failed. `message` replaces the list of cards.
    Failed { message: String },
}

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub catalog: CatalogView,
    /// Always starts with the placeholder option.
    pub activity_options: Vec<SelectOption>,
    pub signup_form: SignupForm,
    pub status: Option<StatusMessage>,
}

impl ViewState {
    pub const LOAD_FAILURE_TEXT: &'static str =
        "Failed to load activities. Please try again later.";

    /// Replaces all cards and selection options with the contents of `catalog`.
    pub fn render_catalog(&mut self, catalog: &ActivityCatalog) {
        self.catalog = CatalogView::Loaded(
            catalog
                .iter()
                .map(|(name, activity)| ActivityCard::new(name.clone(), activity))
                .collect(),
        );
        self.activity_options = std::iter::once(SelectOption::placeholder())
            .chain(catalog.iter().map(|(name, _)| SelectOption::from(name)))
            .collect();
    }

    /// Replaces the cards with the failure placeholder. The selection options are left alone.
    pub fn render_load_failure(&mut self) {
        self.catalog = CatalogView::Failed {
            message: Self::LOAD_FAILURE_TEXT.to_string(),
        };
    }

    /// The rendered cards, empty unless a catalog was loaded successfully.
    pub fn cards(&self) -> &[ActivityCard] {
        match &self.catalog {
            CatalogView::Loaded(cards) => cards,
            CatalogView::Loading | CatalogView::Failed { .. } => &[],
        }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|card| card.name.as_str() == name)
    }

    pub fn is_status_visible(&self) -> bool {
        self.status.as_ref().map_or(false, |status| status.visible)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            catalog: CatalogView::Loading,
            activity_options: vec![SelectOption::placeholder()],
            signup_form: Default::default(),
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::domain::activities::models::Activity;

    use super::*;

    fn catalog() -> ActivityCatalog {
        [
            (
                "Chess Club",
                Activity::new("Strategy", "Fridays", 12).with_participants(["a@x.com"]),
            ),
            ("Gym Class", Activity::new("Sports", "Mondays", 30)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_rendering_twice_yields_one_card_per_activity() {
        let catalog = catalog();
        let mut state = ViewState::default();

        state.render_catalog(&catalog);
        state.render_catalog(&catalog);

        assert_eq!(state.cards().len(), 2);
        assert_eq!(state.activity_options.len(), 3);
        assert!(state.activity_options[0].is_placeholder());
        assert_eq!(
            state
                .activity_options
                .iter()
                .skip(1)
                .map(|option| option.value.as_str())
                .collect::<Vec<_>>(),
            vec!["Chess Club", "Gym Class"]
        );
    }

    #[test]
    fn test_load_failure_replaces_cards_but_keeps_options() {
        let mut state = ViewState::default();
        state.render_catalog(&catalog());
        state.render_load_failure();

        assert_eq!(
            state.catalog,
            CatalogView::Failed {
                message: "Failed to load activities. Please try again later.".to_string()
            }
        );
        assert!(state.cards().is_empty());
        assert_eq!(state.activity_options.len(), 3);
    }

    #[test]
    fn test_empty_catalog_keeps_placeholder_option() {
        let mut state = ViewState::default();
        state.render_catalog(&ActivityCatalog::default());

        assert_eq!(state.catalog, CatalogView::Loaded(vec![]));
        assert_eq!(state.activity_options, vec![SelectOption::placeholder()]);
    }
}
