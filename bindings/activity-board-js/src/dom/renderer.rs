// activity-board/activity-board-js
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::error;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlOptionElement};

use activity_board_core::dtos::{ActivityCard, CatalogView, ParticipantEntry, ViewState};
use activity_board_core::{ActivityBoard, ActivityBoardDelegate, BoardEvent};

use crate::error::DomError;

use super::Page;

pub const ACTIVITY_ATTRIBUTE: &str = "data-activity";
pub const EMAIL_ATTRIBUTE: &str = "data-email";
pub const DELETE_ICON_CLASS: &str = "delete-icon";

const HIDDEN_CLASS: &str = "hidden";

/// Mirrors the board's view state into the page.
pub struct DomRenderer {
    page: Page,
}

impl DomRenderer {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

impl ActivityBoardDelegate for DomRenderer {
    fn handle_event(&self, board: ActivityBoard, event: BoardEvent) {
        let view_state = board.view_state();

        let result = match event {
            BoardEvent::CatalogChanged => self.render_catalog(&view_state),
            BoardEvent::StatusChanged => self.render_status(&view_state),
            BoardEvent::SignupFormReset => {
                self.page.signup_form.reset();
                Ok(())
            }
        };

        if let Err(err) = result {
            error!("Failed to render {event:?}. {err}");
        }
    }
}

impl DomRenderer {
    fn render_catalog(&self, view_state: &ViewState) -> Result<(), DomError> {
        let list = &self.page.activities_list;
        list.set_inner_html("");

        match &view_state.catalog {
            CatalogView::Loading => (),
            CatalogView::Failed { message } => {
                let placeholder = self.element_with_text("p", message)?;
                list.append_child(&placeholder)?;
            }
            CatalogView::Loaded(cards) => {
                for card in cards {
                    list.append_child(&self.render_card(card)?)?;
                }
            }
        }

        let select = &self.page.activity_select;
        select.set_inner_html("");

        for option in &view_state.activity_options {
            let element = self
                .page
                .create_element("option")?
                .dyn_into::<HtmlOptionElement>()
                .map_err(|_| DomError::Js("Created option is not an option".to_string()))?;
            element.set_value(&option.value);
            element.set_text_content(Some(&option.label));
            select.append_child(&element)?;
        }

        Ok(())
    }

    fn render_card(&self, card: &ActivityCard) -> Result<Element, DomError> {
        let element = self.page.create_element("div")?;
        element.set_class_name("activity-card");

        element.append_child(&self.element_with_text("h4", card.name.as_str())?)?;
        element.append_child(&self.element_with_text("p", &card.description)?)?;
        element.append_child(&self.element_with_text("p", &card.schedule_text())?)?;
        element.append_child(&self.element_with_text("p", &card.availability_text())?)?;

        let title = self.element_with_text("p", ActivityCard::PARTICIPANTS_TITLE)?;
        title.set_class_name("participants-title");
        let badge = self.element_with_text("span", &card.participant_count().to_string())?;
        badge.set_class_name("participants-badge");
        title.append_child(&badge)?;
        element.append_child(&title)?;

        let list = self.page.create_element("ul")?;
        list.set_class_name("participants-list");
        for entry in &card.participants {
            list.append_child(&self.render_participant(card, entry)?)?;
        }
        element.append_child(&list)?;

        Ok(element)
    }

    fn render_participant(
        &self,
        card: &ActivityCard,
        entry: &ParticipantEntry,
    ) -> Result<Element, DomError> {
        let item = self.page.create_element("li")?;

        let ParticipantEntry::Participant { email } = entry else {
            item.set_text_content(Some(entry.label()));
            item.set_class_name("muted");
            return Ok(item);
        };

        item.append_child(&self.element_with_text("span", email.as_str())?)?;

        let control =
            self.element_with_text("span", ParticipantEntry::UNREGISTER_CONTROL_TEXT)?;
        control.set_class_name(DELETE_ICON_CLASS);
        control.set_attribute("title", ParticipantEntry::UNREGISTER_CONTROL_TITLE)?;
        control.set_attribute(ACTIVITY_ATTRIBUTE, card.name.as_str())?;
        control.set_attribute(EMAIL_ATTRIBUTE, email.as_str())?;
        item.append_child(&control)?;

        Ok(item)
    }

    fn render_status(&self, view_state: &ViewState) -> Result<(), DomError> {
        let message = &self.page.message;

        let Some(status) = &view_state.status else {
            message.class_list().add_1(HIDDEN_CLASS)?;
            return Ok(());
        };

        message.set_text_content(Some(&status.text));
        message.set_class_name(status.kind.as_ref());
        if !status.visible {
            message.class_list().add_1(HIDDEN_CLASS)?;
        }

        Ok(())
    }

    fn element_with_text(&self, tag: &str, text: &str) -> Result<Element, DomError> {
        let element = self.page.create_element(tag)?;
        element.set_text_content(Some(text));
        Ok(element)
    }
}
