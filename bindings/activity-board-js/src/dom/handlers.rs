// activity-board/activity-board-js
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use activity_board_core::ActivityBoard;

use crate::error::DomError;

use super::renderer::{ACTIVITY_ATTRIBUTE, DELETE_ICON_CLASS, EMAIL_ATTRIBUTE};
use super::{EventListener, Page};

/// Submits the signup form through the board instead of navigating away.
pub fn bind_signup_form(board: &ActivityBoard, page: &Page) -> Result<EventListener, DomError> {
    let board = board.clone();
    let page_ref = page.clone();

    EventListener::new(&page.signup_form, "submit", move |event: Event| {
        event.prevent_default();
        submit_signup(&board, &page_ref);
    })
}

/// Handles clicks on every unregister control inside the activities list, including the ones
/// rendered after this listener was registered.
pub fn bind_unregister_controls(
    board: &ActivityBoard,
    page: &Page,
) -> Result<EventListener, DomError> {
    let board = board.clone();

    EventListener::new(&page.activities_list, "click", move |event: Event| {
        let Some(control) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .filter(|element| element.class_list().contains(DELETE_ICON_CLASS))
        else {
            return;
        };

        match (
            control.get_attribute(ACTIVITY_ATTRIBUTE),
            control.get_attribute(EMAIL_ATTRIBUTE),
        ) {
            (Some(activity), Some(email)) => unregister_participant(&board, activity, email),
            _ => warn!("Ignoring click on unregister control without participant."),
        }
    })
}

fn submit_signup(board: &ActivityBoard, page: &Page) {
    let activity = page.activity_select.value();
    let email = page.email_input.value();

    board.update_signup_form(activity.clone(), email.clone());

    let board = board.clone();
    spawn_local(async move { board.submit_signup(activity, email).await });
}

fn unregister_participant(board: &ActivityBoard, activity: String, email: String) {
    let board = board.clone();
    spawn_local(async move { board.submit_unregister(activity, email).await });
}
