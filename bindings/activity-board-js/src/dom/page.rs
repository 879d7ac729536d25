// activity-board/activity-board-js
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use crate::error::DomError;

const ACTIVITIES_LIST_ID: &str = "activities-list";
const ACTIVITY_SELECT_ID: &str = "activity";
const EMAIL_INPUT_ID: &str = "email";
const SIGNUP_FORM_ID: &str = "signup-form";
const MESSAGE_ID: &str = "message";

/// The elements of the page the board renders into.
#[derive(Clone)]
pub struct Page {
    pub document: Document,
    pub activities_list: Element,
    pub activity_select: HtmlSelectElement,
    pub email_input: HtmlInputElement,
    pub signup_form: HtmlFormElement,
    pub message: Element,
}

impl Page {
    pub fn lookup() -> Result<Self, DomError> {
        let document = web_sys::window()
            .ok_or(DomError::NoWindow)?
            .document()
            .ok_or(DomError::NoDocument)?;

        Ok(Page {
            activities_list: element(&document, ACTIVITIES_LIST_ID)?,
            activity_select: typed_element(&document, ACTIVITY_SELECT_ID, "select")?,
            email_input: typed_element(&document, EMAIL_INPUT_ID, "input")?,
            signup_form: typed_element(&document, SIGNUP_FORM_ID, "form")?,
            message: element(&document, MESSAGE_ID)?,
            document,
        })
    }

    pub fn create_element(&self, tag: &str) -> Result<Element, DomError> {
        Ok(self.document.create_element(tag)?)
    }
}

fn element(document: &Document, id: &'static str) -> Result<Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement(id))
}

fn typed_element<T: JsCast>(
    document: &Document,
    id: &'static str,
    expected: &'static str,
) -> Result<T, DomError> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| DomError::UnexpectedElement { id, expected })
}
