// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Deserialize;
use serde_json::Value;

use crate::domain::activities::models::ActivityCatalog;
use crate::domain::shared::models::RequestError;

#[derive(Deserialize)]
struct ConfirmationBody {
    message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

pub(super) fn parse_catalog(status: u16, body: &str) -> Result<ActivityCatalog, RequestError> {
    if !is_success(status) {
        return Err(rejection(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

pub(super) fn parse_confirmation(status: u16, body: &str) -> Result<String, RequestError> {
    if !is_success(status) {
        return Err(rejection(status, body));
    }
    Ok(serde_json::from_str::<ConfirmationBody>(body)?.message)
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Anything but a textual `detail` leaves the rejection without detail.
fn rejection(status: u16, body: &str) -> RequestError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| match body.detail {
            Some(Value::String(detail)) => Some(detail),
            _ => None,
        });

    RequestError::Rejected { status, detail }
}
