// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use url::Url;

use crate::domain::activities::models::{ActivityName, EmailAddress};
use crate::domain::shared::models::RequestError;

const ACTIVITIES_PATH: &str = "activities";
const SIGNUP_ACTION: &str = "signup";
const UNREGISTER_ACTION: &str = "unregister";

pub(super) fn catalog_url(base_url: &Url) -> Result<Url, RequestError> {
    with_path(base_url, &[ACTIVITIES_PATH])
}

pub(super) fn signup_url(
    base_url: &Url,
    activity: &ActivityName,
    email: &EmailAddress,
) -> Result<Url, RequestError> {
    mutation_url(base_url, activity, SIGNUP_ACTION, email)
}

pub(super) fn unregister_url(
    base_url: &Url,
    activity: &ActivityName,
    email: &EmailAddress,
) -> Result<Url, RequestError> {
    mutation_url(base_url, activity, UNREGISTER_ACTION, email)
}

fn mutation_url(
    base_url: &Url,
    activity: &ActivityName,
    action: &str,
    email: &EmailAddress,
) -> Result<Url, RequestError> {
    let mut url = with_path(base_url, &[ACTIVITIES_PATH, activity.as_str(), action])?;
    url.query_pairs_mut()
        .clear()
        .append_pair("email", email.as_str());
    Ok(url)
}

/// Appends `segments` to the path of `base_url`. Each segment is percent-encoded, so a `/` in
/// an activity name can't escape its segment.
fn with_path(base_url: &Url, segments: &[&str]) -> Result<Url, RequestError> {
    let mut url = base_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| RequestError::Transport(format!("{base_url} cannot be used as a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
