// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use thiserror::Error;

/// The ways a request against the activities API can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never completed (network failure, aborted fetch, …).
    #[error("Request failed: {0}")]
    Transport(String),
    /// The server answered with a success status but a body we couldn't make sense of.
    #[error("Malformed response: {0}")]
    Malformed(String),
    /// The server answered with a non-success status. `detail` is taken from the error body
    /// if it had one.
    #[error("Request rejected with status {status}: {}", detail.as_deref().unwrap_or("<no detail>"))]
    Rejected { status: u16, detail: Option<String> },
}

impl RequestError {
    /// The text to show for a rejected request, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            RequestError::Rejected { detail, .. } => detail.as_deref(),
            RequestError::Transport(_) | RequestError::Malformed(_) => None,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return RequestError::Malformed(error.to_string());
        }
        RequestError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(error: serde_json::Error) -> Self {
        RequestError::Malformed(error.to_string())
    }
}
