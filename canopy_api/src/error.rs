// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by the tree service contract.

use canopy_layout::LayoutError;

use crate::wire::ErrorBody;

/// Result alias for collaborator calls.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;

/// Failures of a [`TreeApi`](crate::TreeApi) call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input was rejected: empty or unsafe name, no values, bad page size.
    #[error("{0}")]
    Validation(String),
    /// No tree with this id.
    #[error("tree `{0}` not found")]
    NotFound(String),
    /// The request did not complete, or the service answered with an error.
    #[error("{0}")]
    Transport(String),
    /// A response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The snapshot could not be laid out.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl ApiError {
    /// Map an HTTP error response onto the contract's error kinds.
    ///
    /// The service puts a human-readable `message` in its JSON error bodies.
    /// `404` becomes [`ApiError::NotFound`] for `id`, `400` and `422` become
    /// [`ApiError::Validation`], anything else is [`ApiError::Transport`].
    pub fn from_response(status: u16, body: &str, id: Option<&str>) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        match status {
            404 => Self::NotFound(id.map_or_else(|| message.unwrap_or_default(), str::to_owned)),
            400 | 422 => Self::Validation(message.unwrap_or_else(|| format!("request rejected ({status})"))),
            _ => Self::Transport(message.unwrap_or_else(|| format!("request failed with status {status}"))),
        }
    }

    /// Text for the error banner, falling back to `fallback` when there is
    /// nothing more specific to say.
    pub fn user_message(&self, fallback: &str) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            fallback.to_owned()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_message_wins() {
        let err = ApiError::from_response(400, r#"{"message":"Values must not be empty"}"#, None);
        assert!(matches!(&err, ApiError::Validation(m) if m == "Values must not be empty"));
        assert_eq!(err.user_message("Error creating tree"), "Values must not be empty");
    }

    #[test]
    fn not_found_carries_the_id() {
        let err = ApiError::from_response(404, "", Some("42"));
        assert!(matches!(&err, ApiError::NotFound(id) if id == "42"));
        assert_eq!(err.to_string(), "tree `42` not found");
    }

    #[test]
    fn unknown_status_without_body_is_transport() {
        let err = ApiError::from_response(502, "<html>bad gateway</html>", None);
        assert_eq!(err.to_string(), "request failed with status 502");
    }

    #[test]
    fn empty_message_uses_fallback() {
        let err = ApiError::Transport(String::new());
        assert_eq!(err.user_message("Failed to load tree"), "Failed to load tree");
    }
}
