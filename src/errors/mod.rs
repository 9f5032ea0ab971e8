use std::io;
use axum::{http::StatusCode, response::{Html, IntoResponse, Response}};
use thiserror::Error;

use crate::components::TemplateComponent;

/// Custom error types for the wiki application
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("entry not found: {0}")]
    NotFound(String),
    #[error("entry already exists: {0}")]
    Conflict(String),
    #[error("the encyclopedia has no entries")]
    EmptyStore,
    #[error("invalid title: {0:?}")]
    InvalidTitle(String),
    #[error("invalid path")]
    InvalidPath,
    #[error("configuration error: {0}")]
    Config(String),
}

impl WikiError {
    /// Status code and user-facing message for the error page
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            WikiError::NotFound(_) => (StatusCode::NOT_FOUND, "Requested page not found."),
            WikiError::Conflict(_) => (
                StatusCode::CONFLICT,
                "Page with the same title already exists. Please try a different title.",
            ),
            WikiError::EmptyStore => (StatusCode::NOT_FOUND, "There are no entries yet."),
            WikiError::InvalidTitle(_) => (StatusCode::BAD_REQUEST, "That is not a valid page title."),
            WikiError::InvalidPath => (StatusCode::BAD_REQUEST, "Invalid path."),
            WikiError::Io(_) | WikiError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong while reading or writing the encyclopedia.",
            ),
        }
    }
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Request rejected with {}: {}", status.as_u16(), self);
        }

        let code = format!(
            "{}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error")
        );
        let page = TemplateComponent::new().render_error_page(&code, message);
        (status, Html(page)).into_response()
    }
}
