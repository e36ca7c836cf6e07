use axum::{
    http::{header::CONTENT_TYPE, Method, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::pages::{not_found_html, CONTENT_TYPE_HTML};

/// Request outcomes that are not a served artifact
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No route matched; also covers unknown checksum suffixes and
    /// mismatched artifact names
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method {0} not supported")]
    MethodNotSupported(Method),
}

impl RepositoryError {
    pub fn status(&self) -> StatusCode {
        match self {
            RepositoryError::NotFound(_) => StatusCode::NOT_FOUND,
            RepositoryError::MethodNotSupported(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RepositoryError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            RepositoryError::NotFound(path) => (
                status,
                [(CONTENT_TYPE, CONTENT_TYPE_HTML)],
                not_found_html(&path),
            )
                .into_response(),
            RepositoryError::MethodNotSupported(_) => status.into_response(),
        }
    }
}
