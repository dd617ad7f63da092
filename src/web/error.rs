use crate::error::PromptlogError;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Error returned from request handlers
///
/// Rendered as a plain-text body with the status picked from the
/// underlying [`PromptlogError`]: rejected input is a 400, everything else
/// a 500 carrying the full error chain.
#[derive(Debug)]
pub struct WebError {
    status: StatusCode,
    message: String,
}

impl WebError {
    /// Build an error with an explicit status
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Wrap a failure with a description of the operation that failed
    pub fn with_context(action: &str, err: anyhow::Error) -> Self {
        let mut web = Self::from(err);
        if web.status.is_server_error() {
            web.message = format!("{}: {}", action, web.message);
        }
        web
    }

    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response body text
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<anyhow::Error> for WebError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<PromptlogError>() {
            Some(domain) if domain.is_client_error() => {
                Self::new(StatusCode::BAD_REQUEST, domain.to_string())
            }
            _ => Self::new(StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err)),
        }
    }
}

// Extractor rejections are always the client's fault
impl From<FormRejection> for WebError {
    fn from(rejection: FormRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<QueryRejection> for WebError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "Request failed");
        } else {
            tracing::warn!(status = %self.status, message = %self.message, "Request rejected");
        }
        (self.status, self.message).into_response()
    }
}
