use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Body of every non-2xx answer
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error kind, e.g. "CatalogUnavailable"
    pub name: String,
    /// Message meant for the end user
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
