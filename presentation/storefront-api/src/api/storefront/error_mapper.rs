use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::FetchFailed => (StatusCode::BAD_GATEWAY, "CatalogUnavailable"),
            ProductError::CreateFailed => (StatusCode::BAD_GATEWAY, "CreateFailed"),
            ProductError::InvalidForm(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::FormClosed => (StatusCode::CONFLICT, "FormClosed"),
        };

        (status, Json(ErrorResponse::new(name, self.user_message())))
    }
}
