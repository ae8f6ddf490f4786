//! HTTP translation of [`ServiceError`].
//!
//! Every error response is a JSON `{message}` body. Unexpected failures are
//! logged with their cause and reported to the client as "Server error".

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::MessageResponse;
use tracing::error;

use crate::domain::ServiceError;

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::Conflict(_) | ServiceError::Auth(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let ServiceError::Unexpected(cause) = &self {
            error!("Unexpected error: {:?}", cause);
        }

        let status = self.status_code();
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

/// Malformed or mistyped JSON bodies are client errors
impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}
