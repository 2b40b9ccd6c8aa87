use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use tracing::{error, warn};

/// Transport-level error: domain failures plus malformed requests.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    BadRequest(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Domain(err) => match err {
                DomainError::ValidationError(message) => (StatusCode::BAD_REQUEST, message.clone()),
                DomainError::DuplicateEmail(_) => (StatusCode::CONFLICT, err.to_string()),
                DomainError::CustomerNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
                // Storage details stay in the logs.
                DomainError::PersistenceError(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            error!(error = ?self, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
