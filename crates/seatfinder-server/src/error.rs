use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Floor plan unavailable: {0}")]
    ImageUnavailable(String),

    #[error("Guest data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<seatfinder_shared::MapError> for ServerError {
    fn from(e: seatfinder_shared::MapError) -> Self {
        ServerError::Internal(e.to_string())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::ImageUnavailable(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ServerError::DataUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string())
            }
            ServerError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = serde_json::json!({
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
