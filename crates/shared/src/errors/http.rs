use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Internal(String),
}

// Service failures are logged here and collapse into an opaque 500.
impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match &err {
            ServiceError::Repo(repo_err) => {
                error!("❌ Failed to read orders from storage: {repo_err}");
            }
            ServiceError::Client(client_err) => {
                error!("❌ Restaurant lookup failed: {client_err}");
            }
            ServiceError::RestaurantNotFound(id) => {
                error!("❌ Order references restaurant {id} missing from lookup");
            }
        }

        HttpError::Internal("Internal server error".into())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}
