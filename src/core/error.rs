use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Validation failures and duplicate natural keys
    pub fn unprocessable_entity(message: &'static str) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::unprocessable_entity("Resource already exists")
                    .with_details(db_err.message().to_string())
            }

            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                Self::unprocessable_entity("Referenced resource constraint violated")
                    .with_details(db_err.message().to_string())
            }

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::service_unavailable("Database unavailable")
            }

            other => {
                error!("Unexpected database error: {:?}", other);
                Self::internal_server_error("Internal server error")
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::bad_request("Validation error").with_details(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.message,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}
