use crate::utils::AppError;
use axum::http::StatusCode;
use core::fmt;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod announcement;
pub mod topup;
pub mod user;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T: std::fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ApiResponse {{ status: {}, message: {}, data: {:?} }}",
            self.status, self.message, self.data
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    /// HTTP status the taxonomy tag in `status` translates to.
    pub fn status_code(&self) -> StatusCode {
        match self.status.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "conflict" => StatusCode::CONFLICT,
            "validation_error" => StatusCode::BAD_REQUEST,
            "unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        let (status, message) = match error {
            AppError::SqlxError(ref e) => {
                if matches!(
                    e,
                    sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed
                ) {
                    ("unavailable".to_string(), "Database unavailable".to_string())
                } else {
                    ("error".to_string(), "Database error occurred".to_string())
                }
            }
            AppError::NotFound(ref msg) => ("not_found".to_string(), msg.clone()),
            AppError::Conflict(ref msg) => ("conflict".to_string(), msg.clone()),
            AppError::ValidationError(ref errors) => {
                ("validation_error".to_string(), errors.to_string())
            }
            AppError::InternalError(ref msg) => ("error".to_string(), msg.clone()),
            AppError::Custom(ref msg) => ("error".to_string(), msg.clone()),
        };
        ErrorResponse { status, message }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {}, Message: {}", self.status, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_tags_map_to_http_statuses() {
        let not_found = ErrorResponse::from(AppError::NotFound("missing".into()));
        assert_eq!(not_found.status, "not_found");
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let conflict = ErrorResponse::from(AppError::Conflict("settled".into()));
        assert_eq!(conflict.status, "conflict");
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let internal = ErrorResponse::from(AppError::Custom("boom".into()));
        assert_eq!(internal.status, "error");
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn connectivity_failures_map_to_unavailable() {
        let err = ErrorResponse::from(AppError::SqlxError(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status, "unavailable");
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let err = ErrorResponse::from(AppError::SqlxError(sqlx::Error::RowNotFound));
        assert_eq!(err.status, "error");
    }

    #[test]
    fn not_found_message_is_preserved() {
        let err = ErrorResponse::from(AppError::NotFound("Topup with ID 7 not found".into()));
        assert_eq!(err.message, "Topup with ID 7 not found");
    }
}
