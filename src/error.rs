use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const SERVER_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Expected outcome for a missing record, not logged as an error
            AppError::NotFound(name) => {
                (StatusCode::NOT_FOUND, format!("Not found: {name}")).into_response()
            }
            // Full detail goes to the log, clients only see a generic message
            AppError::Database(err) => {
                tracing::error!(err = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
            AppError::Template(err) => {
                tracing::error!(err = %err, "Template error");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
            AppError::Serialization(err) => {
                tracing::error!(err = %err, "Serialization error");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_not_found_body_includes_name() {
        let response = AppError::NotFound("Nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Not found: Nope");
    }

    #[tokio::test]
    async fn test_database_error_is_generic_500() {
        let response = AppError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(body, SERVER_ERROR_MESSAGE);
        assert!(!body.contains("PoolClosed"));
    }
}
