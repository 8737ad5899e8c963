//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use bookstack_types::error::BookError;

/// Application-level error that maps to HTTP responses.
///
/// Validation failures never reach this type: malformed bodies are rejected
/// by the `Json` extractor with 422 before the handler runs.
#[derive(Debug)]
pub enum AppError {
    /// Book-related errors.
    Book(BookError),
    /// Generic internal error.
    Internal(String),
}

impl From<BookError> for AppError {
    fn from(e: BookError) -> Self {
        AppError::Book(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Book(e @ BookError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND", e.to_string())
            }
            AppError::Book(e @ BookError::IsbnConflict(_)) => {
                (StatusCode::CONFLICT, "ISBN_CONFLICT", e.to_string())
            }
            AppError::Book(e @ BookError::StorageError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", e.to_string())
            }
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        let body = json!({
            "code": code,
            "message": message,
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let resp = AppError::Book(BookError::NotFound(5)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let resp = AppError::Book(BookError::IsbnConflict("0001".into())).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_storage_maps_to_500() {
        let resp = AppError::Book(BookError::StorageError("disk full".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
