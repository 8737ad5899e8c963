//! Book CRUD handlers for the REST API.
//!
//! Bodies are validated by the `Json<BookDraft>` extractor: a missing
//! required field or type mismatch is rejected with 422 and a field-level
//! message before the handler body runs.

use axum::extract::{Path, State};
use axum::Json;

use bookstack_types::book::{Book, BookDraft, BookId};

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /books - List every book in storage-defined order.
pub async fn list_books(
    State(state): State<AppState>,
) -> Result<Json<Vec<Book>>, AppError> {
    let books = state.book_service.list_books().await?;
    Ok(Json(books))
}

/// GET /books/:id - Get a book by id.
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Book>, AppError> {
    let book = state.book_service.get_book(BookId::from_raw(id)).await?;
    Ok(Json(book))
}

/// POST /books - Create a new book; the store assigns the id.
pub async fn create_book(
    State(state): State<AppState>,
    Json(draft): Json<BookDraft>,
) -> Result<Json<Book>, AppError> {
    let book = state.book_service.create_book(draft).await?;
    tracing::info!(id = %book.id, isbn = %book.isbn, "book created");
    Ok(Json(book))
}

/// PUT /books/:id - Replace every mutable field of an existing book.
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<BookDraft>,
) -> Result<Json<Book>, AppError> {
    let book = state
        .book_service
        .update_book(BookId::from_raw(id), draft)
        .await?;
    Ok(Json(book))
}

/// DELETE /books/:id - Delete a book permanently.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.book_service.delete_book(BookId::from_raw(id)).await?;
    tracing::info!(id, "book deleted");
    Ok(Json(serde_json::json!({
        "message": format!("Book with ID {id} deleted")
    })))
}
