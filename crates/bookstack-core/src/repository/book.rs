//! Book repository trait definition.

use bookstack_types::book::{Book, BookDraft, BookId};
use bookstack_types::error::RepositoryError;

/// Repository trait for book persistence.
///
/// Implementations live in bookstack-infra (e.g., SqliteBookRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait BookRepository: Send + Sync {
    /// Insert a new book. The store assigns the id; returns the stored record.
    fn insert(
        &self,
        draft: &BookDraft,
    ) -> impl std::future::Future<Output = Result<Book, RepositoryError>> + Send;

    /// Get a book by its id.
    fn get_by_id(
        &self,
        id: BookId,
    ) -> impl std::future::Future<Output = Result<Option<Book>, RepositoryError>> + Send;

    /// List every book in storage-defined order.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Book>, RepositoryError>> + Send;

    /// Overwrite every mutable field of the book with the given id.
    ///
    /// Returns `RepositoryError::NotFound` when no row has that id.
    fn update(
        &self,
        id: BookId,
        draft: &BookDraft,
    ) -> impl std::future::Future<Output = Result<Book, RepositoryError>> + Send;

    /// Permanently delete a book by id.
    ///
    /// Returns `RepositoryError::NotFound` when no row has that id.
    fn delete(
        &self,
        id: BookId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
