//! Book management service.
//!
//! Orchestrates the five CRUD operations over the repository port. Each call
//! is a single unit of work: one repository statement, mapped into the domain
//! error vocabulary. The service holds no state beyond the injected
//! repository.

use bookstack_types::book::{Book, BookDraft, BookId};
use bookstack_types::error::{BookError, RepositoryError};

use crate::repository::book::BookRepository;

/// Service orchestrating the book record lifecycle.
///
/// Generic over the repository trait to keep the core crate free of any
/// storage technology -- bookstack-core never depends on bookstack-infra.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    /// Create a new BookService backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new book. The store assigns a fresh id.
    ///
    /// A duplicate ISBN surfaces as `BookError::IsbnConflict`.
    pub async fn create_book(&self, draft: BookDraft) -> Result<Book, BookError> {
        self.repo.insert(&draft).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => BookError::IsbnConflict(draft.isbn.clone()),
            other => BookError::StorageError(other.to_string()),
        })
    }

    /// Get a book by id.
    pub async fn get_book(&self, id: BookId) -> Result<Book, BookError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(|e| BookError::StorageError(e.to_string()))?
            .ok_or(BookError::NotFound(id.as_i64()))
    }

    /// List every book in storage-defined order.
    pub async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        self.repo
            .list()
            .await
            .map_err(|e| BookError::StorageError(e.to_string()))
    }

    /// Replace every mutable field of an existing book.
    ///
    /// Full replace, not a partial patch: the draft must carry all required
    /// fields (enforced at deserialization, before this runs).
    pub async fn update_book(&self, id: BookId, draft: BookDraft) -> Result<Book, BookError> {
        self.repo.update(id, &draft).await.map_err(|e| match e {
            RepositoryError::NotFound => BookError::NotFound(id.as_i64()),
            RepositoryError::Conflict(_) => BookError::IsbnConflict(draft.isbn.clone()),
            other => BookError::StorageError(other.to_string()),
        })
    }

    /// Permanently delete a book by id.
    pub async fn delete_book(&self, id: BookId) -> Result<(), BookError> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => BookError::NotFound(id.as_i64()),
            other => BookError::StorageError(other.to_string()),
        })
    }
}
