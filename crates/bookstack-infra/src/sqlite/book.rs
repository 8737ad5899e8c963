//! SQLite book repository implementation.
//!
//! Implements `BookRepository` from `bookstack-core` using sqlx with split
//! read/write pools. Each statement runs on a pooled connection scoped to
//! that call; the connection returns to the pool on every exit path.

use bookstack_core::repository::book::BookRepository;
use bookstack_types::book::{Book, BookDraft, BookId};
use bookstack_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `BookRepository`.
pub struct SqliteBookRepository {
    pool: DatabasePool,
}

impl SqliteBookRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain Book.
struct BookRow {
    id: i64,
    title: String,
    author: String,
    published_year: i32,
    genre: Option<String>,
    isbn: String,
}

impl BookRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            author: row.try_get("author")?,
            published_year: row.try_get("published_year")?,
            genre: row.try_get("genre")?,
            isbn: row.try_get("isbn")?,
        })
    }

    fn into_book(self) -> Book {
        Book {
            id: BookId::from_raw(self.id),
            title: self.title,
            author: self.author,
            published_year: self.published_year,
            genre: self.genre,
            isbn: self.isbn,
        }
    }
}

impl BookRepository for SqliteBookRepository {
    async fn insert(&self, draft: &BookDraft) -> Result<Book, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO books (title, author, published_year, genre, isbn)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(draft.published_year)
        .bind(&draft.genre)
        .bind(&draft.isbn)
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(done) => {
                let id = BookId::from_raw(done.last_insert_rowid());
                Ok(draft.clone().into_book(id))
            }
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => {
                Err(RepositoryError::Conflict(format!(
                    "isbn '{}' already exists",
                    draft.isbn
                )))
            }
            Err(e) => Err(RepositoryError::Query(e.to_string())),
        }
    }

    async fn get_by_id(&self, id: BookId) -> Result<Option<Book>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM books WHERE id = ?")
            .bind(id.as_i64())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let book_row =
                    BookRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(book_row.into_book()))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Book>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM books")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut books = Vec::with_capacity(rows.len());
        for row in &rows {
            let book_row =
                BookRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            books.push(book_row.into_book());
        }

        Ok(books)
    }

    async fn update(&self, id: BookId, draft: &BookDraft) -> Result<Book, RepositoryError> {
        let result = sqlx::query(
            "UPDATE books SET title = ?, author = ?, published_year = ?, genre = ?, isbn = ?
             WHERE id = ?",
        )
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(draft.published_year)
        .bind(&draft.genre)
        .bind(&draft.isbn)
        .bind(id.as_i64())
        .execute(&self.pool.writer)
        .await;

        let result = match result {
            Ok(done) => done,
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => {
                return Err(RepositoryError::Conflict(format!(
                    "isbn '{}' already exists",
                    draft.isbn
                )));
            }
            Err(e) => return Err(RepositoryError::Query(e.to_string())),
        };

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(draft.clone().into_book(id))
    }

    async fn delete(&self, id: BookId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
