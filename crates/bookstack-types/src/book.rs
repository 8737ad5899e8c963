use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Unique identifier for a book, wrapping the storage-assigned row id.
///
/// Ids are assigned by the store at insert time (auto-increment) and are
/// immutable for the lifetime of the record. Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(pub i64);

impl BookId {
    /// Create a BookId from a raw row id.
    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// The raw row id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A book record as stored and served.
///
/// The id is assigned by the store on insert and never changes. Every other
/// field is replaced wholesale by the update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    /// Optional; absent or null in payloads when unset.
    pub genre: Option<String>,
    /// Unique across all records, enforced by the store.
    pub isbn: String,
}

/// Write payload for create and update: a full book minus the id.
///
/// Deserialization is the validation contract -- a missing required field or
/// a type mismatch rejects the request before any storage work happens.
/// `genre` is the only optional field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub published_year: i32,
    #[serde(default)]
    pub genre: Option<String>,
    pub isbn: String,
}

impl BookDraft {
    /// Materialize a full record from this draft and a store-assigned id.
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            published_year: self.published_year,
            genre: self.genre,
            isbn: self.isbn,
        }
    }
}
