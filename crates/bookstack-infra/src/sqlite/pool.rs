//! Database pool with split reader/writer connections in WAL mode.
//!
//! SQLite allows only one writer at a time. This module provides a
//! `DatabasePool` with a multi-connection reader pool for concurrent reads
//! and a single-connection writer pool for serialized writes. Both use WAL
//! journal mode.
//!
//! After migrations run, the live `books` table is checked against the
//! declared column mapping and startup fails fast on any mismatch.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;

/// Expected `books` columns: (name, declared type, NOT NULL).
///
/// This is the single mapping between entity fields and storage columns.
/// `id` reports NOT NULL = false in `PRAGMA table_info` because SQLite
/// treats INTEGER PRIMARY KEY as implicitly non-null.
const BOOK_COLUMNS: &[(&str, &str, bool)] = &[
    ("id", "INTEGER", false),
    ("title", "TEXT", true),
    ("author", "TEXT", true),
    ("published_year", "INTEGER", true),
    ("genre", "TEXT", false),
    ("isbn", "TEXT", true),
];

/// Split read/write pool for SQLite with WAL mode.
///
/// - `reader`: Multi-connection pool (up to 8) for concurrent SELECT queries.
/// - `writer`: Single-connection pool for serialized INSERT/UPDATE/DELETE.
#[derive(Clone, Debug)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Create a new DatabasePool with split reader/writer connections.
    ///
    /// Runs migrations on the writer pool, then verifies the `books` table
    /// against [`BOOK_COLUMNS`]. Both pools use WAL journal mode and a
    /// 5-second busy timeout.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let base_opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .create_if_missing(true);

        let read_opts = base_opts.clone().read_only(true);
        let write_opts = base_opts;

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(write_opts)
            .await?;

        // Run migrations on writer before opening reader pool
        sqlx::migrate!("../../migrations")
            .run(&writer)
            .await?;

        verify_books_schema(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(read_opts)
            .await?;

        Ok(Self { reader, writer })
    }
}

/// Check the live `books` table against the declared column mapping.
///
/// Compares column name, declared type, and NOT NULL flag, in order. Any
/// divergence aborts startup with a configuration error naming the mismatch.
async fn verify_books_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let rows = sqlx::query("PRAGMA table_info(books)")
        .fetch_all(pool)
        .await?;

    let mismatch = |msg: String| sqlx::Error::Configuration(msg.into());

    if rows.len() != BOOK_COLUMNS.len() {
        return Err(mismatch(format!(
            "books table has {} columns, expected {}",
            rows.len(),
            BOOK_COLUMNS.len()
        )));
    }

    for (row, (name, ty, not_null)) in rows.iter().zip(BOOK_COLUMNS) {
        let actual_name: String = row.try_get("name")?;
        let actual_type: String = row.try_get("type")?;
        let actual_not_null: i64 = row.try_get("notnull")?;

        if actual_name != *name {
            return Err(mismatch(format!(
                "books column '{actual_name}' where '{name}' was expected"
            )));
        }
        if !actual_type.eq_ignore_ascii_case(ty) {
            return Err(mismatch(format!(
                "books column '{name}' has type '{actual_type}', expected '{ty}'"
            )));
        }
        if (actual_not_null != 0) != *not_null {
            return Err(mismatch(format!(
                "books column '{name}' NOT NULL flag is {}, expected {}",
                actual_not_null != 0,
                not_null
            )));
        }
    }

    Ok(())
}

/// Returns the default database URL based on `BOOKSTACK_DATA_DIR` env var,
/// falling back to `~/.bookstack/bookstack.db`.
pub fn default_database_url() -> String {
    let data_dir = std::env::var("BOOKSTACK_DATA_DIR").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        format!("{home}/.bookstack")
    });
    format!("sqlite://{data_dir}/bookstack.db")
}
