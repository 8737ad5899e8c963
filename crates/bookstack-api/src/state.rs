//! Application state wiring the service together.
//!
//! AppState holds the concrete service instance used by the REST API.
//! The service is generic over the repository trait, but AppState pins it to
//! the SQLite implementation. The pool is constructed once at process start
//! and dropped at shutdown; no global mutable connection state exists.

use std::sync::Arc;

use bookstack_core::service::book::BookService;
use bookstack_infra::sqlite::book::SqliteBookRepository;
use bookstack_infra::sqlite::pool::DatabasePool;

/// Concrete type alias for the service generic pinned to the infra implementation.
pub type ConcreteBookService = BookService<SqliteBookRepository>;

/// Shared application state holding the book service and pool.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<ConcreteBookService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to the database, wire the service.
    ///
    /// When `database_url` is `None`, the database lives under
    /// `BOOKSTACK_DATA_DIR` (falling back to `~/.bookstack`), and the
    /// directory is created if missing.
    pub async fn init(database_url: Option<String>) -> anyhow::Result<Self> {
        let db_url = match database_url {
            Some(url) => url,
            None => {
                let data_dir = resolve_data_dir();
                tokio::fs::create_dir_all(&data_dir).await?;
                format!(
                    "sqlite://{}?mode=rwc",
                    data_dir.join("bookstack.db").display()
                )
            }
        };

        let db_pool = DatabasePool::new(&db_url).await?;
        Ok(Self::from_pool(db_pool))
    }

    /// Wire the state from an already-open pool.
    pub fn from_pool(db_pool: DatabasePool) -> Self {
        let book_service = BookService::new(SqliteBookRepository::new(db_pool.clone()));
        Self {
            book_service: Arc::new(book_service),
            db_pool,
        }
    }
}

/// Resolve the data directory from `BOOKSTACK_DATA_DIR`, falling back to
/// `~/.bookstack`.
fn resolve_data_dir() -> std::path::PathBuf {
    match std::env::var("BOOKSTACK_DATA_DIR") {
        Ok(dir) => std::path::PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            std::path::PathBuf::from(home).join(".bookstack")
        }
    }
}
