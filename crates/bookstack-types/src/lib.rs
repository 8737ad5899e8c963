//! Shared domain types for Bookstack.
//!
//! This crate contains the core domain types used across the service:
//! Book, BookDraft, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod book;
pub mod error;
