//! Infrastructure layer for Bookstack.
//!
//! Contains the implementation of the repository trait defined in
//! `bookstack-core`: SQLite storage via sqlx with split read/write pools.

pub mod sqlite;
