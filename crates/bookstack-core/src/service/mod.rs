//! Business logic services.

pub mod book;
