//! HTTP/REST API layer for Bookstack.
//!
//! Axum-based REST API serving `/books` with CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
