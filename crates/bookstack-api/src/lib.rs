//! Application layer for Bookstack: REST API and state wiring.
//!
//! Exposed as a library so integration tests can build the router against a
//! throwaway database.

pub mod http;
pub mod state;
