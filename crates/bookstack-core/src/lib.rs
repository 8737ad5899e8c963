//! Business logic and repository trait definitions for Bookstack.
//!
//! This crate defines the "port" (repository trait) that the infrastructure
//! layer implements. It depends only on `bookstack-types` -- never on
//! `bookstack-infra` or any database/IO crate.

pub mod repository;
pub mod service;
