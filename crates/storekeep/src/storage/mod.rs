//! Storage backend implementations.
//!
//! This module provides the concrete implementation of the repository
//! traits defined in `storekeep_core::storage`, backed by an embedded
//! SQLite database file.

pub mod sqlite;

pub use sqlite::SqliteRepository;
