//! SQLite storage backend implementation.
//!
//! This module implements the repository traits from `storekeep_core`
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for
//! async wrapping.

mod conversions;
mod error;
mod executor;
mod repository;
mod schema;

pub use repository::SqliteRepository;
