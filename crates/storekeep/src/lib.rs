//! SQLite data-access layer for a small e-commerce backend.
//!
//! This crate owns the embedded relational store: it defines the schema for
//! the `users`, `orders`, and `cart` tables and implements the repository
//! traits from [`storekeep_core::storage`] on top of one SQLite connection.
//! Synchronous `rusqlite` calls are wrapped by `tokio-rusqlite` so every
//! operation presents a suspension point to callers, while the store itself
//! is accessed by one statement at a time.
//!
//! Construct a [`SqliteRepository`] at process start (the path usually comes
//! from [`Config::from_env`]) and pass it by reference into whatever serves
//! requests. Tests can use [`SqliteRepository::open_in_memory`] for an
//! isolated instance.

pub mod config;
pub mod storage;

pub use config::Config;
pub use storage::SqliteRepository;
