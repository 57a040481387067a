//! Core domain logic for the storekeep project.
//!
//! This crate holds the pure parts of the data-access layer: the commerce
//! domain types, the pricing derivation applied when an order is created,
//! and the storage contract (repository traits and errors) that backend
//! crates implement. It performs no I/O.

pub mod commerce;
pub mod storage;
