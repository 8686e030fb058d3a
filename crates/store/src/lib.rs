//! Transaction record store.
//!
//! This crate provides:
//! - A JSON-file backed, in-memory implementation of `TransactionRepository`
//! - Store error types

pub mod error;
pub mod json;

pub use error::StoreError;
pub use json::JsonTransactionStore;
