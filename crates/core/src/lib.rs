//! Core forecasting logic for Savvy.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Records arrive already materialized from a [`transaction::TransactionRepository`];
//! nothing here performs I/O or keeps state between calls.
//!
//! # Modules
//!
//! - `transaction` - Transaction records, boundary validation, and the record store seam
//! - `forecast` - Monthly aggregation and the linear trend forecast
//! - `prediction` - Request-level orchestration (filtering, error exits)

pub mod forecast;
pub mod prediction;
pub mod transaction;
