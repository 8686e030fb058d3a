//! Shared types, errors, and configuration for Savvy.
//!
//! This crate provides common types used across all other crates:
//! - Calendar month (`YearMonth`) used as the aggregation key
//! - Typed transaction IDs
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use self::config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::{PeriodParseError, TransactionId, YearMonth};
