//! Common types used across the application.

pub mod id;
pub mod period;

pub use id::TransactionId;
pub use period::{PeriodParseError, YearMonth};
