//! Income and expense records consumed by the forecasting pipeline.

pub mod repository;
pub mod types;
pub mod validation;

pub use repository::{RepositoryError, TransactionRepository};
pub use types::{NewTransaction, TransactionKind, TransactionRecord};
pub use validation::{TransactionValidationError, validate_transaction};
