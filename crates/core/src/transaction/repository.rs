//! Record store seam.

use chrono::NaiveDate;
use thiserror::Error;

use super::types::TransactionRecord;

/// Errors a record store can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The store could not be reached or read.
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

/// Repository trait for transaction lookups.
///
/// This trait is implemented by the store crate. Implementations return fully
/// materialized records; the core never holds a live query.
pub trait TransactionRepository: Send + Sync {
    /// Lists every recorded transaction, in no particular order.
    fn list_all(&self) -> Result<Vec<TransactionRecord>, RepositoryError>;

    /// Lists transactions dated within `start..=end`, in no particular order.
    fn list_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionRecord>, RepositoryError>;
}
