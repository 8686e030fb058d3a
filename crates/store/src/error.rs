//! Store error types.

use std::path::PathBuf;

use savvy_core::transaction::TransactionValidationError;
use savvy_shared::types::TransactionId;

/// Errors raised while loading the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Store file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Store contents are not valid JSON for a transaction list.
    #[error("Malformed transaction data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A stored transaction failed boundary validation.
    #[error("Transaction {id} is invalid: {source}")]
    InvalidRecord {
        /// Offending record.
        id: TransactionId,
        /// Rule it broke.
        source: TransactionValidationError,
    },

    /// Two stored transactions share an ID.
    #[error("Duplicate transaction id: {0}")]
    DuplicateId(TransactionId),
}
