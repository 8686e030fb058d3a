//! JSON-file backed transaction store.
//!
//! The whole file is read once and validated up front; lookups are then
//! served from memory. The expected layout is a JSON array of objects:
//!
//! ```json
//! [
//!   {"id": 1, "amount": "100.00", "kind": "income", "date": "2024-01-05",
//!    "category": "salary", "description": "January pay"}
//! ]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use savvy_core::transaction::{
    NewTransaction, RepositoryError, TransactionKind, TransactionRecord, TransactionRepository,
};
use savvy_shared::types::TransactionId;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::StoreError;

/// On-disk shape of one transaction.
#[derive(Debug, Deserialize)]
struct StoredTransaction {
    id: TransactionId,
    amount: Decimal,
    kind: TransactionKind,
    date: NaiveDate,
    category: String,
    #[serde(default)]
    description: String,
}

impl StoredTransaction {
    fn into_record(self) -> Result<TransactionRecord, StoreError> {
        let id = self.id;
        NewTransaction {
            amount: self.amount,
            kind: self.kind,
            date: self.date,
            category: self.category,
            description: self.description,
        }
        .into_record(id)
        .map_err(|source| StoreError::InvalidRecord { id, source })
    }
}

/// In-memory transaction store loaded from JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonTransactionStore {
    records: Vec<TransactionRecord>,
}

impl JsonTransactionStore {
    /// Loads and validates the store file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON transaction
    /// list, holds an invalid transaction, or repeats an ID.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_json(&data)?;
        info!(
            path = %path.display(),
            transactions = store.len(),
            "loaded transaction store"
        );
        Ok(store)
    }

    /// Parses and validates a JSON transaction list.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open`], minus the I/O failure.
    pub fn from_json(data: &str) -> Result<Self, StoreError> {
        let stored: Vec<StoredTransaction> = serde_json::from_str(data)?;
        let records = stored
            .into_iter()
            .map(StoredTransaction::into_record)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    /// Builds a store from already-validated records.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if two records share an ID.
    pub fn from_records(records: Vec<TransactionRecord>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// Number of stored transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no transactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TransactionRepository for JsonTransactionStore {
    fn list_all(&self) -> Result<Vec<TransactionRecord>, RepositoryError> {
        Ok(self.records.clone())
    }

    fn list_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionRecord>, RepositoryError> {
        let matched: Vec<TransactionRecord> = self
            .records
            .iter()
            .filter(|record| record.date >= start && record.date <= end)
            .cloned()
            .collect();

        debug!(%start, %end, matched = matched.len(), "range lookup");
        Ok(matched)
    }
}
