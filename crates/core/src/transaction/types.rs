//! Transaction domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use savvy_shared::types::{TransactionId, YearMonth};
use serde::{Deserialize, Serialize};

use super::validation::{TransactionValidationError, validate_transaction};

/// Direction of a transaction.
///
/// Amounts are always stored as positive magnitudes; the kind supplies the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl TransactionKind {
    /// Applies the kind's sign to a magnitude.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A validated transaction as held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Record identifier.
    pub id: TransactionId,
    /// Non-negative magnitude.
    pub amount: Decimal,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Calendar date the transaction happened.
    pub date: NaiveDate,
    /// Free-form category label (e.g. "groceries").
    pub category: String,
    /// Optional notes; empty when absent.
    pub description: String,
}

impl TransactionRecord {
    /// Month the record is bucketed into.
    #[must_use]
    pub fn period(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }

    /// Amount with the kind's sign applied.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}

/// Unvalidated transaction input, as it arrives from outside the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Amount as entered.
    pub amount: Decimal,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Transaction date.
    pub date: NaiveDate,
    /// Category label.
    pub category: String,
    /// Optional notes.
    #[serde(default)]
    pub description: String,
}

impl NewTransaction {
    /// Validates the input and assigns it an identifier.
    ///
    /// # Errors
    ///
    /// Returns the first validation rule the input violates.
    pub fn into_record(
        self,
        id: TransactionId,
    ) -> Result<TransactionRecord, TransactionValidationError> {
        validate_transaction(&self)?;

        Ok(TransactionRecord {
            id,
            amount: self.amount,
            kind: self.kind,
            date: self.date,
            category: self.category.trim().to_string(),
            description: self.description,
        })
    }
}
