//! Forecast data types.

use rust_decimal::Decimal;
use savvy_shared::types::YearMonth;
use serde::{Deserialize, Serialize};

use super::error::ForecastError;
use crate::transaction::{TransactionKind, TransactionRecord};

/// Aggregated totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// Month the totals belong to.
    pub period: YearMonth,
    /// Income minus expenses.
    pub net_savings: Decimal,
    /// Sum of income amounts.
    pub total_income: Decimal,
    /// Sum of expense amounts.
    pub total_expense: Decimal,
    /// Number of records folded into this bucket.
    pub transaction_count: usize,
}

impl MonthlyBucket {
    /// Creates an empty bucket for a month.
    #[must_use]
    pub const fn empty(period: YearMonth) -> Self {
        Self {
            period,
            net_savings: Decimal::ZERO,
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            transaction_count: 0,
        }
    }

    /// Folds one record into the bucket.
    ///
    /// The bucket is left untouched when a total would leave the decimal range.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::Overflow` if a total or the net overflows.
    pub fn add(&mut self, record: &TransactionRecord) -> Result<(), ForecastError> {
        let (income, expense) = match record.kind {
            TransactionKind::Income => (
                self.total_income.checked_add(record.amount),
                Some(self.total_expense),
            ),
            TransactionKind::Expense => (
                Some(self.total_income),
                self.total_expense.checked_add(record.amount),
            ),
        };
        let (Some(income), Some(expense)) = (income, expense) else {
            return Err(ForecastError::Overflow);
        };
        let net = income.checked_sub(expense).ok_or(ForecastError::Overflow)?;

        self.total_income = income;
        self.total_expense = expense;
        self.net_savings = net;
        self.transaction_count += 1;
        Ok(())
    }
}

/// Outcome of a forecast run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Month being predicted (the one after the last observed month).
    pub predicted_period: YearMonth,
    /// Predicted net savings, rounded to 2 decimal places. May be negative.
    pub predicted_value: Decimal,
    /// Fitted change in net savings per month step, rounded to 4 places.
    pub slope: Decimal,
    /// Fitted net savings at the first observed month, rounded to 4 places.
    pub intercept: Decimal,
    /// Number of monthly buckets the fit used.
    pub sample_size: usize,
}
