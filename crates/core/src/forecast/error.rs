//! Forecast error types.

use savvy_shared::AppError;
use savvy_shared::types::{PeriodParseError, YearMonth};
use thiserror::Error;

use crate::transaction::RepositoryError;

/// Errors that can occur while producing a savings forecast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// Month filter could not be parsed.
    #[error("Invalid month filter: {0}")]
    InvalidFilter(#[from] PeriodParseError),

    /// Month filter parsed, but no transactions fall in it.
    #[error("No transactions found for {period}")]
    NoDataForPeriod {
        /// Requested month.
        period: YearMonth,
    },

    /// No filter was given and the store holds no transactions.
    #[error("No transactions available for prediction")]
    NoDataAvailable,

    /// Fewer than two months of data.
    #[error("Insufficient data for prediction (need at least 2 months, found {months})")]
    InsufficientData {
        /// Number of monthly buckets found.
        months: usize,
    },

    /// Totals or trend arithmetic exceeded the decimal range.
    #[error("Arithmetic overflow while computing savings")]
    Overflow,

    /// Record store failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<ForecastError> for AppError {
    fn from(err: ForecastError) -> Self {
        let message = err.to_string();
        match err {
            ForecastError::InvalidFilter(_) | ForecastError::InsufficientData { .. } => {
                Self::Validation(message)
            }
            ForecastError::NoDataForPeriod { .. } | ForecastError::NoDataAvailable => {
                Self::NotFound(message)
            }
            ForecastError::Overflow => Self::BusinessRule(message),
            ForecastError::Repository(_) => Self::Storage(message),
        }
    }
}
