//! Boundary validation for incoming transactions.

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::NewTransaction;

/// Maximum number of fraction digits an amount may carry.
pub const AMOUNT_SCALE: u32 = 2;

/// Maximum number of digits (integer + fraction) an amount may carry.
pub const AMOUNT_MAX_DIGITS: u32 = 10;

/// Maximum length of a category label, in characters.
pub const MAX_CATEGORY_LEN: usize = 50;

/// Validation errors for incoming transactions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionValidationError {
    /// Amount is below zero.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// Amount has more fraction digits than allowed.
    #[error("Amount has {scale} decimal places, at most 2 are allowed")]
    TooManyDecimalPlaces {
        /// Fraction digits found.
        scale: u32,
    },

    /// Amount has more integer digits than allowed.
    #[error("Amount {0} exceeds 10 digits")]
    AmountTooLarge(Decimal),

    /// Category is empty or whitespace.
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// Category is longer than allowed.
    #[error("Category is {len} characters, at most 50 are allowed")]
    CategoryTooLong {
        /// Length found, in characters.
        len: usize,
    },
}

/// Validates an incoming transaction.
///
/// # Errors
///
/// Returns the first rule violated, checked in the order: sign, scale,
/// magnitude, category.
pub fn validate_transaction(input: &NewTransaction) -> Result<(), TransactionValidationError> {
    let amount = input.amount;

    if amount < Decimal::ZERO {
        return Err(TransactionValidationError::NegativeAmount);
    }

    let scale = amount.normalize().scale();
    if scale > AMOUNT_SCALE {
        return Err(TransactionValidationError::TooManyDecimalPlaces { scale });
    }

    let integer_limit = Decimal::from(10_u64.pow(AMOUNT_MAX_DIGITS - AMOUNT_SCALE));
    if amount.trunc() >= integer_limit {
        return Err(TransactionValidationError::AmountTooLarge(amount));
    }

    let category = input.category.trim();
    if category.is_empty() {
        return Err(TransactionValidationError::EmptyCategory);
    }

    let len = category.chars().count();
    if len > MAX_CATEGORY_LEN {
        return Err(TransactionValidationError::CategoryTooLong { len });
    }

    Ok(())
}
