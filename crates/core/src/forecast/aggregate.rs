//! Grouping of transactions into monthly buckets.

use std::collections::BTreeMap;

use savvy_shared::types::YearMonth;

use super::error::ForecastError;
use super::types::MonthlyBucket;
use crate::transaction::TransactionRecord;

/// Groups records by calendar month and totals each month.
///
/// The result is ordered by month ascending regardless of input order, holds at
/// most one bucket per month, and contains only months that have at least one
/// record. Empty input yields an empty series.
///
/// # Errors
///
/// Returns `ForecastError::Overflow` if a monthly total leaves the decimal
/// range.
pub fn aggregate<'a, I>(records: I) -> Result<Vec<MonthlyBucket>, ForecastError>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut by_month: BTreeMap<YearMonth, MonthlyBucket> = BTreeMap::new();

    for record in records {
        let period = record.period();
        by_month
            .entry(period)
            .or_insert_with(|| MonthlyBucket::empty(period))
            .add(record)?;
    }

    Ok(by_month.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionKind;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use savvy_shared::types::TransactionId;

    fn record(
        id: u64,
        date: (i32, u32, u32),
        amount: Decimal,
        kind: TransactionKind,
    ) -> TransactionRecord {
        TransactionRecord {
            id: TransactionId::new(id),
            amount,
            kind,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category: "misc".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<TransactionRecord> = Vec::new();
        assert!(aggregate(&records).unwrap().is_empty());
    }

    #[test]
    fn test_sample_months() {
        let records = vec![
            record(1, (2024, 1, 3), dec!(100), TransactionKind::Income),
            record(2, (2024, 1, 20), dec!(40), TransactionKind::Expense),
            record(3, (2024, 2, 1), dec!(80), TransactionKind::Income),
            record(4, (2024, 2, 28), dec!(20), TransactionKind::Expense),
        ];

        let buckets = aggregate(&records).unwrap();

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].period.to_string(), "2024-01");
        assert_eq!(buckets[0].net_savings, dec!(60));
        assert_eq!(buckets[0].total_income, dec!(100));
        assert_eq!(buckets[0].total_expense, dec!(40));
        assert_eq!(buckets[0].transaction_count, 2);
        assert_eq!(buckets[1].period.to_string(), "2024-02");
        assert_eq!(buckets[1].net_savings, dec!(60));
    }

    #[test]
    fn test_orders_chronologically_not_by_insertion() {
        let records = vec![
            record(1, (2024, 10, 1), dec!(1), TransactionKind::Income),
            record(2, (2023, 12, 31), dec!(2), TransactionKind::Income),
            record(3, (2024, 9, 15), dec!(3), TransactionKind::Income),
        ];

        let periods: Vec<String> = aggregate(&records)
            .unwrap()
            .iter()
            .map(|b| b.period.to_string())
            .collect();

        assert_eq!(periods, ["2023-12", "2024-09", "2024-10"]);
    }

    #[test]
    fn test_gaps_are_not_filled() {
        let records = vec![
            record(1, (2024, 1, 1), dec!(10), TransactionKind::Income),
            record(2, (2024, 4, 1), dec!(10), TransactionKind::Income),
        ];

        assert_eq!(aggregate(&records).unwrap().len(), 2);
    }

    #[test]
    fn test_expense_only_month_is_negative() {
        let records = vec![record(1, (2024, 5, 5), dec!(75.25), TransactionKind::Expense)];

        let buckets = aggregate(&records).unwrap();

        assert_eq!(buckets[0].net_savings, dec!(-75.25));
        assert_eq!(buckets[0].total_income, Decimal::ZERO);
    }

    #[test]
    fn test_same_month_different_years_stay_apart() {
        let records = vec![
            record(1, (2023, 3, 1), dec!(5), TransactionKind::Income),
            record(2, (2024, 3, 1), dec!(7), TransactionKind::Income),
        ];

        let buckets = aggregate(&records).unwrap();

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].net_savings, dec!(5));
        assert_eq!(buckets[1].net_savings, dec!(7));
    }

    #[test]
    fn test_income_overflow_is_an_error() {
        let records = vec![
            record(1, (2024, 1, 1), Decimal::MAX, TransactionKind::Income),
            record(2, (2024, 1, 2), Decimal::MAX, TransactionKind::Income),
        ];

        assert_eq!(aggregate(&records), Err(ForecastError::Overflow));
    }

    #[test]
    fn test_net_overflow_is_an_error() {
        // Unvalidated records may carry negative amounts.
        let records = vec![
            record(1, (2024, 1, 1), Decimal::MAX, TransactionKind::Income),
            record(2, (2024, 1, 2), dec!(-1), TransactionKind::Expense),
        ];

        assert_eq!(aggregate(&records), Err(ForecastError::Overflow));
    }

    #[test]
    fn test_failed_add_leaves_bucket_untouched() {
        let max = record(1, (2024, 1, 1), Decimal::MAX, TransactionKind::Income);
        let mut bucket = MonthlyBucket::empty(max.period());
        bucket.add(&max).unwrap();

        assert_eq!(bucket.add(&max), Err(ForecastError::Overflow));
        assert_eq!(bucket.total_income, Decimal::MAX);
        assert_eq!(bucket.net_savings, Decimal::MAX);
        assert_eq!(bucket.transaction_count, 1);
    }
}
