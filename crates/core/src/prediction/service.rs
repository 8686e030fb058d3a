//! Prediction service implementation.

use std::sync::Arc;

use savvy_shared::types::YearMonth;
use tracing::{debug, warn};

use crate::forecast::{ForecastError, ForecastResult, MonthlyBucket, aggregate, forecast};
use crate::transaction::{TransactionRecord, TransactionRepository};

/// Parsed form of an optional month filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    /// Every recorded transaction.
    All,
    /// Only transactions dated within one calendar month.
    Month(YearMonth),
}

impl MonthFilter {
    /// Parses a raw filter value. `None` and blank input mean no filter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilter` when the value is not a `YYYY-MM` month.
    pub fn parse(raw: Option<&str>) -> Result<Self, ForecastError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::All),
            Some(value) => Ok(Self::Month(value.parse()?)),
        }
    }
}

/// Service that fetches records and runs them through the forecast pipeline.
///
/// Holds no state besides the repository handle, so one instance can serve
/// concurrent requests.
pub struct PredictionService<R: TransactionRepository> {
    repo: Arc<R>,
}

impl<R: TransactionRepository> PredictionService<R> {
    /// Create a new prediction service.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Predicts next month's net savings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The filter is not a valid `YYYY-MM` month
    /// - The filter matches no transactions
    /// - No filter was given and the store is empty
    /// - Fewer than two months of data remain after aggregation
    /// - A monthly total or the trend fit overflows
    pub fn predict_savings(&self, month: Option<&str>) -> Result<ForecastResult, ForecastError> {
        let filter = MonthFilter::parse(month)?;
        let records = self.fetch(filter)?;

        if records.is_empty() {
            warn!("prediction requested with no transactions on record");
            return Err(ForecastError::NoDataAvailable);
        }

        let series = aggregate(&records)?;
        debug!(
            records = records.len(),
            months = series.len(),
            "aggregated transactions"
        );

        let result = forecast(&series).inspect_err(|err| {
            warn!(months = series.len(), error = %err, "forecast failed");
        })?;

        debug!(
            period = %result.predicted_period,
            value = %result.predicted_value,
            "forecast complete"
        );

        Ok(result)
    }

    /// Returns the aggregated monthly series under the same filter rules.
    ///
    /// An unfiltered, empty store yields an empty series.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilter` or `NoDataForPeriod` as for [`Self::predict_savings`],
    /// or `Overflow` if a monthly total leaves the decimal range.
    pub fn monthly_summary(
        &self,
        month: Option<&str>,
    ) -> Result<Vec<MonthlyBucket>, ForecastError> {
        let filter = MonthFilter::parse(month)?;
        let records = self.fetch(filter)?;
        aggregate(&records)
    }

    /// Lists transactions sorted by date, then id.
    ///
    /// An unfiltered, empty store yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilter` or `NoDataForPeriod` as for [`Self::predict_savings`].
    pub fn list_transactions(
        &self,
        month: Option<&str>,
    ) -> Result<Vec<TransactionRecord>, ForecastError> {
        let filter = MonthFilter::parse(month)?;
        let mut records = self.fetch(filter)?;
        records.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(records)
    }

    /// Loads the records a filter selects.
    ///
    /// A month filter that selects nothing is an error here; an empty
    /// unfiltered store is left for the caller to judge.
    fn fetch(&self, filter: MonthFilter) -> Result<Vec<TransactionRecord>, ForecastError> {
        match filter {
            MonthFilter::All => Ok(self.repo.list_all()?),
            MonthFilter::Month(period) => {
                let records = self
                    .repo
                    .list_between(period.first_day(), period.last_day())?;

                if records.is_empty() {
                    warn!(%period, "no transactions for requested month");
                    return Err(ForecastError::NoDataForPeriod { period });
                }

                debug!(%period, records = records.len(), "filtered transactions");
                Ok(records)
            }
        }
    }
}
