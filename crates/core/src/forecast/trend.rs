//! Least-squares linear trend over a monthly series.
//!
//! Each bucket's position in the series (0, 1, ..., n-1) is the independent
//! variable; calendar gaps between months are ignored. The fit is the usual
//! closed form for simple linear regression, rearranged so that every
//! quantity is an exact integer combination of the sums Σy and Σxy over one
//! common denominator:
//!
//! ```text
//! denominator = n(n² - 1)
//! slope       = 6(2Σxy - (n-1)Σy)              / denominator
//! intercept   = (n-1)(2(2n-1)Σy - 6Σxy)        / denominator
//! ŷ(x)        = (intercept_num + slope_num · x) / denominator
//! ```
//!
//! Evaluating ŷ with a single division keeps the prediction exact whenever the
//! true value is representable, and all arithmetic stays in `Decimal`.

use rust_decimal::Decimal;

use super::error::ForecastError;
use super::types::{ForecastResult, MonthlyBucket};

/// Minimum number of monthly buckets a trend can be fitted to.
pub const MIN_MONTHS: usize = 2;

/// Decimal places of the predicted value.
const PREDICTION_DP: u32 = 2;

/// Decimal places of the reported slope and intercept.
const COEFFICIENT_DP: u32 = 4;

/// A fitted line `y = slope · x + intercept`, kept as exact numerators over a
/// shared denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearTrend {
    slope_num: Decimal,
    intercept_num: Decimal,
    denominator: Decimal,
    samples: usize,
}

impl LinearTrend {
    /// Fits a line to `values`, indexed 0..n-1.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` for fewer than two values, and `Overflow` if
    /// the sums leave the decimal range.
    pub fn fit(values: &[Decimal]) -> Result<Self, ForecastError> {
        let samples = values.len();
        if samples < MIN_MONTHS {
            return Err(ForecastError::InsufficientData { months: samples });
        }

        let mut sum_y = Decimal::ZERO;
        let mut sum_xy = Decimal::ZERO;
        for (index, &value) in values.iter().enumerate() {
            sum_y = add(sum_y, value)?;
            sum_xy = add(sum_xy, mul(Decimal::from(index), value)?)?;
        }

        let n = Decimal::from(samples);
        let n_minus_one = n - Decimal::ONE;
        let two = Decimal::TWO;
        let six = Decimal::from(6);

        // n(n² - 1)
        let denominator = mul(n, sub(mul(n, n)?, Decimal::ONE)?)?;

        // 6(2Σxy - (n-1)Σy)
        let slope_num = mul(six, sub(mul(two, sum_xy)?, mul(n_minus_one, sum_y)?)?)?;

        // (n-1)(2(2n-1)Σy - 6Σxy)
        let two_n_minus_one = sub(mul(two, n)?, Decimal::ONE)?;
        let intercept_num = mul(
            n_minus_one,
            sub(mul(mul(two, two_n_minus_one)?, sum_y)?, mul(six, sum_xy)?)?,
        )?;

        Ok(Self {
            slope_num,
            intercept_num,
            denominator,
            samples,
        })
    }

    /// Change in value per index step.
    pub fn slope(&self) -> Result<Decimal, ForecastError> {
        div(self.slope_num, self.denominator)
    }

    /// Value of the line at index 0.
    pub fn intercept(&self) -> Result<Decimal, ForecastError> {
        div(self.intercept_num, self.denominator)
    }

    /// Number of points the line was fitted to.
    #[must_use]
    pub const fn samples(&self) -> usize {
        self.samples
    }

    /// Evaluates the line at index `x`.
    pub fn predict_at(&self, x: Decimal) -> Result<Decimal, ForecastError> {
        let numerator = add(self.intercept_num, mul(self.slope_num, x)?)?;
        div(numerator, self.denominator)
    }

    /// Evaluates the line one step past the last fitted point.
    pub fn predict_next(&self) -> Result<Decimal, ForecastError> {
        self.predict_at(Decimal::from(self.samples))
    }
}

/// Forecasts next month's net savings from an ordered monthly series.
///
/// `series` must already be sorted by month ascending, as produced by
/// [`super::aggregate`].
///
/// # Errors
///
/// Returns `InsufficientData` when the series has fewer than two months, and
/// `Overflow` if the fit leaves the decimal range.
pub fn forecast(series: &[MonthlyBucket]) -> Result<ForecastResult, ForecastError> {
    let Some(last) = series.last() else {
        return Err(ForecastError::InsufficientData { months: 0 });
    };

    let values: Vec<Decimal> = series.iter().map(|bucket| bucket.net_savings).collect();
    let trend = LinearTrend::fit(&values)?;

    let mut predicted_value = trend.predict_next()?.round_dp(PREDICTION_DP);
    predicted_value.rescale(PREDICTION_DP);

    let predicted_period = last.period.succ().ok_or(ForecastError::Overflow)?;

    Ok(ForecastResult {
        predicted_period,
        predicted_value,
        slope: trend.slope()?.round_dp(COEFFICIENT_DP),
        intercept: trend.intercept()?.round_dp(COEFFICIENT_DP),
        sample_size: trend.samples(),
    })
}

fn add(a: Decimal, b: Decimal) -> Result<Decimal, ForecastError> {
    a.checked_add(b).ok_or(ForecastError::Overflow)
}

fn sub(a: Decimal, b: Decimal) -> Result<Decimal, ForecastError> {
    a.checked_sub(b).ok_or(ForecastError::Overflow)
}

fn mul(a: Decimal, b: Decimal) -> Result<Decimal, ForecastError> {
    a.checked_mul(b).ok_or(ForecastError::Overflow)
}

fn div(a: Decimal, b: Decimal) -> Result<Decimal, ForecastError> {
    a.checked_div(b).ok_or(ForecastError::Overflow)
}
