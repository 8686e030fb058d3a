//! Request-level orchestration of the forecasting pipeline.
//!
//! One call walks `Start → Filtered → Aggregated → Forecasted → Done`, leaving
//! early with a typed [`crate::forecast::ForecastError`] when the filter is
//! malformed, matches nothing, the store is empty, or too few months remain.

mod service;

pub use service::{MonthFilter, PredictionService};
