//! Monthly net-savings aggregation and next-month trend forecast.

pub mod aggregate;
pub mod error;
pub mod trend;
pub mod types;


pub use aggregate::aggregate;
pub use error::ForecastError;
pub use trend::{LinearTrend, MIN_MONTHS, forecast};
pub use types::{ForecastResult, MonthlyBucket};
