//! # ontime-analytics
//!
//! Airline on-time-performance analytics.
//!
//! Characterizes delay seasonality in daily ASQP-style series through a
//! three-stage decomposition pipeline: moving-average smoothing,
//! least-squares detrending, and phase-aligned seasonal aggregation.
//! Flat summary statistics over per-flight arrival and cancellation
//! records round out the picture.
//!
//! # Example
//!
//! ```
//! use ontime_analytics::seasonal::seasonal_buckets_monthly;
//!
//! // Two years of daily severe-delay counts with a 12-step season.
//! let series: Vec<f64> = (0..730)
//!     .map(|i| 20.0 + 8.0 * (2.0 * std::f64::consts::PI * i as f64 / 12.0).cos())
//!     .collect();
//!
//! let profile = seasonal_buckets_monthly(&series, 3).unwrap();
//! assert_eq!(profile.period(), 12);
//! assert!(profile.peak_phase < 12);
//! ```

pub mod error;
pub mod seasonal;
pub mod smoothing;
pub mod stats;
pub mod trend;

pub use error::{AnalyticsError, Result};

pub mod prelude {
    pub use crate::error::{AnalyticsError, Result};
    pub use crate::seasonal::{
        seasonal_buckets, seasonal_buckets_monthly, SeasonalProfile, MONTHS_PER_YEAR,
    };
    pub use crate::smoothing::smooth;
    pub use crate::trend::{detrend, fit_line, LineFit};
}
