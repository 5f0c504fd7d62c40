//! Seasonal aggregation of detrended delay series.
//!
//! Partitions a detrended series into phase-aligned buckets by index
//! modulo the period and reports which phase carries the most delays.

use chrono::Month;

use crate::error::{AnalyticsError, Result};
use crate::trend::detrend;

/// Number of phases in the default annual season.
pub const MONTHS_PER_YEAR: usize = 12;

/// Per-phase delay totals over one seasonal period.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalProfile {
    /// Summed detrended values per phase, indexed `0..period`.
    pub sums: Vec<f64>,
    /// Phase with the largest sum; ties resolve to the lowest phase.
    pub peak_phase: usize,
}

impl SeasonalProfile {
    /// Number of phases in the season.
    pub fn period(&self) -> usize {
        self.sums.len()
    }

    /// The largest per-phase sum.
    pub fn peak_sum(&self) -> f64 {
        self.sums[self.peak_phase]
    }

    /// Calendar month of the peak phase for an annual profile, phase 0
    /// mapping to January. `None` for periods other than 12.
    pub fn peak_month(&self) -> Option<Month> {
        if self.period() != MONTHS_PER_YEAR {
            return None;
        }
        Month::try_from(self.peak_phase as u8 + 1).ok()
    }
}

/// Bucket a detrended series by index modulo `period` and locate the
/// dominant phase.
///
/// The series is first detrended with [`detrend`]; bucket `p` then sums
/// every detrended value whose index is congruent to `p` modulo `period`.
/// Phases with no observations (a period longer than the series) sum to 0
/// and remain valid candidates for the peak.
///
/// # Errors
/// `InvalidParameter` if `period` is 0; `InsufficientData` propagated
/// unchanged from the detrending step for series shorter than 2.
pub fn seasonal_buckets(series: &[f64], width: usize, period: usize) -> Result<SeasonalProfile> {
    if period == 0 {
        return Err(AnalyticsError::InvalidParameter(
            "period must be positive".to_string(),
        ));
    }

    let detrended = detrend(series, width)?;

    let mut sums = vec![0.0; period];
    for (i, &value) in detrended.iter().enumerate() {
        sums[i % period] += value;
    }

    let peak_phase = argmax_first(&sums);

    Ok(SeasonalProfile { sums, peak_phase })
}

/// [`seasonal_buckets`] with the annual 12-phase season.
pub fn seasonal_buckets_monthly(series: &[f64], width: usize) -> Result<SeasonalProfile> {
    seasonal_buckets(series, width, MONTHS_PER_YEAR)
}

/// Index of the first maximum.
fn argmax_first(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}
