//! Flat aggregate statistics over per-flight performance records.
//!
//! Single-pass reductions used to summarize raw arrival and cancellation
//! data, plus the boundary transform that turns per-flight lateness into
//! the daily series consumed by the decomposition pipeline.
//!
//! Arrival times are minutes relative to schedule: negative when early,
//! positive when late.

use std::collections::HashMap;

use crate::error::{AnalyticsError, Result};

/// Minutes of lateness at which an arrival counts as delayed.
pub const DELAY_THRESHOLD_MIN: f64 = 15.0;

/// Minutes of lateness at which an arrival counts as severely delayed.
pub const SEVERE_DELAY_THRESHOLD_MIN: f64 = 60.0;

/// Reason a flight was cancelled, per the ASQP reporting codes.
///
/// A flight's cancellation field is `Option<CancellationCode>`; `None`
/// means the flight operated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancellationCode {
    /// Code A: circumstances within the carrier's control.
    Carrier,
    /// Code B: extreme weather.
    Weather,
    /// Code C: national aviation system delays.
    NationalAviationSystem,
    /// Code D: security.
    Security,
}

/// Mean lateness of delayed flights, or `None` if no flight qualifies.
///
/// Only flights at least [`DELAY_THRESHOLD_MIN`] minutes late contribute.
pub fn average_delay(arrivals: &[f64]) -> Option<f64> {
    let mut total = 0.0;
    let mut count = 0usize;

    for &t in arrivals {
        if t >= DELAY_THRESHOLD_MIN {
            total += t;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    Some(total / count as f64)
}

/// Fraction of flights delayed and fraction cancelled.
///
/// The two record sets may cover different flights and need not have the
/// same length; each fraction is taken over its own set.
///
/// # Errors
/// `EmptyData` if either slice is empty.
pub fn delay_and_cancel_fractions(
    arrivals: &[f64],
    cancellations: &[Option<CancellationCode>],
) -> Result<(f64, f64)> {
    if arrivals.is_empty() || cancellations.is_empty() {
        return Err(AnalyticsError::EmptyData);
    }

    let delayed = arrivals
        .iter()
        .filter(|&&t| t >= DELAY_THRESHOLD_MIN)
        .count();
    let cancelled = cancellations.iter().filter(|c| c.is_some()).count();

    Ok((
        delayed as f64 / arrivals.len() as f64,
        cancelled as f64 / cancellations.len() as f64,
    ))
}

/// Count cancelled flights per carrier and name the carrier with the most.
///
/// Carriers are visited in sorted-name order, so a tie on the count goes
/// to the lexicographically first carrier.
///
/// # Errors
/// `EmptyData` if no carriers are given.
pub fn per_carrier_cancellations(
    by_carrier: &HashMap<String, Vec<Option<CancellationCode>>>,
) -> Result<(HashMap<String, usize>, String)> {
    let mut names: Vec<&String> = by_carrier.keys().collect();
    names.sort();

    let mut counts = HashMap::with_capacity(by_carrier.len());
    let mut worst: Option<(String, usize)> = None;

    for name in names {
        let cancelled = by_carrier[name].iter().filter(|c| c.is_some()).count();
        counts.insert(name.clone(), cancelled);

        let beats = match &worst {
            Some((_, most)) => cancelled > *most,
            None => true,
        };
        if beats {
            worst = Some((name.clone(), cancelled));
        }
    }

    let (worst_name, _) = worst.ok_or(AnalyticsError::EmptyData)?;
    Ok((counts, worst_name))
}

/// Carriers whose average qualifying delay exceeds the overall average.
///
/// The overall average pools every carrier's qualifying delays; carriers
/// with no qualifying delays of their own are never flagged. Returns an
/// empty list when no flight anywhere reaches the delay threshold. The
/// result is sorted by carrier name.
pub fn underperforming_carriers(arrivals_by_carrier: &HashMap<String, Vec<f64>>) -> Vec<String> {
    let mut total = 0.0;
    let mut count = 0usize;

    for arrivals in arrivals_by_carrier.values() {
        for &t in arrivals {
            if t >= DELAY_THRESHOLD_MIN {
                total += t;
                count += 1;
            }
        }
    }

    if count == 0 {
        return Vec::new();
    }
    let overall = total / count as f64;

    let mut poor: Vec<String> = arrivals_by_carrier
        .iter()
        .filter(|(_, arrivals)| matches!(average_delay(arrivals), Some(mean) if mean > overall))
        .map(|(name, _)| name.clone())
        .collect();
    poor.sort();
    poor
}

/// Per-day counts of severely delayed flights.
///
/// Each entry of `daily` holds one day's per-flight arrival lateness; the
/// result is the time series the decomposition pipeline consumes.
pub fn severe_delay_counts(daily: &[Vec<f64>]) -> Vec<f64> {
    daily
        .iter()
        .map(|day| {
            day.iter()
                .filter(|&&t| t >= SEVERE_DELAY_THRESHOLD_MIN)
                .count() as f64
        })
        .collect()
}
