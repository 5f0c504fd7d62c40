//! End-to-end tests for the delay-seasonality pipeline.
//!
//! These run the full chain from per-flight records to a dominant phase,
//! with hand-checked expected values.

use std::collections::HashMap;

use approx::assert_relative_eq;
use chrono::Month;
use ontime_analytics::prelude::*;
use ontime_analytics::stats::{
    average_delay, delay_and_cancel_fractions, severe_delay_counts, underperforming_carriers,
    CancellationCode,
};

#[test]
fn oscillating_series_end_to_end() {
    // width 0: smoothing is the identity. The OLS slope over the raw
    // oscillation [0,10,0,10,...] of length 8 is 10/21, so bucket sums are
    // the raw phase sums minus the slope's contribution at each index:
    //   phase 0 (indices 0,2,4,6): 0  - (10/21)(0+2+4+6) = -40/7
    //   phase 1 (indices 1,3,5,7): 40 - (10/21)(1+3+5+7) = 680/21
    let series = vec![0.0, 10.0, 0.0, 10.0, 0.0, 10.0, 0.0, 10.0];
    let profile = seasonal_buckets(&series, 0, 2).unwrap();

    assert_eq!(profile.peak_phase, 1);
    assert_relative_eq!(profile.sums[0], -40.0 / 7.0, epsilon = 1e-9);
    assert_relative_eq!(profile.sums[1], 680.0 / 21.0, epsilon = 1e-9);
}

#[test]
fn smoothing_matches_hand_computed_windows() {
    let smoothed = smooth(&[1.0, 2.0, 3.0, 4.0, 5.0], 1);
    assert_eq!(smoothed, vec![1.5, 2.0, 3.0, 4.0, 4.5]);
}

#[test]
fn daily_counts_feed_the_pipeline() {
    // Six days of per-flight lateness; days 1 and 4 carry the severe
    // delays. Counts become the series the pipeline decomposes.
    let daily = vec![
        vec![5.0, 12.0, -3.0],
        vec![70.0, 95.0, 61.0],
        vec![10.0, 20.0],
        vec![0.0, 59.0],
        vec![120.0, 60.0, 80.0, 15.0],
        vec![30.0],
    ];

    let series = severe_delay_counts(&daily);
    assert_eq!(series, vec![0.0, 3.0, 0.0, 0.0, 3.0, 0.0]);

    let profile = seasonal_buckets(&series, 1, 3).unwrap();
    // Phases 1 (indices 1, 4) collect both severe days.
    assert_eq!(profile.peak_phase, 1);
}

#[test]
fn three_years_of_monthly_counts_find_the_peak_month() {
    // Mild upward drift with an August spike each year.
    let series: Vec<f64> = (0..36)
        .map(|i| {
            let base = 40.0 + 0.3 * i as f64;
            if i % 12 == 7 {
                base + 25.0
            } else {
                base
            }
        })
        .collect();

    let profile = seasonal_buckets_monthly(&series, 2).unwrap();

    assert_eq!(profile.peak_phase, 7);
    assert_eq!(profile.peak_month(), Some(Month::August));
}

#[test]
fn pipeline_errors_surface_unchanged() {
    // Zero period is rejected up front.
    assert!(matches!(
        seasonal_buckets(&[1.0, 2.0, 3.0], 0, 0),
        Err(AnalyticsError::InvalidParameter(_))
    ));

    // A series too short for the fit fails identically at every level.
    let from_fit = fit_line(&[5.0]).unwrap_err();
    let from_detrend = detrend(&[5.0], 0).unwrap_err();
    let from_buckets = seasonal_buckets(&[5.0], 0, 12).unwrap_err();
    assert_eq!(from_fit, from_detrend);
    assert_eq!(from_detrend, from_buckets);
    assert_eq!(
        from_fit,
        AnalyticsError::InsufficientData { needed: 2, got: 1 }
    );
}

#[test]
fn carrier_summaries_over_one_reporting_window() {
    let mut arrivals_by_carrier = HashMap::new();
    arrivals_by_carrier.insert("AA".to_string(), vec![20.0, 16.0, -4.0, 2.0]);
    arrivals_by_carrier.insert("UA".to_string(), vec![95.0, 40.0, 8.0]);
    arrivals_by_carrier.insert("DL".to_string(), vec![-10.0, 0.0, 5.0]);

    // Pooled qualifying delays: 20, 16, 95, 40 -> overall mean 42.75.
    let poor = underperforming_carriers(&arrivals_by_carrier);
    assert_eq!(poor, vec!["UA".to_string()]);

    let ua = &arrivals_by_carrier["UA"];
    assert_relative_eq!(average_delay(ua).unwrap(), 67.5, epsilon = 1e-10);

    let cancellations = vec![
        None,
        Some(CancellationCode::Weather),
        None,
        Some(CancellationCode::NationalAviationSystem),
    ];
    let (delayed, cancelled) = delay_and_cancel_fractions(ua, &cancellations).unwrap();
    assert_relative_eq!(delayed, 2.0 / 3.0, epsilon = 1e-10);
    assert_relative_eq!(cancelled, 0.5, epsilon = 1e-10);
}
