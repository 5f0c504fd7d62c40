//! Delay seasonality example.
//!
//! Run with: cargo run --example delay_seasonality

use ontime_analytics::seasonal::seasonal_buckets_monthly;
use ontime_analytics::smoothing::smooth;
use ontime_analytics::stats::severe_delay_counts;
use ontime_analytics::trend::{detrend, fit_line};

fn main() {
    println!("=== Delay Seasonality Example ===\n");

    // Synthetic reporting data: 36 monthly observation windows with a
    // summer spike and mild year-over-year growth in severe delays.
    let daily: Vec<Vec<f64>> = (0..36)
        .map(|month| {
            let phase = month % 12;
            let severe = 10 + month / 4 + if phase == 6 || phase == 7 { 15 } else { 0 };
            let mut flights: Vec<f64> = (0..severe).map(|k| 60.0 + (k % 30) as f64).collect();
            flights.extend((0..40).map(|k| (k % 25) as f64 - 10.0));
            flights
        })
        .collect();

    let series = severe_delay_counts(&daily);
    println!("Series: {} periods of severe-delay counts", series.len());
    println!("First year: {:?}\n", &series[..12]);

    // 1. Smoothing
    println!("--- Smoothing ---");
    let width = 2;
    let smoothed = smooth(&series, width);
    println!("Window half-span: {}", width);
    println!(
        "Raw peak {:.0} vs smoothed peak {:.1}",
        series.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        smoothed.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
    );

    // 2. Trend estimation and removal
    println!("\n--- Detrending ---");
    let fit = fit_line(&smoothed).unwrap();
    println!(
        "Estimated growth: {:.3} severe delays per period (intercept {:.1}, discarded)",
        fit.slope, fit.intercept
    );

    let detrended = detrend(&series, width).unwrap();
    println!(
        "Detrended range: {:.1} .. {:.1}",
        detrended.iter().cloned().fold(f64::INFINITY, f64::min),
        detrended.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
    );

    // 3. Seasonal aggregation
    println!("\n--- Seasonal Profile ---");
    let profile = seasonal_buckets_monthly(&series, width).unwrap();

    println!("{:<8} {:>12}", "Phase", "Sum");
    println!("{:-<21}", "");
    for (phase, sum) in profile.sums.iter().enumerate() {
        let marker = if phase == profile.peak_phase { " <-" } else { "" };
        println!("{:<8} {:>12.2}{}", phase, sum, marker);
    }

    println!(
        "\nDominant phase: {} ({:?}), total {:.1}",
        profile.peak_phase,
        profile.peak_month().unwrap(),
        profile.peak_sum()
    );

    println!("\n=== Delay Seasonality Example Complete ===");
}
