//! Anchored momentum walkthrough on synthetic data.
//!
//! This example demonstrates:
//! - Building a `PriceSeries` by hand (no network access)
//! - How the anchor rules differ across month, week, and day units
//! - Graceful degradation when one ticker has no data in the window

use ancora::prelude::*;
use chrono::Datelike;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let series = synthetic_series();

    println!("\nAnchored Momentum Walkthrough");
    println!("═════════════════════════════");
    println!("Synthetic weekday closes, 2025-05-01 to 2025-08-29");

    // Month unit: anchors land on the last trading day of the target months.
    let request = MomentumRequest::new(
        vec!["ALPHA".to_string(), "BETA".to_string()],
        Unit::Month,
        2,
        "2025-09",
    )?;
    report("Two-month momentum, as of 2025-09", &series, &request);

    // Week unit: the reference rounds to its Saturday; the current anchor
    // lands on that week's Friday, the past anchor near one week earlier.
    let request = MomentumRequest::new(
        vec!["ALPHA".to_string(), "BETA".to_string()],
        Unit::Week,
        1,
        "2025-08-20",
    )?;
    report("One-week momentum, as of Wed 2025-08-20", &series, &request);

    // Day unit: an exact five-trading-day offset within the common dates.
    let request = MomentumRequest::new(
        vec!["ALPHA".to_string(), "BETA".to_string()],
        Unit::Day,
        5,
        "2025-08-20",
    )?;
    report("Five-day momentum, as of 2025-08-20", &series, &request);

    // A ticker with no data never blocks the others: anchors are resolved
    // from the tickers that have history, and the empty one reports N/A.
    let request = MomentumRequest::new(
        vec!["ALPHA".to_string(), "BETA".to_string(), "GAMMA".to_string()],
        Unit::Month,
        2,
        "2025-09",
    )?;
    report("Same request with an unknown ticker", &series, &request);

    Ok(())
}

/// Evaluate one request and print its anchors and per-ticker values.
fn report(title: &str, series: &PriceSeries, request: &MomentumRequest) {
    let outcome = evaluate(series, request);

    println!("\n{title}");
    match (outcome.anchors.past.date(), outcome.anchors.current.date()) {
        (Some(past), Some(current)) => println!("  anchors: {past} -> {current}"),
        _ => println!("  anchors: unavailable"),
    }
    for (ticker, value) in request.tickers().iter().zip(&outcome.values) {
        match value {
            Some(v) => println!("  {ticker:<8} {:+.2}%", v * 100.0),
            None => println!("  {ticker:<8} N/A"),
        }
    }
}

/// Weekday closes for two tickers: ALPHA drifts up, BETA drifts down.
fn synthetic_series() -> PriceSeries {
    let mut series = PriceSeries::new();
    let mut alpha = Vec::new();
    let mut beta = Vec::new();

    let mut day = Date::from_ymd_opt(2025, 5, 1).expect("valid date");
    let last = Date::from_ymd_opt(2025, 8, 29).expect("valid date");
    let mut step = 0u32;
    while day <= last {
        if day.weekday().number_from_monday() <= 5 {
            alpha.push(PricePoint::new(day, 100.0 + 0.25 * f64::from(step)));
            beta.push(PricePoint::new(day, 80.0 - 0.10 * f64::from(step)));
            step += 1;
        }
        day = day.succ_opt().expect("valid date");
    }

    series.insert("ALPHA", alpha);
    series.insert("BETA", beta);
    series
}
