//! Three-month momentum screen over a small universe.
//!
//! This example demonstrates:
//! - Fetching daily closes from the price feed in one request
//! - Resolving the common trading-date anchors for the whole universe
//! - Ranking tickers by anchored momentum

use ancora::prelude::*;
use ancora_feed::FeedClient;
use chrono::Utc;

/// Universe to screen (the request layer accepts at most five tickers).
const UNIVERSE: &[&str] = &["AAPL", "MSFT", "NVDA", "AMZN", "META"];

/// Lookback in months.
const LOOKBACK: u32 = 3;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let as_of = Utc::now().date_naive().format("%Y-%m").to_string();
    let tickers: Vec<String> = UNIVERSE.iter().map(|s| s.to_string()).collect();
    let request = MomentumRequest::new(tickers, Unit::Month, LOOKBACK, &as_of)?;
    let window = compute_window(request.unit(), request.periods(), request.reference())?;

    let client = FeedClient::from_env();
    println!("Fetching {} to {} from {}...", window.from, window.to, client.base_url());

    let series = match client.daily_closes(request.tickers(), window).await {
        Ok(series) => series,
        Err(e) => {
            eprintln!("Warning: price fetch failed: {e}");
            PriceSeries::new()
        }
    };

    let outcome = evaluate(&series, &request);

    println!("\nMomentum Screen ({LOOKBACK}M, as of {})", request.reference());
    println!("══════════════════════════════════");
    match (outcome.anchors.past.date(), outcome.anchors.current.date()) {
        (Some(past), Some(current)) => println!("Anchors: {past} -> {current}"),
        _ => {
            println!("No common anchor pair available; nothing to rank.");
            return Ok(());
        }
    }
    println!();

    // Rank by momentum, best first; tickers without a value go last.
    let mut ranked: Vec<(&str, f64)> = request
        .tickers()
        .iter()
        .zip(&outcome.values)
        .filter_map(|(ticker, value)| value.map(|v| (ticker.as_str(), v)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    for (rank, (ticker, value)) in ranked.iter().enumerate() {
        println!("{:>2}. {:<8} {:+.1}%", rank + 1, ticker, value * 100.0);
    }
    for (ticker, value) in request.tickers().iter().zip(&outcome.values) {
        if value.is_none() {
            println!("  . {:<8} N/A", ticker);
        }
    }

    Ok(())
}
