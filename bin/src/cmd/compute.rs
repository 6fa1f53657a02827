//! One-shot momentum computation command.

use crate::{data, render};
use ancora_core::{MomentumRequest, Unit, compute_window, evaluate};
use ancora_feed::FeedClient;
use anyhow::Result;
use chrono::Utc;

/// Compute anchored momentum for the given tickers and print the result.
pub(crate) async fn run(
    tickers: Vec<String>,
    unit: &str,
    periods: u32,
    as_of: Option<String>,
    format: &str,
) -> Result<()> {
    let unit: Unit = unit.parse()?;
    let as_of = as_of.unwrap_or_else(|| default_reference(unit));
    let request = MomentumRequest::new(tickers, unit, periods, &as_of)?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Anchored Momentum                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Tickers:  {}", request.tickers().join(", "));
    println!("Unit:     {}", request.unit());
    println!("Periods:  {}", request.periods());
    println!("As of:    {}", request.reference());
    println!();

    let window = compute_window(request.unit(), request.periods(), request.reference())?;
    let client = FeedClient::from_env();

    println!(
        "Fetching daily closes from {} ({} to {})...",
        client.base_url(),
        window.from,
        window.to
    );
    let series = data::load_price_series(&client, request.tickers(), window).await;
    println!();

    let report = evaluate(&series, &request);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("MOMENTUM (as of {})", request.reference());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    if format == "json" {
        let response = render::ComputeResponse::build(&request, &report);
        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| anyhow::anyhow!("JSON serialization error: {}", e))?;
        println!("{}", json);
    } else {
        println!(
            "Anchors:  {}  ->  {}",
            render::format_anchor(report.anchors.past),
            render::format_anchor(report.anchors.current)
        );
        println!();

        println!("{:<10} {:>12}", "Symbol", "Momentum");
        println!("{}", "─".repeat(24));
        for (ticker, value) in request.tickers().iter().zip(&report.values) {
            println!("{:<10} {:>12}", ticker, render::format_momentum(*value));
        }
        println!();

        if !report.anchors.is_complete() {
            println!("No common anchor pair could be established for the requested window.");
            println!("Momentum needs both anchors; try a different reference period or unit.");
            println!();
        }
    }

    Ok(())
}

/// The reference period for today, in the unit's expected format.
fn default_reference(unit: Unit) -> String {
    let today = Utc::now().date_naive();
    match unit {
        Unit::Month => today.format("%Y-%m").to_string(),
        Unit::Week | Unit::Day => today.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reference_matches_unit_format() {
        let month = default_reference(Unit::Month);
        assert_eq!(month.len(), 7);
        assert!(MomentumRequest::new(vec!["SPY".to_string()], Unit::Month, 3, &month).is_ok());

        let day = default_reference(Unit::Day);
        assert_eq!(day.len(), 10);
        assert!(MomentumRequest::new(vec!["SPY".to_string()], Unit::Day, 3, &day).is_ok());
    }
}
