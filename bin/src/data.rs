//! Price-data loading for the ancora CLI.

use ancora_core::{DateWindow, PriceSeries};
use ancora_feed::FeedClient;

/// Fetch daily closes for the given symbols over the window.
///
/// Any feed failure degrades to an empty `PriceSeries` with a logged
/// warning, so upstream outages surface as unavailable results rather
/// than aborting the request. A ticker with no history in the window is
/// indistinguishable from one the feed failed to deliver.
pub(crate) async fn load_price_series(
    client: &FeedClient,
    symbols: &[String],
    window: DateWindow,
) -> PriceSeries {
    match client.daily_closes(symbols, window).await {
        Ok(series) => series,
        Err(e) => {
            tracing::warn!("price fetch failed, treating all tickers as missing: {}", e);
            PriceSeries::new()
        }
    }
}
