//! Wire types for price-data responses.
//!
//! The service answers the same endpoint in one of two shapes depending on
//! deployment: a map keyed by ticker, or a flat array of rows carrying their
//! own symbol. Both normalize into [`PriceSeries`]; incomplete rows are
//! skipped rather than failing the payload.

use std::collections::HashMap;

use ancora_core::{Date, PricePoint, PriceSeries};
use serde::Deserialize;

/// Either response shape of the prices endpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PricesPayload {
    /// `{"AAPL": [{"date": "...", "close": ...}, ...], ...}`
    Keyed(HashMap<String, Vec<KeyedBar>>),
    /// `[{"symbol": "...", "date": "...", "close": ...}, ...]`
    Flat(Vec<FlatBar>),
}

/// One observation inside the keyed shape.
#[derive(Debug, Deserialize)]
pub(crate) struct KeyedBar {
    date: String,
    close: f64,
}

/// One row of the flat shape. Field names vary between deployments, and any
/// of them may be absent.
#[derive(Debug, Deserialize)]
pub(crate) struct FlatBar {
    #[serde(default, alias = "ticker", alias = "Symbol")]
    symbol: Option<String>,
    #[serde(default, alias = "Date")]
    date: Option<String>,
    #[serde(default, alias = "Close")]
    close: Option<f64>,
}

impl PricesPayload {
    /// Normalizes the payload into a `PriceSeries`.
    ///
    /// Keyed series keep their tickers even when empty; flat rows missing a
    /// symbol, date, or close are dropped. Flat rows group under the
    /// uppercased symbol so case variants of one ticker merge rather than
    /// replacing each other on insert. Ordering is normalized by the series
    /// itself.
    pub(crate) fn into_series(self) -> PriceSeries {
        let mut series = PriceSeries::new();
        match self {
            Self::Keyed(map) => {
                for (symbol, bars) in map {
                    let points = bars.iter().filter_map(KeyedBar::point).collect();
                    series.insert(symbol, points);
                }
            }
            Self::Flat(rows) => {
                let mut grouped: HashMap<String, Vec<PricePoint>> = HashMap::new();
                for row in &rows {
                    if let Some((symbol, point)) = row.entry() {
                        grouped.entry(symbol.to_uppercase()).or_default().push(point);
                    }
                }
                for (symbol, points) in grouped {
                    series.insert(symbol, points);
                }
            }
        }
        series
    }
}

impl KeyedBar {
    fn point(&self) -> Option<PricePoint> {
        let date = parse_date(&self.date)?;
        Some(PricePoint::new(date, self.close))
    }
}

impl FlatBar {
    fn entry(&self) -> Option<(String, PricePoint)> {
        let symbol = self.symbol.as_deref()?.to_string();
        let date = parse_date(self.date.as_deref()?)?;
        let close = self.close?;
        Some((symbol, PricePoint::new(date, close)))
    }
}

fn parse_date(s: &str) -> Option<Date> {
    Date::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_keyed_shape_normalizes() {
        let json = r#"{
            "aapl": [
                {"date": "2025-08-29", "close": 232.14},
                {"date": "2025-08-27", "close": 230.49}
            ],
            "MSFT": []
        }"#;
        let payload: PricesPayload = serde_json::from_str(json).unwrap();
        let series = payload.into_series();

        let points = series.series("AAPL");
        assert_eq!(points.len(), 2);
        // Normalization sorts ascending regardless of wire order.
        assert_eq!(points[0].date, date(2025, 8, 27));
        assert_eq!(points[1].close, 232.14);
        // An empty keyed series keeps its ticker.
        assert_eq!(series.len(), 2);
        assert!(series.series("MSFT").is_empty());
    }

    #[test]
    fn test_flat_shape_aliases_and_grouping() {
        let json = r#"[
            {"symbol": "AAPL", "date": "2025-08-29", "close": 232.14, "volume": 51231},
            {"ticker": "aapl", "date": "2025-08-28", "close": 231.59},
            {"Symbol": "MSFT", "Date": "2025-08-29", "Close": 414}
        ]"#;
        let payload: PricesPayload = serde_json::from_str(json).unwrap();
        let series = payload.into_series();

        // The "aapl" row merges into AAPL's group, sorted by date.
        let aapl = series.series("AAPL");
        assert_eq!(aapl.len(), 2);
        assert_eq!(aapl[0].date, date(2025, 8, 28));
        assert_eq!(aapl[1].date, date(2025, 8, 29));
        assert_eq!(series.close_on("MSFT", date(2025, 8, 29)), Some(414.0));
    }

    #[test]
    fn test_flat_shape_skips_incomplete_rows() {
        let json = r#"[
            {"symbol": "AAPL", "date": "2025-08-29", "close": 232.14},
            {"symbol": "AAPL", "date": "2025-08-28"},
            {"date": "2025-08-27", "close": 230.49},
            {"symbol": "AAPL", "date": "not-a-date", "close": 230.49}
        ]"#;
        let payload: PricesPayload = serde_json::from_str(json).unwrap();
        let series = payload.into_series();

        assert_eq!(series.series("AAPL").len(), 1);
    }

    #[test]
    fn test_undecodable_payload_is_an_error() {
        let result: Result<PricesPayload, _> = serde_json::from_str(r#""just a string""#);
        assert!(result.is_err());
    }
}
