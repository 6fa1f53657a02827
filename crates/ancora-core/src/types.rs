//! Common types used throughout the ancora engine.
//!
//! This module defines the core data types for representing per-ticker price
//! history and the time units a momentum request can be expressed in.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AncoraError;

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier.
///
/// Symbols identify securities across the ancora crates. Typically these are
/// ticker symbols like "AAPL" or "MSFT", stored uppercase.
pub type Symbol = String;

/// A single closing-price observation for one ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date of the observation.
    pub date: Date,
    /// Closing price on that date.
    pub close: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub const fn new(date: Date, close: f64) -> Self {
        Self { date, close }
    }
}

/// Container for per-ticker price history.
///
/// `PriceSeries` maps uppercase ticker symbols to date-ordered sequences of
/// [`PricePoint`]s. A ticker may map to an empty sequence, and a ticker that
/// is absent altogether behaves identically to one with an empty sequence:
/// lookups return nothing rather than failing.
///
/// # Example
///
/// ```
/// use ancora_core::types::{Date, PricePoint, PriceSeries};
///
/// let mut series = PriceSeries::new();
/// series.insert(
///     "aapl",
///     vec![PricePoint::new(Date::from_ymd_opt(2025, 8, 29).unwrap(), 232.14)],
/// );
///
/// let date = Date::from_ymd_opt(2025, 8, 29).unwrap();
/// assert_eq!(series.close_on("AAPL", date), Some(232.14));
/// assert_eq!(series.close_on("MSFT", date), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    /// Uppercase symbol to date-sorted observations.
    data: HashMap<Symbol, Vec<PricePoint>>,
}

impl PriceSeries {
    /// Creates an empty `PriceSeries`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Inserts (or replaces) one ticker's history.
    ///
    /// The symbol is normalized to uppercase and the points are sorted by
    /// date so lookups can rely on ordering.
    pub fn insert(&mut self, symbol: impl Into<Symbol>, mut points: Vec<PricePoint>) {
        points.sort_by_key(|p| p.date);
        self.data.insert(symbol.into().to_uppercase(), points);
    }

    /// Returns one ticker's observations, empty if the ticker is unknown.
    #[must_use]
    pub fn series(&self, symbol: &str) -> &[PricePoint] {
        self.data
            .get(&symbol.to_uppercase())
            .map_or(&[], Vec::as_slice)
    }

    /// Looks up the closing price for a ticker on an exact date.
    ///
    /// No interpolation: a date with no observation yields `None`, as does
    /// an unknown ticker.
    #[must_use]
    pub fn close_on(&self, symbol: &str, date: Date) -> Option<f64> {
        let points = self.series(symbol);
        points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|idx| points[idx].close)
    }

    /// Iterates over `(symbol, observations)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PricePoint])> {
        self.data.iter().map(|(s, p)| (s.as_str(), p.as_slice()))
    }

    /// Returns the known symbols, sorted.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self.data.keys().cloned().collect();
        symbols.sort();
        symbols
    }

    /// Returns the number of tickers present (including empty ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether no tickers are present at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<HashMap<Symbol, Vec<PricePoint>>> for PriceSeries {
    fn from(data: HashMap<Symbol, Vec<PricePoint>>) -> Self {
        let mut series = Self::new();
        for (symbol, points) in data {
            series.insert(symbol, points);
        }
        series
    }
}

/// The time unit a momentum request is expressed in.
///
/// Each unit carries its own calendar-window and anchor-search semantics:
/// month and week anchors are calendar buckets, day anchors are exact
/// trading-day offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Calendar months; reference period is a year-month.
    Month,
    /// Trading weeks anchored on Saturdays.
    Week,
    /// Exact trading days.
    Day,
}

impl Unit {
    /// Returns the lowercase wire name of the unit.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = AncoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "month" => Ok(Self::Month),
            "week" => Ok(Self::Week),
            "day" => Ok(Self::Day),
            other => Err(AncoraError::InvalidUnit(other.to_string())),
        }
    }
}
