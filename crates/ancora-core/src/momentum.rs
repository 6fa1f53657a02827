//! Momentum computation over resolved anchors.
//!
//! Given the two anchor dates, each ticker's simple return is computed
//! independently by exact-date lookup. A ticker missing a price at either
//! anchor yields `None` without affecting the rest of the batch.

use crate::anchor::{AnchorPair, resolve_anchors};
use crate::request::MomentumRequest;
use crate::types::{Date, PriceSeries, Symbol};

/// The engine's full output for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentumReport {
    /// The anchor pair the values were computed against.
    pub anchors: AnchorPair,
    /// Per-ticker simple returns, in the request's ticker order.
    pub values: Vec<Option<f64>>,
}

/// Computes each ticker's simple return between the two anchor dates.
///
/// Output order matches `tickers` exactly. Prices are looked up by exact
/// date; a ticker missing either price reports `None`. The division is not
/// guarded: a zero or negative past price produces whatever value the
/// arithmetic yields, and suppressing non-finite results is left to
/// presentation.
#[must_use]
pub fn compute_momentum(
    series: &PriceSeries,
    tickers: &[Symbol],
    current: Date,
    past: Date,
) -> Vec<Option<f64>> {
    tickers
        .iter()
        .map(|ticker| {
            series
                .close_on(ticker, current)
                .zip(series.close_on(ticker, past))
                .map(|(current_close, past_close)| current_close / past_close - 1.0)
        })
        .collect()
}

/// Runs anchor resolution and momentum computation for one request.
///
/// When either anchor is unavailable the momentum step is skipped entirely
/// and every ticker reports `None`.
#[must_use]
pub fn evaluate(series: &PriceSeries, request: &MomentumRequest) -> MomentumReport {
    let anchors = resolve_anchors(
        series,
        request.unit(),
        request.periods(),
        request.reference(),
    );
    let values = match (anchors.current.date(), anchors.past.date()) {
        (Some(current), Some(past)) => compute_momentum(series, request.tickers(), current, past),
        _ => vec![None; request.tickers().len()],
    };
    MomentumReport { anchors, values }
}
