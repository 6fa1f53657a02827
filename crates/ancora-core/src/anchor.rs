//! Common trading-date anchor resolution.
//!
//! Momentum is only meaningful when every ticker is measured over the same
//! two dates. The resolver intersects the tickers' trading dates inside the
//! fetch window and applies unit-specific search rules to pick a single
//! "current" anchor and a single "past" anchor, reporting an explicit
//! [`Anchor::Unavailable`] whenever no consistent choice exists.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, Months};

use crate::request::ReferencePeriod;
use crate::types::{Date, PriceSeries, Unit};
use crate::window::{DateWindow, compute_window, round_to_saturday};

/// One endpoint of a momentum comparison.
///
/// A tagged variant rather than a sentinel value, so absence can never be
/// conflated with a real date downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// A trading date shared by every contributing ticker.
    Resolved(Date),
    /// No consistent choice exists.
    Unavailable,
}

impl Anchor {
    /// Returns the resolved date, if any.
    #[must_use]
    pub const fn date(&self) -> Option<Date> {
        match self {
            Self::Resolved(date) => Some(*date),
            Self::Unavailable => None,
        }
    }

    /// Returns whether this anchor carries a date.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// The current/past anchor pair for one request.
///
/// A partially resolved pair (current found, past not) is valid output and
/// remains distinguishable from the fully unavailable case; momentum
/// computation requires both fields to be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorPair {
    /// The more recent comparison date.
    pub current: Anchor,
    /// The older comparison date.
    pub past: Anchor,
}

impl AnchorPair {
    /// The fully unavailable pair.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            current: Anchor::Unavailable,
            past: Anchor::Unavailable,
        }
    }

    /// Returns whether both anchors are resolved.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.current.is_resolved() && self.past.is_resolved()
    }
}

/// Resolves the current and past anchors for a request.
///
/// The fetch window is re-derived from `(unit, periods, reference)` and each
/// ticker's dates are restricted to it before intersecting. Tickers with no
/// in-window dates are excluded from the intersection; if no ticker
/// contributes at all, or the intersection is empty, both anchors are
/// unavailable. The current anchor is searched latest-first with the unit's
/// rule; the past anchor is searched only among common dates strictly before
/// the current one.
#[must_use]
pub fn resolve_anchors(
    series: &PriceSeries,
    unit: Unit,
    periods: u32,
    reference: ReferencePeriod,
) -> AnchorPair {
    let Ok(window) = compute_window(unit, periods, reference) else {
        return AnchorPair::unavailable();
    };
    let common = common_dates(series, window);
    if common.is_empty() {
        return AnchorPair::unavailable();
    }
    let Some(current_idx) = current_anchor(&common, unit, reference) else {
        return AnchorPair::unavailable();
    };
    let past = past_anchor(&common, current_idx, unit, periods);

    AnchorPair {
        current: Anchor::Resolved(common[current_idx]),
        past: past.map_or(Anchor::Unavailable, Anchor::Resolved),
    }
}

/// Intersects the in-window trading dates of every contributing ticker,
/// ascending. An empty collection of date sets yields no common dates,
/// never all dates.
fn common_dates(series: &PriceSeries, window: DateWindow) -> Vec<Date> {
    let mut sets = series.iter().filter_map(|(_, points)| {
        let dates: BTreeSet<Date> = points
            .iter()
            .map(|p| p.date)
            .filter(|d| window.contains(*d))
            .collect();
        (!dates.is_empty()).then_some(dates)
    });
    let Some(first) = sets.next() else {
        return Vec::new();
    };
    sets.fold(first, |acc, set| acc.intersection(&set).copied().collect())
        .into_iter()
        .collect()
}

/// Finds the index of the current anchor in `common`, scanning latest-first.
fn current_anchor(common: &[Date], unit: Unit, reference: ReferencePeriod) -> Option<usize> {
    match unit {
        Unit::Month => {
            // Target is the calendar month immediately preceding the
            // reference period.
            let reference_date = reference.as_date();
            let first_of_reference =
                Date::from_ymd_opt(reference_date.year(), reference_date.month(), 1)?;
            let target = month_of(first_of_reference.pred_opt()?);
            common.iter().rposition(|d| month_of(*d) == target)
        }
        Unit::Week => {
            let saturday = round_to_saturday(reference.as_date());
            let week_start = saturday - Duration::days(6);
            common
                .iter()
                .rposition(|d| (week_start..=saturday).contains(d))
        }
        Unit::Day => {
            let reference_date = reference.as_date();
            common.iter().rposition(|d| *d <= reference_date)
        }
    }
}

/// Finds the past anchor among the common dates strictly before the current
/// anchor at `current_idx`.
fn past_anchor(common: &[Date], current_idx: usize, unit: Unit, periods: u32) -> Option<Date> {
    let current = common[current_idx];
    let prefix = &common[..current_idx];
    match unit {
        Unit::Month => {
            let target = month_of(current.checked_sub_months(Months::new(periods))?);
            prefix.iter().rev().copied().find(|d| month_of(*d) == target)
        }
        Unit::Week => {
            // Ideal match point is one day before the date n weeks back;
            // candidates further than 7 days from it are rejected. The
            // left-to-right scan with strict improvement keeps the earliest
            // of two equally close dates.
            let target = current - Duration::weeks(i64::from(periods)) - Duration::days(1);
            let mut best = None;
            let mut best_distance = i64::MAX;
            for &candidate in prefix {
                let distance = (candidate - target).num_days().abs();
                if distance <= 7 && distance < best_distance {
                    best_distance = distance;
                    best = Some(candidate);
                }
            }
            best
        }
        Unit::Day => {
            // Exact positional offset: missing trading days are never
            // approximated for the day unit.
            let offset = periods as usize;
            (current_idx >= offset).then(|| common[current_idx - offset])
        }
    }
}

fn month_of(date: Date) -> (i32, u32) {
    (date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PricePoint;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    /// Monday-to-Friday observations between two dates, prices ascending.
    fn weekdays(from: Date, to: Date) -> Vec<PricePoint> {
        let mut points = Vec::new();
        let mut day = from;
        let mut price = 100.0;
        while day <= to {
            if day.weekday().number_from_monday() <= 5 {
                points.push(PricePoint::new(day, price));
                price += 1.0;
            }
            day = day.succ_opt().unwrap();
        }
        points
    }

    fn points_on(dates: &[Date]) -> Vec<PricePoint> {
        dates
            .iter()
            .enumerate()
            .map(|(i, d)| PricePoint::new(*d, 100.0 + i as f64))
            .collect()
    }

    #[test]
    fn test_month_anchors_with_full_history() {
        let mut series = PriceSeries::new();
        series.insert("AAPL", weekdays(date(2025, 4, 1), date(2025, 9, 10)));
        series.insert("MSFT", weekdays(date(2025, 4, 1), date(2025, 9, 10)));

        let reference = ReferencePeriod::parse(Unit::Month, "2025-09").unwrap();
        let pair = resolve_anchors(&series, Unit::Month, 3, reference);

        // Last trading day of August, and of May three months earlier.
        assert_eq!(pair.current, Anchor::Resolved(date(2025, 8, 29)));
        assert_eq!(pair.past, Anchor::Resolved(date(2025, 5, 30)));
    }

    #[test]
    fn test_month_current_requires_preceding_month() {
        let mut series = PriceSeries::new();
        series.insert("AAPL", weekdays(date(2025, 4, 1), date(2025, 7, 15)));

        let reference = ReferencePeriod::parse(Unit::Month, "2025-09").unwrap();
        let pair = resolve_anchors(&series, Unit::Month, 2, reference);

        // No August dates at all, so not even a current anchor exists.
        assert_eq!(pair, AnchorPair::unavailable());
    }

    #[test]
    fn test_week_anchors_from_saturday_reference() {
        let mut series = PriceSeries::new();
        series.insert("AAPL", weekdays(date(2025, 7, 28), date(2025, 9, 5)));
        series.insert("MSFT", weekdays(date(2025, 7, 28), date(2025, 9, 5)));

        let reference = ReferencePeriod::parse(Unit::Week, "2025-09-06").unwrap();
        let pair = resolve_anchors(&series, Unit::Week, 4, reference);

        // The reference Saturday is its own week anchor; the latest common
        // date inside that Sun-Sat span is Friday the 5th.
        assert_eq!(pair.current, Anchor::Resolved(date(2025, 9, 5)));
        // Four weeks back lands on Fri Aug 8; the ideal match point is the
        // day before, and Thu Aug 7 is a trading date at distance zero.
        assert_eq!(pair.past, Anchor::Resolved(date(2025, 8, 7)));
    }

    #[test]
    fn test_week_past_anchor_prefers_earlier_of_equally_close() {
        let dates = [
            date(2025, 8, 26),
            date(2025, 8, 30),
            date(2025, 9, 5),
        ];
        let mut series = PriceSeries::new();
        series.insert("AAPL", points_on(&dates));

        let reference = ReferencePeriod::parse(Unit::Week, "2025-09-06").unwrap();
        let pair = resolve_anchors(&series, Unit::Week, 1, reference);

        assert_eq!(pair.current, Anchor::Resolved(date(2025, 9, 5)));
        // Target is Thu Aug 28; both remaining dates sit two days away and
        // the earlier one wins.
        assert_eq!(pair.past, Anchor::Resolved(date(2025, 8, 26)));
    }

    #[test]
    fn test_week_past_anchor_rejects_distant_candidates() {
        let dates = [date(2025, 8, 20), date(2025, 9, 5)];
        let mut series = PriceSeries::new();
        series.insert("AAPL", points_on(&dates));

        let reference = ReferencePeriod::parse(Unit::Week, "2025-09-06").unwrap();
        let pair = resolve_anchors(&series, Unit::Week, 4, reference);

        // Aug 20 is 13 days from the Aug 7 target, beyond the 7-day
        // tolerance, leaving a partially resolved pair.
        assert_eq!(pair.current, Anchor::Resolved(date(2025, 9, 5)));
        assert_eq!(pair.past, Anchor::Unavailable);
        assert!(!pair.is_complete());
    }

    #[test]
    fn test_day_anchor_positional_offset() {
        let mut series = PriceSeries::new();
        series.insert("AAPL", weekdays(date(2025, 8, 1), date(2025, 9, 3)));

        let reference = ReferencePeriod::parse(Unit::Day, "2025-09-03").unwrap();
        let pair = resolve_anchors(&series, Unit::Day, 3, reference);

        assert_eq!(pair.current, Anchor::Resolved(date(2025, 9, 3)));
        // Three trading positions back, skipping the intervening weekend.
        assert_eq!(pair.past, Anchor::Resolved(date(2025, 8, 29)));
    }

    #[test]
    fn test_day_anchor_with_insufficient_history() {
        let mut series = PriceSeries::new();
        series.insert("AAPL", weekdays(date(2025, 8, 18), date(2025, 9, 3)));

        let reference = ReferencePeriod::parse(Unit::Day, "2025-09-03").unwrap();
        let pair = resolve_anchors(&series, Unit::Day, 20, reference);

        assert_eq!(pair.current, Anchor::Resolved(date(2025, 9, 3)));
        assert_eq!(pair.past, Anchor::Unavailable);
    }

    #[test]
    fn test_day_current_anchor_is_nearest_at_or_before_reference() {
        let mut series = PriceSeries::new();
        series.insert("AAPL", weekdays(date(2025, 8, 1), date(2025, 9, 5)));

        // Sunday reference: the nearest trading day at or before it is the
        // preceding Friday.
        let reference = ReferencePeriod::parse(Unit::Day, "2025-09-07").unwrap();
        let pair = resolve_anchors(&series, Unit::Day, 1, reference);
        assert_eq!(pair.current, Anchor::Resolved(date(2025, 9, 5)));
    }

    #[test]
    fn test_intersection_skips_empty_tickers() {
        let mut series = PriceSeries::new();
        series.insert("AAPL", weekdays(date(2025, 4, 1), date(2025, 9, 10)));
        series.insert("GHOST", Vec::new());

        let reference = ReferencePeriod::parse(Unit::Month, "2025-09").unwrap();
        let pair = resolve_anchors(&series, Unit::Month, 3, reference);

        // Anchors still resolve from the ticker that has data.
        assert_eq!(pair.current, Anchor::Resolved(date(2025, 8, 29)));
        assert_eq!(pair.past, Anchor::Resolved(date(2025, 5, 30)));
    }

    #[test]
    fn test_no_data_yields_unavailable_pair() {
        let reference = ReferencePeriod::parse(Unit::Month, "2025-09").unwrap();

        let pair = resolve_anchors(&PriceSeries::new(), Unit::Month, 3, reference);
        assert_eq!(pair, AnchorPair::unavailable());

        // Data entirely outside the window behaves the same as no data.
        let mut stale = PriceSeries::new();
        stale.insert("AAPL", weekdays(date(2024, 1, 1), date(2024, 2, 1)));
        let pair = resolve_anchors(&stale, Unit::Month, 3, reference);
        assert_eq!(pair, AnchorPair::unavailable());
    }

    #[test]
    fn test_disjoint_histories_have_no_common_anchor() {
        let mut series = PriceSeries::new();
        series.insert("AAPL", weekdays(date(2025, 5, 1), date(2025, 5, 30)));
        series.insert("MSFT", weekdays(date(2025, 8, 1), date(2025, 8, 29)));

        let reference = ReferencePeriod::parse(Unit::Month, "2025-09").unwrap();
        let pair = resolve_anchors(&series, Unit::Month, 3, reference);
        assert_eq!(pair, AnchorPair::unavailable());
    }

    #[test]
    fn test_resolution_is_order_independent() {
        let aapl = weekdays(date(2025, 4, 1), date(2025, 9, 10));
        let msft = weekdays(date(2025, 4, 15), date(2025, 8, 20));
        let reference = ReferencePeriod::parse(Unit::Month, "2025-09").unwrap();

        let mut forward = PriceSeries::new();
        forward.insert("AAPL", aapl.clone());
        forward.insert("MSFT", msft.clone());

        let mut reverse = PriceSeries::new();
        reverse.insert("MSFT", msft);
        reverse.insert("AAPL", aapl);

        assert_eq!(
            resolve_anchors(&forward, Unit::Month, 3, reference),
            resolve_anchors(&reverse, Unit::Month, 3, reference)
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut series = PriceSeries::new();
        series.insert("AAPL", weekdays(date(2025, 4, 1), date(2025, 9, 10)));
        let reference = ReferencePeriod::parse(Unit::Week, "2025-09-03").unwrap();

        let first = resolve_anchors(&series, Unit::Week, 2, reference);
        let second = resolve_anchors(&series, Unit::Week, 2, reference);
        assert_eq!(first, second);
        assert!(first.is_complete());
    }
}
