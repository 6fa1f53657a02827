//! Calendar window derivation.
//!
//! Before any prices are fetched, the engine derives the `[from, to]` range
//! wide enough to contain both the current and past anchor candidates plus
//! buffer for non-trading days. The range is a pure function of the unit,
//! the period count, and the reference period.

use chrono::{Datelike, Duration, Months};
use serde::Serialize;

use crate::error::{AncoraError, Result};
use crate::request::ReferencePeriod;
use crate::types::{Date, Unit};

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    /// First date of the range, inclusive.
    pub from: Date,
    /// Last date of the range, inclusive.
    pub to: Date,
}

impl DateWindow {
    /// Creates a window from its bounds.
    #[must_use]
    pub const fn new(from: Date, to: Date) -> Self {
        Self { from, to }
    }

    /// Returns whether `date` falls inside the window, bounds included.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Derives the fetch window for a request.
///
/// - `Month`: `to` is the last calendar day of the month preceding the
///   reference period and `from` lies `periods + 1` months earlier, so the
///   past anchor's own month is always inside the window.
/// - `Week`: `to` is the Saturday of the reference date's week and `from`
///   lies `periods + 1` weeks earlier.
/// - `Day`: `to` is the reference date itself and `from` lies
///   `2 * (periods + 20)` calendar days earlier, a deliberately generous
///   conversion from trading days to calendar days that absorbs weekends
///   and holidays without a trading calendar.
///
/// The result always satisfies `from < to`. Errs only when the arithmetic
/// would leave chrono's representable date range.
pub fn compute_window(unit: Unit, periods: u32, reference: ReferencePeriod) -> Result<DateWindow> {
    match unit {
        Unit::Month => {
            let reference_date = reference.as_date();
            let first_of_reference =
                Date::from_ymd_opt(reference_date.year(), reference_date.month(), 1)
                    .ok_or_else(|| out_of_range(reference))?;
            let to = first_of_reference
                .pred_opt()
                .ok_or_else(|| out_of_range(reference))?;
            let from = to
                .checked_sub_months(Months::new(periods + 1))
                .ok_or_else(|| out_of_range(reference))?;
            Ok(DateWindow::new(from, to))
        }
        Unit::Week => {
            let to = round_to_saturday(reference.as_date());
            let from = to
                .checked_sub_signed(Duration::weeks(i64::from(periods) + 1))
                .ok_or_else(|| out_of_range(reference))?;
            Ok(DateWindow::new(from, to))
        }
        Unit::Day => {
            let to = reference.as_date();
            let from = to
                .checked_sub_signed(Duration::days(2 * (i64::from(periods) + 20)))
                .ok_or_else(|| out_of_range(reference))?;
            Ok(DateWindow::new(from, to))
        }
    }
}

/// Rounds a date forward to the Saturday of its week.
///
/// Saturdays are their own week's anchor day and are returned unchanged;
/// Sunday through Friday advance one to six days.
#[must_use]
pub fn round_to_saturday(date: Date) -> Date {
    let days_ahead = (5 + 7 - i64::from(date.weekday().num_days_from_monday())) % 7;
    date + Duration::days(days_ahead)
}

fn out_of_range(reference: ReferencePeriod) -> AncoraError {
    AncoraError::DateOutOfRange(reference.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_window_ends_before_reference_month() {
        let reference = ReferencePeriod::parse(Unit::Month, "2025-09").unwrap();
        let window = compute_window(Unit::Month, 3, reference).unwrap();
        assert_eq!(window.to, date(2025, 8, 31));
        // Four months back from Aug 31 clamps to the shorter April.
        assert_eq!(window.from, date(2025, 4, 30));
    }

    #[test]
    fn test_month_window_crosses_year_boundary() {
        let reference = ReferencePeriod::parse(Unit::Month, "2026-01").unwrap();
        let window = compute_window(Unit::Month, 1, reference).unwrap();
        assert_eq!(window.to, date(2025, 12, 31));
        assert_eq!(window.from, date(2025, 10, 31));
    }

    #[test]
    fn test_week_window_from_saturday_reference() {
        let reference = ReferencePeriod::parse(Unit::Week, "2025-09-06").unwrap();
        let window = compute_window(Unit::Week, 4, reference).unwrap();
        assert_eq!(window.to, date(2025, 9, 6));
        assert_eq!(window.from, date(2025, 8, 2));
    }

    #[test]
    fn test_week_window_rounds_midweek_reference() {
        let reference = ReferencePeriod::parse(Unit::Week, "2025-09-03").unwrap();
        let window = compute_window(Unit::Week, 1, reference).unwrap();
        assert_eq!(window.to, date(2025, 9, 6));
        assert_eq!(window.from, date(2025, 8, 23));
    }

    #[test]
    fn test_day_window_buffer() {
        let reference = ReferencePeriod::parse(Unit::Day, "2025-09-03").unwrap();
        let window = compute_window(Unit::Day, 20, reference).unwrap();
        assert_eq!(window.to, date(2025, 9, 3));
        assert_eq!(window.from, date(2025, 6, 15));
    }

    #[test]
    fn test_window_is_always_ordered() {
        let cases = [
            (Unit::Month, 1, ReferencePeriod::parse(Unit::Month, "2025-01").unwrap()),
            (Unit::Week, 52, ReferencePeriod::parse(Unit::Week, "2025-06-11").unwrap()),
            (Unit::Day, 1, ReferencePeriod::parse(Unit::Day, "2025-06-11").unwrap()),
        ];
        for (unit, periods, reference) in cases {
            let window = compute_window(unit, periods, reference).unwrap();
            assert!(window.from < window.to, "{unit} window must be ordered");
        }
    }

    #[test]
    fn test_round_to_saturday_is_idempotent() {
        let saturday = date(2025, 9, 6);
        assert_eq!(round_to_saturday(saturday), saturday);
        assert_eq!(round_to_saturday(round_to_saturday(date(2025, 9, 1))), date(2025, 9, 6));
    }

    #[test]
    fn test_round_to_saturday_advances_other_weekdays() {
        // Sunday 2025-08-31 through Friday 2025-09-05 all land on 2025-09-06.
        for day in 0..7i64 {
            let input = date(2025, 8, 31) + Duration::days(day);
            let rounded = round_to_saturday(input);
            assert_eq!(rounded, date(2025, 9, 6));
            let advance = (rounded - input).num_days();
            assert!((0..=6).contains(&advance));
        }
    }

    #[test]
    fn test_window_contains_bounds() {
        let window = DateWindow::new(date(2025, 8, 1), date(2025, 8, 31));
        assert!(window.contains(date(2025, 8, 1)));
        assert!(window.contains(date(2025, 8, 31)));
        assert!(!window.contains(date(2025, 7, 31)));
        assert!(!window.contains(date(2025, 9, 1)));
    }
}
