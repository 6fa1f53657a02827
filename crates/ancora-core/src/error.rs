//! Error types for the ancora engine.
//!
//! Only boundary validation produces errors here. Once a request is
//! constructed, anchor resolution and momentum computation express every
//! failure mode as a data value (an unavailable anchor or a missing
//! per-ticker result), never as an `Err`.

use thiserror::Error;

/// The main error type for ancora operations.
///
/// These are the fail-fast cases: a request that is malformed before any
/// window calculation begins.
#[derive(Debug, Error)]
pub enum AncoraError {
    /// Reference period string does not match the format the unit expects.
    #[error("Invalid reference period: {0}")]
    InvalidPeriod(String),

    /// Unknown time unit name.
    #[error("Invalid unit: {0} (expected month, week, or day)")]
    InvalidUnit(String),

    /// Lookback count outside the accepted range.
    #[error("Invalid period count: {0} (must be at least 1)")]
    InvalidCount(u32),

    /// Ticker list violates the request limits.
    #[error("Invalid ticker list: {0}")]
    InvalidTickers(String),

    /// Calendar arithmetic left the representable date range.
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}

/// A specialized Result type for ancora operations.
///
/// This is a convenience type that uses [`AncoraError`] as the error type.
pub type Result<T> = std::result::Result<T, AncoraError>;
