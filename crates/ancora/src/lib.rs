#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ancora/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # ancora
//!
//! Common-anchor momentum computation for small ticker sets.
//!
//! ancora is an umbrella crate that re-exports the ancora sub-crates for
//! convenience. It provides a unified API for resolving shared trading-date
//! anchors across a group of tickers and computing period-over-period simple
//! returns against those anchors.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ancora::prelude::*;
//! use ancora::feed::FeedClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let request = MomentumRequest::new(
//!     vec!["AAPL".into(), "MSFT".into()],
//!     Unit::Month,
//!     3,
//!     "2025-09",
//! )?;
//!
//! let window = compute_window(request.unit(), request.periods(), request.reference())?;
//! let series = FeedClient::from_env()
//!     .daily_closes(request.tickers(), window)
//!     .await
//!     .unwrap_or_default();
//!
//! let report = evaluate(&series, &request);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`engine`] - Date windows, anchor resolution, and momentum arithmetic
//! - [`feed`] - HTTP client for the daily-close price feed
//!
//! ## Architecture
//!
//! ancora splits the computation into three pure stages plus one I/O stage:
//!
//! 1. **Windows** map a reference period to the calendar range worth fetching
//! 2. **Feed** retrieves daily closes for every requested ticker in that range
//! 3. **Anchors** pick the current and past trading dates shared by all tickers
//! 4. **Momentum** divides closes at the two anchors into a simple return
//!
//! Only the feed stage touches the network. Missing history never aborts a
//! computation: anchors degrade to unavailable and momentum values to `None`,
//! so one sparsely traded ticker cannot take down a whole request.

/// Version information for the ancora crate.
///
/// This constant contains the current version of ancora as specified in Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Engine
// ============================================================================

/// Anchor-resolution and momentum-computation engine.
///
/// This module re-exports the [`ancora_core`] crate, which holds the pure,
/// synchronous half of ancora:
///
/// - [`MomentumRequest`] - Validated description of one computation
/// - [`compute_window`] - Reference period to fetch range
/// - [`resolve_anchors`] - Shared current/past trading dates for a ticker group
/// - [`evaluate`] - End-to-end anchors plus per-ticker momentum
///
/// # Example
///
/// ```ignore
/// use ancora::engine::{resolve_anchors, Unit};
/// ```
pub mod engine {
    pub use ancora_core::*;
}

// Re-export the engine API at top level for convenience
pub use ancora_core::{
    compute_momentum, compute_window, evaluate, resolve_anchors, round_to_saturday,
};
pub use ancora_core::{
    Anchor, AnchorPair, DateWindow, MomentumReport, MomentumRequest, ReferencePeriod,
};

// Re-export error types
pub use ancora_core::{AncoraError, Result};

// Re-export common types
pub use ancora_core::{Date, PricePoint, PriceSeries, Symbol, Unit, MAX_TICKERS};

// ============================================================================
// Price Feed
// ============================================================================

/// Daily-close price feed client.
///
/// This module provides access to the external price API that serves daily
/// closing prices for the requested tickers.
///
/// ## Setup
///
/// 1. Set `STOCK_API_BASE` to the feed's base URL (a public default is built in)
/// 2. Optionally set `STOCK_API_KEY` if the feed requires bearer authentication
///
/// Both variables may also live in a `.env` file.
///
/// ## Example
///
/// ```ignore
/// use ancora::feed::FeedClient;
/// use ancora::{compute_window, Unit, ReferencePeriod};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = FeedClient::from_env();
///
///     let reference = ReferencePeriod::parse(Unit::Month, "2025-09")?;
///     let window = compute_window(Unit::Month, 3, reference)?;
///
///     let series = client.daily_closes(&["AAPL".into()], window).await?;
///     println!("{} trading days", series.series("AAPL").len());
///
///     Ok(())
/// }
/// ```
pub mod feed {
    pub use ancora_feed::*;
}

// Re-export the client at top level for convenience
pub use ancora_feed::{FeedClient, FeedError};

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions for
/// working with ancora. Import it with:
///
/// ```ignore
/// use ancora::prelude::*;
/// ```
///
/// This brings into scope:
/// - Request types: [`MomentumRequest`], [`ReferencePeriod`], [`Unit`]
/// - Engine entry points: [`compute_window`], [`resolve_anchors`], [`evaluate`]
/// - Result types: [`Anchor`], [`AnchorPair`], [`MomentumReport`]
/// - Error types: [`Result`], [`AncoraError`]
pub mod prelude {
    pub use crate::{compute_momentum, compute_window, evaluate, resolve_anchors};
    pub use crate::{
        Anchor, AnchorPair, DateWindow, MomentumReport, MomentumRequest, ReferencePeriod,
    };
    pub use crate::{AncoraError, Result};
    pub use crate::{Date, PricePoint, PriceSeries, Unit};
}

// ============================================================================
// Tests
// ============================================================================
