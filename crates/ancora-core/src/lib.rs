#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ancora/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Anchor-resolution and momentum-computation engine for ancora.
//!
//! This crate derives the calendar window a request needs, resolves the
//! common trading-date anchors shared by every requested ticker, and
//! computes per-ticker simple returns between them. Everything here is a
//! pure, synchronous function over immutable values; fetching prices and
//! presenting results belong to the surrounding crates.

/// The version of the ancora-core crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod anchor;
pub mod error;
pub mod momentum;
pub mod request;
pub mod types;
pub mod window;

// Re-exports
pub use anchor::{Anchor, AnchorPair, resolve_anchors};
pub use error::{AncoraError, Result};
pub use momentum::{MomentumReport, compute_momentum, evaluate};
pub use request::{MAX_TICKERS, MomentumRequest, ReferencePeriod};
pub use types::{Date, PricePoint, PriceSeries, Symbol, Unit};
pub use window::{DateWindow, compute_window, round_to_saturday};
