//! Output rendering for momentum results.
//!
//! The engine emits semantic values only; dates, percentages, and the
//! unavailable marker are turned into user-facing strings here. The same
//! wire shape backs `--format json` and the HTTP service.

use ancora_core::{Anchor, MomentumReport, MomentumRequest};
use serde::Serialize;

/// Wire shape of one computation's outcome.
#[derive(Debug, Serialize)]
pub(crate) struct ComputeResponse {
    /// Per-ticker simple returns in request order; `null` when unavailable.
    pub results: Vec<Option<f64>>,
    /// Echo of the request that produced the results.
    pub summary: Summary,
    /// The resolved anchor dates, `"N/A"` when unresolved.
    pub anchors: AnchorStrings,
}

/// Echo of the request parameters.
#[derive(Debug, Serialize)]
pub(crate) struct Summary {
    pub tickers: Vec<String>,
    pub unit: String,
    pub n: u32,
    pub as_of_period: String,
}

/// Anchor dates as display strings.
///
/// Each side renders independently, so a partially resolved pair keeps its
/// resolved date visible instead of collapsing to two markers.
#[derive(Debug, Serialize)]
pub(crate) struct AnchorStrings {
    pub current: String,
    pub past: String,
}

impl ComputeResponse {
    pub(crate) fn build(request: &MomentumRequest, report: &MomentumReport) -> Self {
        Self {
            results: report.values.clone(),
            summary: Summary {
                tickers: request.tickers().to_vec(),
                unit: request.unit().to_string(),
                n: request.periods(),
                as_of_period: request.reference().to_string(),
            },
            anchors: AnchorStrings {
                current: format_anchor(report.anchors.current),
                past: format_anchor(report.anchors.past),
            },
        }
    }
}

/// Formats a momentum value as a signed percentage.
///
/// `None` and non-finite values both render as `N/A`; a non-finite return is
/// a numeric fact of the input data that only gets suppressed here.
pub(crate) fn format_momentum(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:+.2}%", v * 100.0),
        _ => "N/A".to_string(),
    }
}

/// Formats an anchor as `YYYY-MM-DD`, or `N/A` when unresolved.
pub(crate) fn format_anchor(anchor: Anchor) -> String {
    anchor.date().map_or_else(|| "N/A".to_string(), |d| d.to_string())
}
