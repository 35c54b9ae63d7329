//! Output formatting utilities for CLI.

use serde::Serialize;
use stix::{CaptureReport, Point};

/// JSON-serializable capture report.
#[derive(Debug, Serialize)]
pub(super) struct JsonCaptureReport {
    /// Field width in cells.
    pub(super) width: u16,
    /// Field height in cells.
    pub(super) height: u16,
    /// Hazard positions at resolution time.
    pub(super) hazards: Vec<(u16, u16)>,
    /// Cells newly captured by the event.
    pub(super) cells_captured: u32,
    /// Captured fraction of the field after the event.
    pub(super) captured_fraction: f64,
    /// Score awarded for the event.
    pub(super) score_delta: i64,
}

impl JsonCaptureReport {
    /// Create from a resolved capture report.
    pub(super) fn from_report(
        report: &CaptureReport,
        width: u16,
        height: u16,
        hazards: &[Point],
    ) -> Self {
        Self {
            width,
            height,
            hazards: hazards.iter().map(|p| (p.x, p.y)).collect(),
            cells_captured: report.cells_captured,
            captured_fraction: report.captured_fraction,
            score_delta: report.score_delta,
        }
    }
}

/// Format a capture report as human-readable text.
pub(super) fn format_text(report: &CaptureReport) -> String {
    format!(
        "Capture result\n  Cells captured: {}\n  Field captured: {:.1}%\n  Score delta: {}\n",
        report.cells_captured,
        report.captured_fraction * 100.0,
        report.score_delta
    )
}
