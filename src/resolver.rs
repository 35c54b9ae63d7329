//! Capture resolution: the transition that turns a closed trail into
//! permanent territory.

use crate::error::{CaptureError, CaptureResult};
use crate::field::{CellState, Field, Point};
use crate::region::{partition, Region};
use crate::trail::Trail;

/// Tunable scoring parameters for capture events.
///
/// The risk multiplier rewards closing a loop near a hazard: it peaks at
/// `1 + risk_bonus` when a hazard sits on the centroid of the captured
/// area and decays toward 1 with distance, clamped at `max_multiplier`.
/// The exact curve is a tuning knob, not a core invariant.
#[derive(Debug, Clone, Copy)]
pub struct ScoringConfig {
    /// Points awarded per captured cell before the multiplier.
    pub points_per_cell: u32,
    /// Multiplier bonus at zero distance (default: 1.0, i.e. double).
    pub risk_bonus: f64,
    /// Distance in cells at which the bonus has halved (default: 8.0).
    pub risk_falloff: f64,
    /// Upper clamp on the multiplier (default: 2.0).
    pub max_multiplier: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_cell: 10,
            risk_bonus: 1.0,
            risk_falloff: 8.0,
            max_multiplier: 2.0,
        }
    }
}

impl ScoringConfig {
    /// Risk multiplier for a capture whose centroid lies `distance` cells
    /// from the nearest hazard. Closer risk yields a higher multiplier.
    #[must_use]
    pub fn risk_multiplier(&self, distance: f64) -> f64 {
        let m = 1.0 + self.risk_bonus / (1.0 + distance / self.risk_falloff);
        m.min(self.max_multiplier)
    }
}

/// Outcome of one capture event, reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureReport {
    /// Cells newly captured by this event (trail cells included).
    pub cells_captured: u32,
    /// Captured fraction of the whole field after the event.
    pub captured_fraction: f64,
    /// Score awarded for this event.
    pub score_delta: i64,
}

/// Resolve a capture event for a closed trail.
///
/// Runs synchronously to completion within the tick that closed the trail:
///
/// 1. Every trail point becomes captured territory. The drawn line itself
///    is permanent regardless of what the partition yields, so even a
///    loop enclosing zero area makes forward progress.
/// 2. Remaining unclaimed space is partitioned into 4-connected regions.
/// 3. Each region containing at least one hazard position stays
///    unclaimed; every hazard-free region is committed. When no region
///    contains a hazard (hazards gone, or standing on captured ground),
///    all regions are captured - the no-enemy fallback of the source
///    games.
/// 4. The score delta is `cells_captured * points_per_cell * multiplier`,
///    with the multiplier derived from the nearest hazard's distance to
///    the centroid of the newly captured cells.
/// 5. Leftover trail markers are swept back to unclaimed (defensive; the
///    recorder should not leave any).
///
/// # Errors
///
/// `DegenerateTrail` for trails of fewer than 2 points; the field is not
/// mutated.
pub fn resolve_capture(
    field: &mut Field,
    trail: &Trail,
    hazards: &[Point],
    scoring: &ScoringConfig,
) -> CaptureResult<CaptureReport> {
    if trail.len() < 2 {
        return Err(CaptureError::DegenerateTrail { len: trail.len() });
    }

    let mut captured: Vec<Point> = Vec::new();

    // Step 1: the trail itself is territory now.
    for &p in trail.points() {
        if field.get(p) != Some(CellState::Captured) {
            field.set_captured(p);
            captured.push(p);
        }
    }

    // Step 2: partition what is left.
    let regions = partition(field);

    // Step 3: commit every hazard-free region.
    for region in &regions {
        if !region_contains_any(region, hazards) {
            for &p in region.cells() {
                field.set_captured(p);
                captured.push(p);
            }
        }
    }

    // Step 4: score.
    let score_delta = score_for(&captured, hazards, scoring);

    // Step 5: defensive sweep of stray trail markers.
    let stray: Vec<Point> = field
        .iter()
        .filter(|(_, c)| c.is_trail())
        .map(|(p, _)| p)
        .collect();
    for p in stray {
        field.clear_trail(p);
    }

    #[allow(clippy::cast_possible_truncation)]
    let cells_captured = captured.len() as u32;

    Ok(CaptureReport {
        cells_captured,
        captured_fraction: field.captured_fraction(),
        score_delta,
    })
}

/// Check whether any hazard position falls inside the region.
fn region_contains_any(region: &Region, hazards: &[Point]) -> bool {
    hazards.iter().any(|&h| region.contains(h))
}

/// Score a capture: cell count times points-per-cell times the risk
/// multiplier at the nearest hazard's distance from the capture centroid.
fn score_for(captured: &[Point], hazards: &[Point], scoring: &ScoringConfig) -> i64 {
    if captured.is_empty() {
        return 0;
    }

    let base = i64::from(u32::try_from(captured.len()).unwrap_or(u32::MAX))
        * i64::from(scoring.points_per_cell);

    let multiplier = match nearest_hazard_distance(captured, hazards) {
        Some(distance) => scoring.risk_multiplier(distance),
        None => 1.0,
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let scaled = (base as f64 * multiplier) as i64;
    scaled
}

/// Euclidean distance from the centroid of the captured cells to the
/// nearest hazard. `None` when there are no hazards.
fn nearest_hazard_distance(captured: &[Point], hazards: &[Point]) -> Option<f64> {
    if captured.is_empty() || hazards.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = captured.len() as f64;
    let cx = captured.iter().map(|p| f64::from(p.x)).sum::<f64>() / n;
    let cy = captured.iter().map(|p| f64::from(p.y)).sum::<f64>() / n;

    hazards
        .iter()
        .map(|h| {
            let dx = f64::from(h.x) - cx;
            let dy = f64::from(h.y) - cy;
            dx.hypot(dy)
        })
        .min_by(f64::total_cmp)
}
