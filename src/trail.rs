//! Trail recording and per-step validation.

use crate::error::TrailError;
use crate::field::{CellState, Field, Point};

/// An ordered, closed path from captured territory through unclaimed space
/// and back.
///
/// Produced by [`TrailRecorder`] when an extension lands on captured
/// ground; consumed by the capture resolver. The first and last points lie
/// on captured territory, every interior point was unclaimed when drawn,
/// and consecutive points are 4-adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    points: Vec<Point>,
}

impl Trail {
    /// The ordered points of the trail, start to closing point.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points in the trail.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trail has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Result of a successful trail extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtendResult {
    /// The trail grew into unclaimed space; keep drawing.
    Continuing,
    /// The trail landed on captured territory and closed. The recorder is
    /// idle again; the caller must hand the trail to the capture resolver.
    Closed(Trail),
}

/// Builds a candidate trail while the player is in drawing mode.
///
/// State machine: `Idle -> (start) -> Drawing -> (extend, closing) -> Idle`
/// with `abandon` as the backfire path from any state. The recorder owns
/// the trail points exclusively while drawing and mirrors each step into
/// the field's per-cell trail markers.
#[derive(Debug, Clone, Default)]
pub struct TrailRecorder {
    points: Vec<Point>,
    drawing: bool,
}

impl TrailRecorder {
    /// Create an idle recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a trail is currently being drawn.
    #[must_use]
    pub const fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// The live trail points, start first. Empty while idle.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Check if a point is on the live trail.
    ///
    /// Used by the caller's per-tick hazard collision check against every
    /// trail-marked cell.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Begin drawing from a captured cell.
    ///
    /// # Errors
    ///
    /// - `AlreadyDrawing` if a trail is in progress.
    /// - `OutOfBounds` if `p` lies outside the field.
    /// - `NotOnCaptured` unless the cell at `p` is captured.
    pub fn start(&mut self, field: &Field, p: Point) -> Result<(), TrailError> {
        if self.drawing {
            return Err(TrailError::AlreadyDrawing);
        }
        match field.get(p) {
            None => return Err(TrailError::OutOfBounds(p)),
            Some(CellState::Captured) => {}
            Some(_) => return Err(TrailError::NotOnCaptured(p)),
        }

        self.points.clear();
        self.points.push(p);
        self.drawing = true;
        Ok(())
    }

    /// Extend the trail by one step.
    ///
    /// A step into unclaimed space marks the cell `Trail` in the field and
    /// returns [`ExtendResult::Continuing`]. A step onto captured ground
    /// after at least one unclaimed cell has been drawn closes the trail:
    /// the recorder resets to idle and returns [`ExtendResult::Closed`],
    /// which is the signal to invoke the capture resolver.
    ///
    /// # Errors
    ///
    /// - `NotDrawing` if no trail is in progress.
    /// - `OutOfBounds` if `p` lies outside the field.
    /// - `NotAdjacent` if `p` is not 4-adjacent to the trail head.
    /// - `CrossesTrail` if `p` is already on the live trail.
    /// - `EntersCaptured` if `p` is captured but nothing unclaimed has been
    ///   drawn yet, so there is no loop to close. The caller abandons the
    ///   trail, mirroring the source games' hit-the-border-early rule.
    ///
    /// On error the trail is left exactly as it was.
    pub fn extend(&mut self, field: &mut Field, p: Point) -> Result<ExtendResult, TrailError> {
        if !self.drawing {
            return Err(TrailError::NotDrawing);
        }

        // Drawing implies a non-empty trail.
        let Some(&head) = self.points.last() else {
            return Err(TrailError::NotDrawing);
        };
        if !head.is_adjacent(p) {
            return Err(TrailError::NotAdjacent { from: head, to: p });
        }

        let cell = field.get(p).ok_or(TrailError::OutOfBounds(p))?;
        match cell {
            CellState::Trail => Err(TrailError::CrossesTrail(p)),
            CellState::Captured => {
                if self.points.len() < 2 {
                    // Only the start point so far: sliding back onto
                    // captured ground closes nothing.
                    return Err(TrailError::EntersCaptured(p));
                }
                self.points.push(p);
                self.drawing = false;
                let points = std::mem::take(&mut self.points);
                Ok(ExtendResult::Closed(Trail { points }))
            }
            CellState::Unclaimed => {
                field.mark_trail(p);
                self.points.push(p);
                Ok(ExtendResult::Continuing)
            }
        }
    }

    /// Abandon the live trail, reverting every trail marker to unclaimed.
    ///
    /// Called when a hazard intersects the trail. No territory is gained;
    /// life-loss bookkeeping stays with the caller. Idempotent: a second
    /// call on an idle recorder changes nothing.
    pub fn abandon(&mut self, field: &mut Field) {
        for p in &self.points {
            field.clear_trail(*p);
        }
        self.points.clear();
        self.drawing = false;
    }
}
