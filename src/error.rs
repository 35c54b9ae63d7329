//! Error types for the capture engine.

use std::fmt;

use crate::field::Point;

/// Errors from raw field access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// A grid access outside `[0,W)x[0,H)`.
    ///
    /// This indicates a caller bug in input translation, not a recoverable
    /// gameplay condition.
    OutOfBounds {
        /// The offending point.
        point: Point,
        /// Field width at the time of the access.
        width: u16,
        /// Field height at the time of the access.
        height: u16,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::OutOfBounds {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "point ({}, {}) outside field bounds {width}x{height}",
                    point.x, point.y
                )
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Expected rejections while building a trail.
///
/// The player (or AI driving the player) can legitimately attempt an illegal
/// move every tick, so these are ordinary return values, never panics. The
/// caller recovers by ignoring the input and leaving the trail as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailError {
    /// `start` was called on a cell that is not captured territory.
    NotOnCaptured(Point),
    /// `start` was called while a trail is already being drawn.
    AlreadyDrawing,
    /// `extend` was called while no trail is being drawn.
    NotDrawing,
    /// The extension point is not 4-adjacent to the trail's last point.
    NotAdjacent {
        /// Current trail head.
        from: Point,
        /// Attempted extension point.
        to: Point,
    },
    /// The trail stepped back onto captured territory before drawing any
    /// unclaimed cell, so there is nothing to close.
    EntersCaptured(Point),
    /// The extension point is already part of the live trail.
    CrossesTrail(Point),
    /// The extension point is out of bounds.
    OutOfBounds(Point),
}

impl fmt::Display for TrailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailError::NotOnCaptured(p) => {
                write!(
                    f,
                    "trail must start on captured territory, got ({}, {})",
                    p.x, p.y
                )
            }
            TrailError::AlreadyDrawing => write!(f, "a trail is already being drawn"),
            TrailError::NotDrawing => write!(f, "no trail is being drawn"),
            TrailError::NotAdjacent { from, to } => {
                write!(
                    f,
                    "({}, {}) is not 4-adjacent to trail head ({}, {})",
                    to.x, to.y, from.x, from.y
                )
            }
            TrailError::EntersCaptured(p) => {
                write!(
                    f,
                    "trail re-entered captured territory at ({}, {})",
                    p.x, p.y
                )
            }
            TrailError::CrossesTrail(p) => {
                write!(f, "trail crossed itself at ({}, {})", p.x, p.y)
            }
            TrailError::OutOfBounds(p) => {
                write!(f, "trail point ({}, {}) is out of bounds", p.x, p.y)
            }
        }
    }
}

impl std::error::Error for TrailError {}

/// Errors from capture resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    /// The closed trail had fewer than 2 points.
    ///
    /// Unreachable when the trail came from `TrailRecorder`, but resolved
    /// as a safe no-op rather than a panic.
    DegenerateTrail {
        /// Number of points in the rejected trail.
        len: usize,
    },
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::DegenerateTrail { len } => {
                write!(f, "degenerate trail of {len} point(s) has no capture effect")
            }
        }
    }
}

impl std::error::Error for CaptureError {}

/// Result type for capture resolution.
pub type CaptureResult<T> = Result<T, CaptureError>;
