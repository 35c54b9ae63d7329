//! Occupancy oracle: the boundary to enemy-AI code.

use crate::field::{Field, Point};

/// Reports which grid cells are currently occupied by moving hazards.
///
/// Supplied by the enemy-AI collaborator outside this crate. The capture
/// resolver queries it once per capture event; the caller queries it every
/// tick to check the live trail for collisions.
pub trait OccupancyOracle {
    /// Current hazard positions, already quantized to grid cells.
    fn hazard_positions(&self) -> Vec<Point>;
}

/// A fixed list of positions is an oracle. Convenient for tests and for
/// callers that track hazards as plain points.
impl OccupancyOracle for [Point] {
    fn hazard_positions(&self) -> Vec<Point> {
        self.to_vec()
    }
}

impl OccupancyOracle for Vec<Point> {
    fn hazard_positions(&self) -> Vec<Point> {
        self.clone()
    }
}

/// Quantize a world-space position to the grid cell containing it.
///
/// Hazards move in continuous coordinates; this is the one place where
/// float positions become grid points, so the resolver itself stays purely
/// grid-based. Returns `None` for positions outside the field or for
/// non-finite input.
#[must_use]
pub fn to_grid(world_x: f64, world_y: f64, cell_size: f64, field: &Field) -> Option<Point> {
    if !(world_x.is_finite() && world_y.is_finite()) || cell_size <= 0.0 {
        return None;
    }
    if world_x < 0.0 || world_y < 0.0 {
        return None;
    }

    let gx = (world_x / cell_size).floor();
    let gy = (world_y / cell_size).floor();
    if gx >= f64::from(field.width()) || gy >= f64::from(field.height()) {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let p = Point::new(gx as u16, gy as u16);
    Some(p)
}
