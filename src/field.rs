//! Field and cell types.

use crate::error::FieldError;

/// A coordinate on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Get adjacent points (up, down, left, right) clipped to the bounds.
    ///
    /// Returns a fixed-size array and count to avoid heap allocation.
    /// The array contains valid points in indices 0..count.
    #[must_use]
    #[inline]
    pub fn adjacent(&self, width: u16, height: u16) -> ([Point; 4], u8) {
        let mut result = [Point::new(0, 0); 4];
        let mut count = 0u8;

        if self.y > 0 {
            result[count as usize] = Point::new(self.x, self.y - 1); // up
            count += 1;
        }
        if self.y + 1 < height {
            result[count as usize] = Point::new(self.x, self.y + 1); // down
            count += 1;
        }
        if self.x > 0 {
            result[count as usize] = Point::new(self.x - 1, self.y); // left
            count += 1;
        }
        if self.x + 1 < width {
            result[count as usize] = Point::new(self.x + 1, self.y); // right
            count += 1;
        }

        (result, count)
    }

    /// Manhattan distance to another point.
    #[must_use]
    pub fn manhattan(&self, other: Point) -> u32 {
        u32::from(self.x.abs_diff(other.x)) + u32::from(self.y.abs_diff(other.y))
    }

    /// Check if another point is 4-adjacent (Manhattan distance 1).
    #[must_use]
    pub fn is_adjacent(&self, other: Point) -> bool {
        self.manhattan(other) == 1
    }
}

/// Capture state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CellState {
    /// Open space not yet claimed by the player.
    Unclaimed = 0,
    /// Permanently captured territory (walkable, blocks hazards).
    Captured = 1,
    /// Part of an in-progress trail (visual/logical marker, not yet
    /// captured).
    Trail = 2,
}

impl CellState {
    /// Check if this cell is captured territory.
    #[must_use]
    pub const fn is_captured(self) -> bool {
        matches!(self, CellState::Captured)
    }

    /// Check if this cell is unclaimed.
    #[must_use]
    pub const fn is_unclaimed(self) -> bool {
        matches!(self, CellState::Unclaimed)
    }

    /// Check if this cell carries a live trail marker.
    #[must_use]
    pub const fn is_trail(self) -> bool {
        matches!(self, CellState::Trail)
    }
}

/// The capture field for one level.
///
/// Cells live in a single flat buffer addressed by `y*W+x`, so the whole
/// grid is one allocation and every access is bounds-checked exactly once.
/// The outermost ring starts `Captured` and acts as both wall and home
/// base: every trail starts and ends anchored to it.
#[derive(Debug, Clone)]
pub struct Field {
    /// Width of the field in cells.
    width: u16,
    /// Height of the field in cells.
    height: u16,
    /// Cells stored in row-major order.
    cells: Vec<CellState>,
    /// Cached number of captured cells, kept in sync by every mutation.
    captured: u32,
}

/// Smallest field that has a border ring plus at least one interior cell.
const MIN_SIDE: u16 = 3;

impl Field {
    /// Create a new field with the border ring pre-captured and the
    /// interior unclaimed.
    ///
    /// Returns `None` if either side is smaller than 3 cells, since such a
    /// grid has no interior to capture.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if width < MIN_SIDE || height < MIN_SIDE {
            return None;
        }

        let size = usize::from(width) * usize::from(height);
        let mut field = Self {
            width,
            height,
            cells: vec![CellState::Unclaimed; size],
            captured: 0,
        };

        for y in 0..height {
            for x in 0..width {
                let p = Point::new(x, y);
                if field.is_border(p) {
                    field.set_captured(p);
                }
            }
        }

        Some(field)
    }

    /// Get the width of the field.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the field.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }

    /// Get a reference to the raw cells slice in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Check if a point is within the field bounds.
    #[must_use]
    pub const fn in_bounds(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    /// Check if a point lies on the outer ring.
    #[must_use]
    pub const fn is_border(&self, p: Point) -> bool {
        p.x == 0 || p.y == 0 || p.x + 1 == self.width || p.y + 1 == self.height
    }

    /// Convert a point to an index into the cells buffer.
    fn index(&self, p: Point) -> Option<usize> {
        if self.in_bounds(p) {
            Some(usize::from(p.y) * usize::from(self.width) + usize::from(p.x))
        } else {
            None
        }
    }

    /// Get the state of the cell at the given point.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::OutOfBounds` when the point lies outside the
    /// grid. Out-of-bounds access is an upstream bug in input translation,
    /// surfaced as a typed error so the caller can fail loudly.
    pub fn cell_at(&self, p: Point) -> Result<CellState, FieldError> {
        self.get(p).ok_or(FieldError::OutOfBounds {
            point: p,
            width: self.width,
            height: self.height,
        })
    }

    /// Get the state of the cell at the given point, `None` if out of
    /// bounds. Non-failing twin of [`Field::cell_at`] for scan loops.
    #[must_use]
    pub fn get(&self, p: Point) -> Option<CellState> {
        self.index(p).map(|idx| self.cells[idx])
    }

    /// Transition a cell from `Unclaimed`/`Trail` to `Captured`.
    ///
    /// No-op if the cell is already captured or out of bounds. Capture
    /// never reverts, so the cached count only grows.
    pub fn set_captured(&mut self, p: Point) {
        if let Some(idx) = self.index(p) {
            if self.cells[idx] != CellState::Captured {
                self.cells[idx] = CellState::Captured;
                self.captured += 1;
            }
        }
    }

    /// Mark an unclaimed cell as part of the live trail.
    ///
    /// No-op unless the cell is currently unclaimed.
    pub fn mark_trail(&mut self, p: Point) {
        if let Some(idx) = self.index(p) {
            if self.cells[idx] == CellState::Unclaimed {
                self.cells[idx] = CellState::Trail;
            }
        }
    }

    /// Revert a trail marker back to unclaimed.
    ///
    /// No-op unless the cell currently carries a trail marker, which makes
    /// repeated reversal safe.
    pub fn clear_trail(&mut self, p: Point) {
        if let Some(idx) = self.index(p) {
            if self.cells[idx] == CellState::Trail {
                self.cells[idx] = CellState::Unclaimed;
            }
        }
    }

    /// Number of captured cells.
    #[must_use]
    pub const fn captured_cells(&self) -> u32 {
        self.captured
    }

    /// Fraction of the whole grid that is captured, in `[0, 1]`.
    ///
    /// Monotonically non-decreasing across the field's lifetime.
    #[must_use]
    pub fn captured_fraction(&self) -> f64 {
        f64::from(self.captured) / f64::from(self.cell_count())
    }

    /// Iterate over all points and cell states in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(idx, cell)| {
            #[allow(clippy::cast_possible_truncation)]
            let x = (idx % usize::from(self.width)) as u16;
            #[allow(clippy::cast_possible_truncation)]
            let y = (idx / usize::from(self.width)) as u16;
            (Point::new(x, y), *cell)
        })
    }
}
