//! Region partitioning of unclaimed space.

use crate::field::{CellState, Field, Point};

/// A maximal 4-connected set of unclaimed cells.
///
/// Computed transiently by [`partition`] on every capture event, never
/// persisted. Cells are listed in flood-fill discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    cells: Vec<Point>,
}

impl Region {
    /// The cells of this region.
    #[must_use]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of cells in this region.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A region produced by [`partition`] is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether a point belongs to this region.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }
}

/// Partition all unclaimed cells of the field into disjoint 4-connected
/// regions.
///
/// Scans row-major and flood-fills from each unvisited unclaimed cell with
/// an explicit work stack, so stack depth stays bounded on large grids.
/// Every unclaimed cell lands in exactly one returned region, regions are
/// pairwise disjoint, and the fixed scan order makes the output fully
/// deterministic.
///
/// O(W*H) time and auxiliary space; call it once per capture event.
#[must_use]
pub fn partition(field: &Field) -> Vec<Region> {
    let width = field.width();
    let height = field.height();
    let size = usize::from(width) * usize::from(height);

    let mut visited = vec![false; size];
    let mut regions = Vec::new();
    let mut stack: Vec<Point> = Vec::new();

    let index = |p: Point| usize::from(p.y) * usize::from(width) + usize::from(p.x);

    for (seed, cell) in field.iter() {
        if cell != CellState::Unclaimed || visited[index(seed)] {
            continue;
        }

        let mut cells = Vec::new();
        visited[index(seed)] = true;
        stack.push(seed);

        while let Some(p) = stack.pop() {
            cells.push(p);

            let (adjacent, count) = p.adjacent(width, height);
            for &next in &adjacent[..count as usize] {
                let idx = index(next);
                if !visited[idx] && field.get(next) == Some(CellState::Unclaimed) {
                    visited[idx] = true;
                    stack.push(next);
                }
            }
        }

        regions.push(Region { cells });
    }

    regions
}
