//! Field invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger in a correctly implemented engine. If they
//! do, it indicates a bug in the field mutation paths, not a gameplay
//! condition.

use crate::field::{CellState, Field};
use crate::region::partition;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all field invariants.
///
/// Returns a list of violations found, or empty if all invariants hold:
/// the border ring is captured, the cached captured count matches a full
/// recount, the captured fraction is in `[0, 1]`, and the region partition
/// is total (every unclaimed cell in exactly one region, none missing).
#[must_use]
pub fn check_invariants(field: &Field) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let mut captured_count = 0u32;
    let mut unclaimed_count = 0usize;

    for (p, cell) in field.iter() {
        if cell == CellState::Captured {
            captured_count += 1;
        }
        if cell == CellState::Unclaimed {
            unclaimed_count += 1;
        }

        if field.is_border(p) && cell != CellState::Captured {
            violations.push(InvariantViolation {
                message: format!("border cell ({}, {}) is {cell:?}, expected Captured", p.x, p.y),
            });
        }
    }

    if captured_count != field.captured_cells() {
        violations.push(InvariantViolation {
            message: format!(
                "cached captured count {} disagrees with recount {captured_count}",
                field.captured_cells()
            ),
        });
    }

    let fraction = field.captured_fraction();
    if !(0.0..=1.0).contains(&fraction) {
        violations.push(InvariantViolation {
            message: format!("captured fraction {fraction} outside [0, 1]"),
        });
    }

    // Partition totality: disjoint and exhaustive over unclaimed cells.
    let regions = partition(field);
    let mut seen = std::collections::HashSet::new();
    for region in &regions {
        for &p in region.cells() {
            if field.get(p) != Some(CellState::Unclaimed) {
                violations.push(InvariantViolation {
                    message: format!("region contains non-unclaimed cell ({}, {})", p.x, p.y),
                });
            }
            if !seen.insert(p) {
                violations.push(InvariantViolation {
                    message: format!("cell ({}, {}) appears in two regions", p.x, p.y),
                });
            }
        }
    }
    if seen.len() != unclaimed_count {
        violations.push(InvariantViolation {
            message: format!(
                "partition covers {} cells but field has {unclaimed_count} unclaimed",
                seen.len()
            ),
        });
    }

    violations
}

/// Assert all field invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(field: &Field) {
    let violations = check_invariants(field);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Field invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_field: &Field) {}
