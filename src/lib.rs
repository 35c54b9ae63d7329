// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Stix: a deterministic territory-capture engine for Qix-style games.
//!
//! This crate implements the one genuinely algorithmic subsystem shared by
//! Qix/Volfied-style area-capture games: the player draws a trail into
//! unclaimed space, and on closing the loop the engine decides exactly
//! which part of that space becomes permanent territory, while a roaming
//! hazard determines which side of the new boundary stays unclaimed.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Engine (per-level session)        │
//! ├──────────────┬──────────────────────┤
//! │ TrailRecorder│   Capture Resolver   │
//! ├──────────────┴───────┬──────────────┤
//! │  Region Partitioner  │  Occupancy   │
//! ├──────────────────────┤  Oracle      │
//! │        Field         │  (external)  │
//! └──────────────────────┴──────────────┘
//! ```
//!
//! Input handling, enemy AI, rendering, audio and score persistence are
//! external collaborators: they call into the engine per tick and read
//! the field back out. Everything here is single-threaded, synchronous
//! and deterministic - identical inputs produce identical fields.

pub mod engine;
pub mod error;
pub mod field;
pub mod invariants;
pub mod oracle;
pub mod region;
pub mod render;
pub mod resolver;
pub mod trail;

pub use error::{CaptureError, CaptureResult, FieldError, TrailError};

// Re-export key types at crate root for convenience
pub use engine::{Engine, EngineConfig};
pub use field::{CellState, Field, Point};
pub use oracle::{to_grid, OccupancyOracle};
pub use region::{partition, Region};
pub use render::render_ascii;
pub use resolver::{resolve_capture, CaptureReport, ScoringConfig};
pub use trail::{ExtendResult, Trail, TrailRecorder};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_reachable() {
        let field = Field::new(10, 10).unwrap();
        assert_eq!(partition(&field).len(), 1);
        let debug = format!("{:?}", ScoringConfig::default());
        assert!(debug.contains("points_per_cell"));
    }
}
