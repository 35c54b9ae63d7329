//! Simulate command implementation.

use super::CliError;
use stix::{render_ascii, CellState, Engine, EngineConfig, Point, TrailError};

/// Splitmix-style hash for deterministic wander rolls.
fn simple_hash(seed: u64, index: u64) -> u64 {
    let mut x = seed.wrapping_add(index).wrapping_add(0x9e37_79b9_7f4a_7c15);
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    x ^ (x >> 33)
}

/// A hazard wandering the unclaimed space.
///
/// Picks a pseudo-random direction each tick and moves only into unclaimed
/// cells, bouncing off captured ground like the source games' boss. This
/// is a deterministic test fixture, not an AI.
#[derive(Debug, Clone, Copy)]
struct Wanderer {
    pos: Point,
    seed: u64,
}

impl Wanderer {
    fn new(pos: Point, seed: u64) -> Self {
        Self { pos, seed }
    }

    fn step(&mut self, engine: &Engine, tick: u64) {
        let field = engine.field();
        let (adjacent, count) = self.pos.adjacent(field.width(), field.height());
        if count == 0 {
            return;
        }
        let roll = simple_hash(self.seed, tick) % u64::from(count);
        #[allow(clippy::cast_possible_truncation)]
        let target = adjacent[roll as usize];
        if field.get(target) == Some(CellState::Unclaimed) {
            self.pos = target;
        }
    }
}

/// Execute the simulate command: a scripted player sweeps the field row by
/// row while a seeded hazard wanders, until the level is won or the tick
/// budget runs out.
///
/// # Errors
///
/// Returns an error when the field is too small to simulate on.
pub(crate) fn execute(
    width: u16,
    height: u16,
    ticks: u64,
    seed: u64,
    quiet: bool,
) -> Result<(), CliError> {
    let config = EngineConfig {
        width,
        height,
        ..EngineConfig::default()
    };
    let mut engine = Engine::new(config)
        .ok_or_else(|| CliError::new(format!("field {width}x{height} is too small")))?;

    let mut hazard = Wanderer::new(Point::new(width / 2, height / 2), seed);

    let mut tick = 0u64;
    let mut backfires = 0u32;
    let mut cut_row = 1u16;
    let mut cursor_x = 0u16;

    if !quiet {
        println!("Simulating {width}x{height} field with seed {seed}...");
    }

    while tick < ticks && !engine.is_won() && cut_row + 1 < height {
        tick += 1;

        // Player policy: sweep a straight cut across the current row.
        if !engine.is_drawing() && cursor_x == 0 {
            match engine.start_draw(Point::new(0, cut_row)) {
                Ok(()) => cursor_x = 1,
                Err(_) => {
                    // Row start unusable; move on.
                    cut_row += 1;
                    continue;
                }
            }
        }

        let step_result = engine.step(Point::new(cursor_x, cut_row), &[hazard.pos][..]);
        match step_result {
            Ok(Some(report)) => {
                if !quiet {
                    println!(
                        "  tick {tick}: captured {} cells ({:.1}%), +{} points",
                        report.cells_captured,
                        report.captured_fraction * 100.0,
                        report.score_delta
                    );
                }
                cut_row += 1;
                cursor_x = 0;
            }
            Ok(None) => {
                cursor_x += 1;
            }
            Err(TrailError::CrossesTrail(_) | TrailError::EntersCaptured(_)) => {
                // Row already eaten by an earlier capture; skip it.
                engine.abandon_draw();
                cut_row += 1;
                cursor_x = 0;
            }
            Err(_) => {
                engine.abandon_draw();
                cursor_x = 0;
            }
        }

        // Hazard wanders and may backfire the live trail.
        hazard.step(&engine, tick);
        if engine.trail_hit_by(&[hazard.pos][..]) {
            engine.abandon_draw();
            backfires += 1;
            cursor_x = 0;
        }
    }

    println!();
    println!("{}", render_ascii(engine.field(), &[hazard.pos]));
    println!(
        "Finished after {tick} ticks: {} captures, {} backfires, score {}{}",
        engine.captures(),
        backfires,
        engine.score(),
        if engine.is_won() { " (level won)" } else { "" }
    );

    Ok(())
}
