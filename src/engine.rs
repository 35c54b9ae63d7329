//! Per-level session orchestration.
//!
//! Ties the field, trail recorder and capture resolver together behind a
//! tick-level API: the input layer translates player movement into
//! `start_draw`/`step`/`abandon_draw` calls, the enemy layer supplies an
//! [`OccupancyOracle`], and the renderer reads the field and live trail
//! back out. Everything runs synchronously inside one tick; a capture
//! event always completes before the next input is accepted.

use crate::error::{CaptureResult, TrailError};
use crate::field::{Field, Point};
use crate::oracle::OccupancyOracle;
use crate::resolver::{resolve_capture, CaptureReport, ScoringConfig};
use crate::trail::{ExtendResult, TrailRecorder};

/// Configuration for a level session.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Field width in cells.
    pub width: u16,
    /// Field height in cells.
    pub height: u16,
    /// Captured fraction at which the level is won (source games: 0.75).
    pub win_fraction: f64,
    /// Scoring parameters for capture events.
    pub scoring: ScoringConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 60,
            win_fraction: 0.75,
            scoring: ScoringConfig::default(),
        }
    }
}

/// One level's worth of capture state: field, live trail, score.
#[derive(Debug, Clone)]
pub struct Engine {
    field: Field,
    recorder: TrailRecorder,
    config: EngineConfig,
    score: i64,
    captures: u32,
}

impl Engine {
    /// Create a session with a fresh field (border pre-captured).
    ///
    /// Returns `None` when the configured grid is too small to hold a
    /// border plus interior.
    #[must_use]
    pub fn new(config: EngineConfig) -> Option<Self> {
        let field = Field::new(config.width, config.height)?;
        Some(Self {
            field,
            recorder: TrailRecorder::new(),
            config,
            score: 0,
            captures: 0,
        })
    }

    /// Read access to the field for rendering and oracle lookups.
    #[must_use]
    pub const fn field(&self) -> &Field {
        &self.field
    }

    /// The live trail points (empty while not drawing).
    #[must_use]
    pub fn trail(&self) -> &[Point] {
        self.recorder.points()
    }

    /// Whether a trail is currently being drawn.
    #[must_use]
    pub const fn is_drawing(&self) -> bool {
        self.recorder.is_drawing()
    }

    /// Accumulated score for this level.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Number of completed capture events this level.
    #[must_use]
    pub const fn captures(&self) -> u32 {
        self.captures
    }

    /// Begin drawing from a captured cell.
    ///
    /// # Errors
    ///
    /// See [`TrailRecorder::start`].
    pub fn start_draw(&mut self, p: Point) -> Result<(), TrailError> {
        self.recorder.start(&self.field, p)
    }

    /// Advance the trail by one step, resolving a capture if it closes.
    ///
    /// Returns `Ok(Some(report))` when the step closed the trail and the
    /// capture resolved; `Ok(None)` when the trail simply grew. Hazard
    /// positions are taken from the oracle at the moment of resolution.
    ///
    /// # Errors
    ///
    /// Trail-building rejections from [`TrailRecorder::extend`]. The
    /// caller recovers by ignoring the input; the trail is unchanged.
    pub fn step<O: OccupancyOracle + ?Sized>(
        &mut self,
        p: Point,
        oracle: &O,
    ) -> Result<Option<CaptureReport>, TrailError> {
        match self.recorder.extend(&mut self.field, p)? {
            ExtendResult::Continuing => Ok(None),
            ExtendResult::Closed(trail) => {
                let hazards = oracle.hazard_positions();
                let report = self.resolve(&trail, &hazards);
                match report {
                    Ok(report) => {
                        self.score += report.score_delta;
                        self.captures += 1;
                        Ok(Some(report))
                    }
                    // A degenerate trail cannot come out of the recorder;
                    // treat it as a non-event rather than crashing.
                    Err(_) => Ok(None),
                }
            }
        }
    }

    /// Abandon the live trail (hazard hit it, or the player died).
    ///
    /// Idempotent; no territory is gained and the score is untouched.
    /// Life-loss bookkeeping stays with the caller.
    pub fn abandon_draw(&mut self) {
        self.recorder.abandon(&mut self.field);
    }

    /// Check the live trail against current hazard positions.
    ///
    /// The caller runs this every tick and invokes [`Engine::abandon_draw`]
    /// (plus its own life-loss handling) when it returns true.
    #[must_use]
    pub fn trail_hit_by<O: OccupancyOracle + ?Sized>(&self, oracle: &O) -> bool {
        if !self.recorder.is_drawing() {
            return false;
        }
        oracle
            .hazard_positions()
            .iter()
            .any(|&h| self.recorder.contains(h))
    }

    /// Captured fraction of the field, for the HUD.
    #[must_use]
    pub fn captured_fraction(&self) -> f64 {
        self.field.captured_fraction()
    }

    /// Whether the captured fraction has reached the win threshold.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.field.captured_fraction() >= self.config.win_fraction
    }

    fn resolve(
        &mut self,
        trail: &crate::trail::Trail,
        hazards: &[Point],
    ) -> CaptureResult<CaptureReport> {
        resolve_capture(&mut self.field, trail, hazards, &self.config.scoring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_engine() -> Engine {
        Engine::new(EngineConfig {
            width: 10,
            height: 10,
            ..EngineConfig::default()
        })
        .unwrap()
    }

    /// Walk the player across row `y` from the left border to the right.
    fn cut_across(engine: &mut Engine, y: u16, hazards: &[Point]) -> CaptureReport {
        engine.start_draw(Point::new(0, y)).unwrap();
        let mut report = None;
        for x in 1..engine.field().width() {
            report = engine.step(Point::new(x, y), hazards).unwrap();
        }
        report.expect("cut should close on the right border")
    }

    #[test]
    fn test_capture_accumulates_score() {
        let mut engine = small_engine();
        let hazards = [Point::new(5, 7)];

        let report = cut_across(&mut engine, 3, &hazards);
        assert_eq!(report.cells_captured, 24);
        assert_eq!(engine.score(), report.score_delta);
        assert_eq!(engine.captures(), 1);
        assert!(engine.score() > 0);
    }

    #[test]
    fn test_win_threshold() {
        let mut engine = small_engine();
        assert!(!engine.is_won());

        // With no hazards in any region, one cut captures everything.
        cut_across(&mut engine, 5, &[]);
        assert!((engine.captured_fraction() - 1.0).abs() < 1e-12);
        assert!(engine.is_won());
    }

    #[test]
    fn test_trail_hit_detection() {
        let mut engine = small_engine();
        engine.start_draw(Point::new(0, 5)).unwrap();
        engine.step(Point::new(1, 5), &[] as &[Point]).unwrap();
        engine.step(Point::new(2, 5), &[] as &[Point]).unwrap();

        assert!(engine.trail_hit_by(&[Point::new(2, 5)][..]));
        assert!(!engine.trail_hit_by(&[Point::new(3, 5)][..]));

        engine.abandon_draw();
        assert!(!engine.trail_hit_by(&[Point::new(2, 5)][..]));
    }

    #[test]
    fn test_abandon_then_redraw() {
        let mut engine = small_engine();
        engine.start_draw(Point::new(0, 5)).unwrap();
        engine.step(Point::new(1, 5), &[] as &[Point]).unwrap();
        engine.abandon_draw();

        assert!(!engine.is_drawing());
        assert_eq!(engine.captures(), 0);

        // The abandoned cell is unclaimed again, so a new trail can cross it.
        engine.start_draw(Point::new(0, 5)).unwrap();
        assert!(engine.step(Point::new(1, 5), &[] as &[Point]).unwrap().is_none());
    }

    #[test]
    fn test_rejected_step_keeps_trail() {
        let mut engine = small_engine();
        engine.start_draw(Point::new(0, 5)).unwrap();
        engine.step(Point::new(1, 5), &[] as &[Point]).unwrap();

        let err = engine.step(Point::new(3, 5), &[] as &[Point]).unwrap_err();
        assert!(matches!(err, TrailError::NotAdjacent { .. }));
        assert_eq!(engine.trail(), &[Point::new(0, 5), Point::new(1, 5)]);
        assert!(engine.is_drawing());
    }

    #[test]
    fn test_too_small_config() {
        let config = EngineConfig {
            width: 2,
            height: 2,
            ..EngineConfig::default()
        };
        assert!(Engine::new(config).is_none());
    }
}
