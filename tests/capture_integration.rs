//! End-to-end scenarios driving the engine through full capture sessions.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use stix::invariants::check_invariants;
use stix::{
    render_ascii, to_grid, CaptureReport, CellState, Engine, EngineConfig, Field, OccupancyOracle,
    Point,
};

/// An enemy swarm tracked in continuous world coordinates, quantized at
/// query time the way a real enemy layer would.
struct Swarm {
    positions: Vec<(f64, f64)>,
    cell_size: f64,
    field_width: u16,
    field_height: u16,
}

impl OccupancyOracle for Swarm {
    fn hazard_positions(&self) -> Vec<Point> {
        let field = Field::new(self.field_width, self.field_height).unwrap();
        self.positions
            .iter()
            .filter_map(|&(x, y)| to_grid(x, y, self.cell_size, &field))
            .collect()
    }
}

fn engine_10x10() -> Engine {
    Engine::new(EngineConfig {
        width: 10,
        height: 10,
        ..EngineConfig::default()
    })
    .unwrap()
}

/// Walk the player across row `y`, left border to right border.
fn cut_across<O: OccupancyOracle + ?Sized>(
    engine: &mut Engine,
    y: u16,
    oracle: &O,
) -> CaptureReport {
    engine.start_draw(Point::new(0, y)).unwrap();
    let mut report = None;
    for x in 1..engine.field().width() {
        report = engine.step(Point::new(x, y), oracle).unwrap();
    }
    report.expect("cut should close on the right border")
}

/// Walk the player along explicit waypoints, expanding each leg into unit
/// steps, and return the report from the closing step.
fn walk(engine: &mut Engine, waypoints: &[Point], hazards: &[Point]) -> Option<CaptureReport> {
    engine.start_draw(waypoints[0]).unwrap();
    let mut at = waypoints[0];
    let mut report = None;
    for &next in &waypoints[1..] {
        while at != next {
            if at.x != next.x {
                at.x = if next.x > at.x { at.x + 1 } else { at.x - 1 };
            } else {
                at.y = if next.y > at.y { at.y + 1 } else { at.y - 1 };
            }
            report = engine.step(at, hazards).unwrap();
        }
    }
    report
}

#[test]
fn test_cut_with_hazard_below() {
    let mut engine = engine_10x10();
    let hazards = [Point::new(5, 7)];

    let report = cut_across(&mut engine, 2, &hazards[..]);

    // 8 drawn cells on row 2 plus the 8-cell strip of row 1 above it.
    assert_eq!(report.cells_captured, 16);
    assert_eq!(engine.field().get(Point::new(4, 1)), Some(CellState::Captured));
    assert_eq!(engine.field().get(Point::new(4, 2)), Some(CellState::Captured));

    // The hazard's region below the cut is untouched.
    assert_eq!(engine.field().get(Point::new(4, 5)), Some(CellState::Unclaimed));
    assert_eq!(engine.field().get(hazards[0]), Some(CellState::Unclaimed));

    assert!(check_invariants(engine.field()).is_empty());
}

#[test]
fn test_u_shape_pocket_connects_below() {
    // A three-sided box whose open side faces down. The "pocket" it frames
    // connects to the space below through the open side, so flood fill
    // sees one region and a hazard below protects the pocket too.
    let mut engine = engine_10x10();
    let hazards = [Point::new(5, 7)];

    let report = walk(
        &mut engine,
        &[
            Point::new(0, 5),
            Point::new(1, 5),
            Point::new(1, 1),
            Point::new(8, 1),
            Point::new(8, 5),
            Point::new(9, 5),
        ],
        &hazards,
    )
    .expect("walk should close on the right border");

    // Only the 16 drawn cells are captured.
    assert_eq!(report.cells_captured, 16);
    assert_eq!(engine.field().get(Point::new(4, 3)), Some(CellState::Unclaimed));
    assert_eq!(engine.field().get(Point::new(4, 7)), Some(CellState::Unclaimed));
}

#[test]
fn test_u_shape_seals_when_gap_closed() {
    // Same box shape, followed by a cut across row 6 that walls the pocket
    // off from the hazard below. The second capture takes pocket and all.
    let mut engine = engine_10x10();
    let hazards = [Point::new(5, 8)];

    let box_report = walk(
        &mut engine,
        &[
            Point::new(0, 4),
            Point::new(1, 4),
            Point::new(1, 1),
            Point::new(8, 1),
            Point::new(8, 4),
            Point::new(9, 4),
        ],
        &hazards,
    )
    .expect("walk should close on the right border");

    // Open-sided box: only its 14 drawn cells fall.
    assert_eq!(box_report.cells_captured, 14);
    assert_eq!(engine.field().get(Point::new(4, 3)), Some(CellState::Unclaimed));

    let cut_report = cut_across(&mut engine, 6, &hazards[..]);

    // 8 drawn cells plus everything between the box arms and the cut: the
    // 18-cell pocket (x=2..7, y=2..4) and the 8-cell row 5.
    assert_eq!(cut_report.cells_captured, 34);
    assert_eq!(engine.field().get(Point::new(4, 3)), Some(CellState::Captured));
    assert_eq!(engine.field().get(Point::new(4, 5)), Some(CellState::Captured));

    // Below the cut the hazard's region survives.
    assert_eq!(engine.field().get(Point::new(4, 8)), Some(CellState::Unclaimed));
}

#[test]
fn test_session_to_win() {
    let mut engine = Engine::new(EngineConfig {
        width: 12,
        height: 12,
        ..EngineConfig::default()
    })
    .unwrap();
    let hazards = [Point::new(6, 9)];

    let mut total_cells = 0;
    for y in [2u16, 4, 6, 8] {
        let report = cut_across(&mut engine, y, &hazards[..]);
        total_cells += report.cells_captured;
        assert!(check_invariants(engine.field()).is_empty());
    }

    // Each cut takes its row plus the strip above: 4 * (10 + 10) cells.
    assert_eq!(total_cells, 80);
    assert_eq!(engine.captures(), 4);
    assert!(engine.captured_fraction() > 0.75);
    assert!(engine.is_won());

    // The hazard's region below row 8 survived every cut.
    assert_eq!(engine.field().get(hazards[0]), Some(CellState::Unclaimed));
}

#[test]
fn test_no_hazard_session_captures_all() {
    let mut engine = engine_10x10();
    let report = cut_across(&mut engine, 5, &[] as &[Point]);

    assert_eq!(report.cells_captured, 64);
    assert!((engine.captured_fraction() - 1.0).abs() < 1e-12);
    assert!(engine.is_won());
}

#[test]
fn test_world_space_oracle() {
    // Swarm at world (44.0, 60.0) with 8px cells lands in grid cell (5, 7),
    // protecting the region below the cut exactly like a grid hazard.
    let swarm = Swarm {
        positions: vec![(44.0, 60.0)],
        cell_size: 8.0,
        field_width: 10,
        field_height: 10,
    };
    assert_eq!(swarm.hazard_positions(), vec![Point::new(5, 7)]);

    let mut engine = engine_10x10();
    let report = cut_across(&mut engine, 2, &swarm);

    assert_eq!(report.cells_captured, 16);
    assert_eq!(engine.field().get(Point::new(5, 7)), Some(CellState::Unclaimed));
}

#[test]
fn test_backfire_mid_draw() {
    let mut engine = engine_10x10();
    engine.start_draw(Point::new(0, 5)).unwrap();
    for x in 1..=4 {
        engine.step(Point::new(x, 5), &[] as &[Point]).unwrap();
    }

    // A hazard wanders onto the trail.
    let hazards = [Point::new(3, 5)];
    assert!(engine.trail_hit_by(&hazards[..]));

    engine.abandon_draw();
    assert!(!engine.is_drawing());
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.captures(), 0);

    // The field is back to its fresh state.
    let fresh = Field::new(10, 10).unwrap();
    assert_eq!(fresh.cells(), engine.field().cells());
    assert!(check_invariants(engine.field()).is_empty());
}

#[test]
fn test_render_reflects_session() {
    let mut engine = engine_10x10();
    let hazards = [Point::new(5, 7)];
    cut_across(&mut engine, 2, &hazards[..]);

    engine.start_draw(Point::new(0, 5)).unwrap();
    engine.step(Point::new(1, 5), &hazards[..]).unwrap();

    let frame = render_ascii(engine.field(), &hazards);
    let rows: Vec<&str> = frame.lines().collect();

    // Row 2 is fully captured, the live trail shows at (1, 5), the hazard
    // overlay shows at (5, 7).
    assert_eq!(rows[2], "##########");
    assert_eq!(rows[5].as_bytes()[1], b'*');
    assert_eq!(rows[7].as_bytes()[5], b'Q');

    // Footer reports the captured count.
    assert!(rows.last().unwrap().starts_with("Captured: "));
}
