//! ASCII renderer for terminal viewing and test diagnostics.

use crate::field::{CellState, Field, Point};

/// Render the field to ASCII.
///
/// Output format:
/// ```text
/// ##########
/// #....Q...#
/// #.***....#
/// ##########
/// Captured: 36/100 (36.0%)
/// ```
///
/// Legend: `#` captured, `.` unclaimed, `*` trail, `Q` hazard. Hazards are
/// drawn over whatever cell they occupy.
#[must_use]
pub fn render_ascii(field: &Field, hazards: &[Point]) -> String {
    let width = usize::from(field.width());
    // One char per cell plus a newline per row, plus the footer.
    let mut output = String::with_capacity((width + 1) * usize::from(field.height()) + 40);

    let mut row = 0u16;
    for (p, cell) in field.iter() {
        if p.y != row {
            output.push('\n');
            row = p.y;
        }
        let ch = if hazards.contains(&p) {
            'Q'
        } else {
            match cell {
                CellState::Captured => '#',
                CellState::Unclaimed => '.',
                CellState::Trail => '*',
            }
        };
        output.push(ch);
    }
    output.push('\n');

    let captured = field.captured_cells();
    let total = field.cell_count();
    output.push_str(&format!(
        "Captured: {captured}/{total} ({:.1}%)\n",
        field.captured_fraction() * 100.0
    ));

    output
}
