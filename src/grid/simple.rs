// Simple cyclic table: row-major numbering
//
// Marks here are raw boundary adjacency, not path adjacency: every cell
// flags each grid neighbor that exists, whatever its number. This is the
// legacy contract of the original flow and is intentionally different from
// the general spiral mode in `grid::spiral`.

use crate::config::GridConfig;
use crate::grid::cell::{Cell, Grid, COMPLETION_CELL_COLOR};

/// Number the table row-major (1..rows*cols) with boundary-adjacency marks.
/// Cell #1 gets the start treatment, the last cell the completion color.
pub fn generate(config: &GridConfig) -> Grid {
    let rows = config.rows;
    let cols = config.cols;
    let total = config.cell_count() as u32;
    let mut table: Grid = vec![vec![Cell::empty(); cols]; rows];

    let mut number = 1u32;
    for r in 0..rows {
        for c in 0..cols {
            let cell = &mut table[r][c];
            cell.number = number;
            cell.up = r > 0;
            cell.down = r + 1 < rows;
            cell.left = c > 0;
            cell.right = c + 1 < cols;

            if number == total {
                cell.color = COMPLETION_CELL_COLOR.to_string();
            }
            // Start override runs last so a 1x1 table keeps the start color
            if number == 1 {
                cell.mark_start();
            }

            number += 1;
        }
    }

    table
}
