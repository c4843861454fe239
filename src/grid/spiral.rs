// General spiral traversal: parametric start cell, initial direction, and
// rotation sense.
//
// Marks here are path adjacency: a directional flag is set iff the grid
// neighbor on that side holds this cell's predecessor or successor number.

use crate::config::{GridConfig, TraversalConfig, DIRECTION_ORDER};
use crate::grid::cell::{Cell, Grid};
use log::debug;

/// Which walker drives the numbering, chosen once from the resolved start
/// cell: outward rings from a center start, boundary-hugging otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraversalMode {
    CenterOutward,
    BoundaryHug,
}

/// Number the table along the configured spiral and derive path-adjacency
/// marks. Pure function of its inputs; never fails on in-bounds dimensions,
/// including 1x1.
pub fn generate(config: &GridConfig, traversal: &TraversalConfig) -> Grid {
    let mut table: Grid = vec![vec![Cell::empty(); config.cols]; config.rows];

    let (start_row, start_col) = traversal.corner.start_cell(config.rows, config.cols);
    let dir_idx = traversal.direction.order_index();
    let turn_step = traversal.rotation.turn_step();

    let mode = if traversal.corner.is_center() {
        TraversalMode::CenterOutward
    } else {
        TraversalMode::BoundaryHug
    };

    match mode {
        TraversalMode::CenterOutward => {
            number_outward(&mut table, config, start_row, start_col, dir_idx, turn_step)
        }
        TraversalMode::BoundaryHug => {
            number_inward(&mut table, config, start_row, start_col, dir_idx, turn_step)
        }
    }

    apply_path_adjacency(&mut table, config);
    table
}

/// Outward modified spiral: legs of growing length (1, 1, 2, 2, 3, 3, ...)
/// around the start cell. The first step off the board ends numbering for
/// good; unreached cells keep the sentinel number 0.
fn number_outward(
    table: &mut Grid,
    config: &GridConfig,
    start_row: usize,
    start_col: usize,
    mut dir_idx: usize,
    turn_step: usize,
) {
    let total = config.cell_count() as u32;
    let mut current = 1u32;
    table[start_row][start_col].number = current;
    current += 1;

    let mut row = start_row as isize;
    let mut col = start_col as isize;
    let mut step_len = 1usize;

    while current <= total {
        for _leg in 0..2 {
            if current > total {
                break;
            }
            let (dr, dc) = DIRECTION_ORDER[dir_idx].vector();
            for _step in 0..step_len {
                if current > total {
                    break;
                }
                row += dr;
                col += dc;
                if !config.contains(row, col) {
                    debug!(
                        "outward spiral left the board at ({}, {}); {} of {} cells numbered",
                        row,
                        col,
                        current - 1,
                        total
                    );
                    return;
                }
                table[row as usize][col as usize].number = current;
                current += 1;
            }
            dir_idx = (dir_idx + turn_step) % 4;
        }
        step_len += 1;
    }
}

/// Boundary-hugging spiral: step in the current direction, turning by the
/// rotation sense whenever the next cell is off the board or already
/// numbered. Four failed turns in a row means the walk is boxed in.
fn number_inward(
    table: &mut Grid,
    config: &GridConfig,
    start_row: usize,
    start_col: usize,
    mut dir_idx: usize,
    turn_step: usize,
) {
    let total = config.cell_count() as u32;
    let mut visited = vec![vec![false; config.cols]; config.rows];
    let mut row = start_row;
    let mut col = start_col;
    let mut current = 1u32;

    while current <= total {
        table[row][col].number = current;
        visited[row][col] = true;
        current += 1;
        if current > total {
            break;
        }

        let mut moved = false;
        for _attempt in 0..4 {
            let (dr, dc) = DIRECTION_ORDER[dir_idx].vector();
            let next_row = row as isize + dr;
            let next_col = col as isize + dc;
            if config.contains(next_row, next_col) && !visited[next_row as usize][next_col as usize]
            {
                row = next_row as usize;
                col = next_col as usize;
                moved = true;
                break;
            }
            dir_idx = (dir_idx + turn_step) % 4;
        }
        if !moved {
            debug!(
                "boundary spiral boxed in at ({}, {}); {} of {} cells numbered",
                row,
                col,
                current - 1,
                total
            );
            break;
        }
    }
}

/// Set each cell's directional marks from its grid neighbors' numbers, then
/// apply the start override to cell #1. Runs over sentinel cells too, so an
/// unnumbered cell next to #1 keeps its derived mark.
fn apply_path_adjacency(table: &mut Grid, config: &GridConfig) {
    for r in 0..config.rows {
        for c in 0..config.cols {
            let n = table[r][c].number;
            let up = r > 0 && sequential(table[r - 1][c].number, n);
            let down = r + 1 < config.rows && sequential(table[r + 1][c].number, n);
            let left = c > 0 && sequential(table[r][c - 1].number, n);
            let right = c + 1 < config.cols && sequential(table[r][c + 1].number, n);

            let cell = &mut table[r][c];
            cell.up = up;
            cell.down = down;
            cell.left = left;
            cell.right = right;
            if n == 1 {
                cell.mark_start();
            }
        }
    }
}

/// Two path numbers are sequential when they differ by exactly one
fn sequential(a: u32, b: u32) -> bool {
    a + 1 == b || b + 1 == a
}
