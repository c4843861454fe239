// Display formatting utilities for cyclic tables
//
// Rendering is cursor-aware: cells numbered above the reveal cursor show a
// placeholder, and connector marks are only drawn next to revealed cells.

use crate::grid::{Cell, Grid};

/// Glyph for a cell not yet revealed by the cursor
pub const HIDDEN_GLYPH: char = '.';
/// Glyph for a cell the traversal never numbered
pub const UNREACHED_GLYPH: char = 'x';

/// Standard table display configuration
pub struct TableDisplayConfig {
    pub show_headers: bool,
    pub compact_format: bool,
    pub show_connectors: bool,
}

impl Default for TableDisplayConfig {
    fn default() -> Self {
        Self {
            show_headers: true,
            compact_format: false,
            show_connectors: true,
        }
    }
}

/// Digit width per column, sized by the largest number in that column
pub fn column_digit_widths(grid: &Grid) -> Vec<usize> {
    let cols = grid.first().map(|row| row.len()).unwrap_or(0);
    let mut widths = vec![1; cols];
    for c in 0..cols {
        let max_num = grid.iter().map(|row| row[c].number).max().unwrap_or(0);
        widths[c] = digit_count(max_num);
    }
    widths
}

fn digit_count(mut n: u32) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

fn cell_text(cell: &Cell, cursor: u32, width: usize) -> String {
    if !cell.is_revealed_at(cursor) {
        format!("{:>width$}", HIDDEN_GLYPH)
    } else if !cell.is_numbered() {
        format!("{:>width$}", UNREACHED_GLYPH)
    } else {
        format!("{:>width$}", cell.number)
    }
}

// Connector between horizontally adjacent cells. Cell #1 carries no marks of
// its own, so the neighbor's mark toward it still draws the edge.
fn horizontal_mark(left: &Cell, right: &Cell, cursor: u32) -> bool {
    (left.right && left.is_revealed_at(cursor)) || (right.left && right.is_revealed_at(cursor))
}

fn vertical_mark(above: &Cell, below: &Cell, cursor: u32) -> bool {
    (above.down && above.is_revealed_at(cursor)) || (below.up && below.is_revealed_at(cursor))
}

/// Render the table as terminal lines
pub fn render_table_lines(grid: &Grid, cursor: u32, display: &TableDisplayConfig) -> Vec<String> {
    let mut lines = Vec::new();
    let rows = grid.len();
    if rows == 0 {
        return lines;
    }
    let cols = grid[0].len();
    let widths = column_digit_widths(grid);
    let revealed = grid
        .iter()
        .flatten()
        .filter(|cell| cell.is_numbered() && cell.is_revealed_at(cursor))
        .count();
    let total = grid.iter().flatten().filter(|c| c.is_numbered()).count();

    if display.show_headers {
        if !display.compact_format {
            lines.push("=".repeat(60));
        }
        lines.push(format!(
            "Cyclic Table - {}x{} ({}/{} revealed)",
            rows, cols, revealed, total
        ));
        if !display.compact_format {
            lines.push("=".repeat(60));
        }
    }

    // Column headers
    let mut header = String::from("    ");
    for c in 0..cols {
        if c > 0 {
            header.push_str("  ");
        }
        header.push_str(&format!("{:>width$}", c, width = widths[c]));
    }
    lines.push(header);

    for r in 0..rows {
        let mut line = format!("{:2}: ", r);
        for c in 0..cols {
            if c > 0 {
                let mark = display.show_connectors
                    && horizontal_mark(&grid[r][c - 1], &grid[r][c], cursor);
                line.push_str(if mark { "--" } else { "  " });
            }
            line.push_str(&cell_text(&grid[r][c], cursor, widths[c]));
        }
        lines.push(line);

        // Connector row between this grid row and the next
        if display.show_connectors && r + 1 < rows {
            let mut bars = String::from("    ");
            for c in 0..cols {
                if c > 0 {
                    bars.push_str("  ");
                }
                let mark = vertical_mark(&grid[r][c], &grid[r + 1][c], cursor);
                bars.push_str(&format!(
                    "{:>width$}",
                    if mark { '|' } else { ' ' },
                    width = widths[c]
                ));
            }
            lines.push(bars);
        }
    }

    lines
}

/// Print the table to stdout
pub fn print_table(grid: &Grid, cursor: u32, display: &TableDisplayConfig) {
    for line in render_table_lines(grid, cursor, display) {
        println!("{}", line);
    }
}

/// One glyph per cell, filled once the cursor has passed it
pub fn render_minimap_lines(grid: &Grid, cursor: u32) -> Vec<String> {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if cell.is_revealed_at(cursor) {
                        '#'
                    } else {
                        HIDDEN_GLYPH
                    }
                })
                .collect()
        })
        .collect()
}

/// Detail text for one cell: number, position, and each directional mark
/// with the neighbor on that side.
pub fn format_cell_details(grid: &Grid, row: usize, col: usize) -> String {
    let rows = grid.len();
    let cols = grid.first().map(|r| r.len()).unwrap_or(0);
    let cell = &grid[row][col];

    let mut out = String::new();
    if cell.is_numbered() {
        out.push_str(&format!("#{} at row {}, col {}\n", cell.number, row + 1, col + 1));
    } else {
        out.push_str(&format!("unreached at row {}, col {}\n", row + 1, col + 1));
    }

    let neighbor = |dr: isize, dc: isize| -> Option<(u32, usize, usize)> {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if r >= 0 && r < rows as isize && c >= 0 && c < cols as isize {
            Some((grid[r as usize][c as usize].number, r as usize, c as usize))
        } else {
            None
        }
    };

    let sides = [
        ("up", cell.up, neighbor(-1, 0)),
        ("down", cell.down, neighbor(1, 0)),
        ("left", cell.left, neighbor(0, -1)),
        ("right", cell.right, neighbor(0, 1)),
    ];
    for (name, marked, info) in sides {
        match info {
            Some((n, r, c)) => out.push_str(&format!(
                "  {}: {} ({} r{} c{})\n",
                name,
                if marked { "yes" } else { "no" },
                n,
                r,
                c
            )),
            None => out.push_str(&format!(
                "  {}: {}\n",
                name,
                if marked { "yes" } else { "no" }
            )),
        }
    }
    out
}
