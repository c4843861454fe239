// Display module for table formatting and visualization
pub mod formatters;

// Re-export main functions
pub use formatters::{
    column_digit_widths, format_cell_details, print_table, render_minimap_lines,
    render_table_lines, TableDisplayConfig, HIDDEN_GLYPH, UNREACHED_GLYPH,
};
