// Grid module - cell records and the two traversal implementations
// Each mode has its own marking contract; see the module docs.

pub mod cell;
pub mod simple;
pub mod spiral;

pub use cell::{
    Cell, Grid, COMPLETION_CELL_COLOR, DEFAULT_CELL_COLOR, START_CELL_COLOR, UNNUMBERED,
};

// Re-export common types used with grids
pub use crate::config::{GridConfig, TraversalConfig};

/// Generate a cyclic table. With no traversal config the simple row-major
/// mode runs; with one, the general spiral mode.
pub fn generate(config: &GridConfig, traversal: Option<&TraversalConfig>) -> Grid {
    match traversal {
        Some(traversal) => spiral::generate(config, traversal),
        None => simple::generate(config),
    }
}
