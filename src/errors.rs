use std::fmt;

use crate::config::GridConfig;
use crate::{MAX_GRID_COLS, MAX_GRID_ROWS};

/// Errors surfaced by the request boundary. The traversal engine itself
/// never fails; unrecognized selector strings are normalized to defaults
/// before they reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A dimension that did not parse as an integer
    InvalidNumber(String),
    /// Dimensions outside the served range
    DimensionsOutOfRange { rows: i64, columns: i64 },
    /// Response encoding failures
    SerializationError(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidNumber(_) => {
                write!(f, "Rows and columns must be valid numbers!")
            }
            TableError::DimensionsOutOfRange { .. } => {
                write!(f, "Whoops! Rows and columns should be between 1 and 10!")
            }
            TableError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for TableError {}

/// Result type alias for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Validate requested dimensions against the served bounds
pub fn validate_dimensions(rows: i64, columns: i64) -> TableResult<GridConfig> {
    if rows < 1 || rows > MAX_GRID_ROWS as i64 || columns < 1 || columns > MAX_GRID_COLS as i64 {
        return Err(TableError::DimensionsOutOfRange { rows, columns });
    }
    Ok(GridConfig::new(rows as usize, columns as usize))
}
