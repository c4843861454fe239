//! Request/response types for serving cyclic tables
//!
//! The wire format is JSON: a grid serializes as a two-dimensional sequence
//! of cell records (`number`, `up`, `down`, `left`, `right`, `color`),
//! errors as `{ "message": <text> }`.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::TraversalConfig;
use crate::errors::{validate_dimensions, TableError, TableResult};
use crate::grid::{self, Grid};

/// Parameters accepted by the table boundary. Dimensions arrive as strings
/// (path segments in the original); selectors are optional query values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRequest {
    pub rows: String,
    pub columns: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<String>,
}

/// Error payload mirrored back to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl TableRequest {
    pub fn new(rows: &str, columns: &str) -> Self {
        Self {
            rows: rows.to_string(),
            columns: columns.to_string(),
            ..Self::default()
        }
    }

    pub fn with_traversal(mut self, corner: &str, dir: &str, rotation: &str) -> Self {
        self.corner = Some(corner.to_string());
        self.dir = Some(dir.to_string());
        self.rotation = Some(rotation.to_string());
        self
    }

    /// True when no traversal selector was supplied at all; such requests
    /// get the simple row-major mode.
    pub fn is_simple(&self) -> bool {
        self.corner.is_none() && self.dir.is_none() && self.rotation.is_none()
    }
}

/// Validate the request and generate its table. Dimension problems are the
/// only errors; selector strings are normalized, never rejected.
pub fn handle_request(request: &TableRequest) -> TableResult<Grid> {
    let rows: i64 = request
        .rows
        .trim()
        .parse()
        .map_err(|_| TableError::InvalidNumber(request.rows.clone()))?;
    let columns: i64 = request
        .columns
        .trim()
        .parse()
        .map_err(|_| TableError::InvalidNumber(request.columns.clone()))?;
    let config = validate_dimensions(rows, columns)?;

    if request.is_simple() {
        Ok(grid::generate(&config, None))
    } else {
        let traversal = TraversalConfig::from_params(
            request.corner.as_deref(),
            request.dir.as_deref(),
            request.rotation.as_deref(),
        );
        Ok(grid::generate(&config, Some(&traversal)))
    }
}

/// Serialize a grid to its JSON wire form
pub fn grid_to_json(grid: &Grid) -> TableResult<String> {
    serde_json::to_string(grid).map_err(|err| TableError::SerializationError(err.to_string()))
}

/// Handle a request end to end, producing the JSON payload the original
/// boundary produced: the grid on success, a message object otherwise.
pub fn respond_json(request: &TableRequest) -> String {
    let outcome = handle_request(request).and_then(|grid| grid_to_json(&grid));
    match outcome {
        Ok(payload) => payload,
        Err(err) => {
            warn!("table request failed: {}", err);
            let message = ErrorMessage {
                message: err.to_string(),
            };
            serde_json::to_string(&message)
                .unwrap_or_else(|_| String::from("{\"message\":\"internal error\"}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_request_has_no_selectors() {
        let request = TableRequest::new("3", "3");
        assert!(request.is_simple());
        let request = request.with_traversal("br", "left", "cw");
        assert!(!request.is_simple());
    }

    #[test]
    fn test_bad_dimensions_reject() {
        let err = handle_request(&TableRequest::new("abc", "3")).unwrap_err();
        assert_eq!(err.to_string(), "Rows and columns must be valid numbers!");

        let err = handle_request(&TableRequest::new("11", "3")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Whoops! Rows and columns should be between 1 and 10!"
        );
    }

    #[test]
    fn test_error_payload_shape() {
        let payload = respond_json(&TableRequest::new("0", "4"));
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(
            value["message"],
            "Whoops! Rows and columns should be between 1 and 10!"
        );
    }
}
