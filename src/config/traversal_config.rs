// Traversal parameters: where numbering starts, which way it heads first,
// and which way it turns.
//
// Parsing from wire strings is total: an unrecognized selector falls back to
// its documented default (corner "br", direction "left", rotation "cw") and
// is never surfaced to the caller.

use log::debug;
use serde::{Deserialize, Serialize};

/// Start cell selector. The four center variants resolve to the same
/// physical cell (floor center) but stay distinct presets on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartCorner {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "br")]
    BottomRight,
    #[serde(rename = "cl")]
    CenterLeft,
    #[serde(rename = "cr")]
    CenterRight,
    #[serde(rename = "ct")]
    CenterTop,
    #[serde(rename = "cb")]
    CenterBottom,
}

impl Default for StartCorner {
    fn default() -> Self {
        StartCorner::BottomRight
    }
}

impl StartCorner {
    /// Parse a wire code, falling back to the default on anything unknown.
    pub fn parse(value: &str) -> Self {
        match value {
            "tl" => StartCorner::TopLeft,
            "tr" => StartCorner::TopRight,
            "bl" => StartCorner::BottomLeft,
            "br" => StartCorner::BottomRight,
            "cl" => StartCorner::CenterLeft,
            "cr" => StartCorner::CenterRight,
            "ct" => StartCorner::CenterTop,
            "cb" => StartCorner::CenterBottom,
            other => {
                debug!("unrecognized corner {:?}, using br", other);
                StartCorner::default()
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StartCorner::TopLeft => "tl",
            StartCorner::TopRight => "tr",
            StartCorner::BottomLeft => "bl",
            StartCorner::BottomRight => "br",
            StartCorner::CenterLeft => "cl",
            StartCorner::CenterRight => "cr",
            StartCorner::CenterTop => "ct",
            StartCorner::CenterBottom => "cb",
        }
    }

    pub fn is_center(&self) -> bool {
        matches!(
            self,
            StartCorner::CenterLeft
                | StartCorner::CenterRight
                | StartCorner::CenterTop
                | StartCorner::CenterBottom
        )
    }

    /// Resolve the physical start cell for a rows × cols table
    pub fn start_cell(&self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            StartCorner::TopLeft => (0, 0),
            StartCorner::TopRight => (0, cols - 1),
            StartCorner::BottomLeft => (rows - 1, 0),
            StartCorner::BottomRight => (rows - 1, cols - 1),
            _ => (rows / 2, cols / 2),
        }
    }

    /// Directions whose first move from the start cell stays on the board,
    /// in the preset order the player cycles through.
    pub fn valid_directions(&self, rows: usize, cols: usize) -> Vec<Direction> {
        let (row, col) = self.start_cell(rows, cols);
        PRESET_DIRECTIONS
            .iter()
            .copied()
            .filter(|dir| {
                let (dr, dc) = dir.vector();
                let r = row as isize + dr;
                let c = col as isize + dc;
                r >= 0 && r < rows as isize && c >= 0 && c < cols as isize
            })
            .collect()
    }
}

/// Step direction on the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Cyclic turn order shared by both spiral walkers; the rotation sense
/// advances an index into this table.
pub const DIRECTION_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

/// Order the player offers direction presets in
pub const PRESET_DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

impl Default for Direction {
    fn default() -> Self {
        Direction::Left
    }
}

impl Direction {
    pub fn parse(value: &str) -> Self {
        match value {
            "up" => Direction::Up,
            "down" => Direction::Down,
            "left" => Direction::Left,
            "right" => Direction::Right,
            other => {
                debug!("unrecognized direction {:?}, using left", other);
                Direction::default()
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// (row delta, col delta) for one step
    pub fn vector(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Position in [`DIRECTION_ORDER`]
    pub fn order_index(&self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Up => 3,
        }
    }
}

/// Turn sense applied between spiral legs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    #[serde(rename = "cw")]
    Clockwise,
    #[serde(rename = "ccw")]
    CounterClockwise,
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::Clockwise
    }
}

impl Rotation {
    pub fn parse(value: &str) -> Self {
        match value {
            "cw" => Rotation::Clockwise,
            "ccw" => Rotation::CounterClockwise,
            other => {
                debug!("unrecognized rotation {:?}, using cw", other);
                Rotation::default()
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Rotation::Clockwise => "cw",
            Rotation::CounterClockwise => "ccw",
        }
    }

    /// Index step through [`DIRECTION_ORDER`] per turn: +1 mod 4 for
    /// clockwise, +3 mod 4 (one step back) for counter-clockwise.
    pub fn turn_step(&self) -> usize {
        match self {
            Rotation::Clockwise => 1,
            Rotation::CounterClockwise => 3,
        }
    }
}

/// Full parameter set for the general spiral mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    pub corner: StartCorner,
    pub direction: Direction,
    pub rotation: Rotation,
}

impl TraversalConfig {
    pub fn new(corner: StartCorner, direction: Direction, rotation: Rotation) -> Self {
        Self {
            corner,
            direction,
            rotation,
        }
    }

    /// Build a config from optional wire strings. Missing and unrecognized
    /// selectors both land on the defaults.
    pub fn from_params(
        corner: Option<&str>,
        direction: Option<&str>,
        rotation: Option<&str>,
    ) -> Self {
        Self {
            corner: corner.map(StartCorner::parse).unwrap_or_default(),
            direction: direction.map(Direction::parse).unwrap_or_default(),
            rotation: rotation.map(Rotation::parse).unwrap_or_default(),
        }
    }
}
