// Configuration module - grid dimensions and traversal parameters
pub mod grid_config;
pub mod traversal_config;

pub use grid_config::GridConfig;
pub use traversal_config::{
    Direction, Rotation, StartCorner, TraversalConfig, DIRECTION_ORDER, PRESET_DIRECTIONS,
};
