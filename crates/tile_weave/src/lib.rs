#![forbid(unsafe_code)]
//! tile_weave: weighted-distribution tile map generation for grid resource worlds.
//!
//! Modules:
//! - distribution: named weight policies (decreasing, uniform, mid_peak, ...)
//! - mapgen: normalize, correct, expand, shuffle, and reshape into a labeled grid
//! - catalog: category lists and the built-in map-type table
//! - grid: row-major square grid with toroidal addressing
//! - session: per-player game state driving the builder exactly once
//!
//! For examples, see the `tile_weave_examples` crate in this workspace.
pub mod catalog;
pub mod distribution;
pub mod error;
pub mod grid;
pub mod mapgen;
pub mod session;

/// Convenient re-exports for common types. Import with `use tile_weave::prelude::*;`.
pub mod prelude {
    pub use crate::catalog::{map_type, Category, Label, MapType, EMPTY_LABEL, MAP_TYPE_KEYS};
    pub use crate::distribution::{Distribution, ALL_DISTRIBUTIONS, UNIFORM_WEIGHT};
    pub use crate::error::{Error, Result};
    pub use crate::grid::TileGrid;
    pub use crate::mapgen::{build_grid, build_map, generate_indices};
    pub use crate::session::{
        Action, Direction, GameSession, Inventory, PlayerState, StateSnapshot,
    };
}
