//! Game session state: one grid, one player, one inventory.
//!
//! The session owns all mutable game state and is handed by reference to
//! whatever drives it; there are no process-wide globals. The map is built
//! exactly once, at session creation, and afterwards only mutated cell by
//! cell when the player collects.
use std::collections::BTreeMap;

use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Label, EMPTY_LABEL};
use crate::distribution::Distribution;
use crate::error::Result;
use crate::grid::TileGrid;
use crate::mapgen;

/// Cardinal movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A discrete player action, shaped like the `{action, direction}` wire
/// payload of the driving layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "action", rename_all = "snake_case"))]
pub enum Action {
    Move { direction: Direction },
    Collect,
}

/// Player position on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerState {
    pub x: usize,
    pub y: usize,
}

/// Collected resources, label to count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Inventory(BTreeMap<Label, u64>);

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one collected unit of `label`.
    pub fn add(&mut self, label: impl Into<Label>) {
        *self.0.entry(label.into()).or_insert(0) += 1;
    }

    /// Units collected for `label`; 0 when never collected.
    pub fn count(&self, label: &str) -> u64 {
        self.0.get(label).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Label, u64)> {
        self.0.iter().map(|(l, &c)| (l, c))
    }
}

/// The `{player, inventory, map}` state value handed to the driving layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateSnapshot {
    pub player: PlayerState,
    pub inventory: Inventory,
    pub map: Vec<Vec<Label>>,
}

/// One player's world: the built grid plus position and inventory.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: TileGrid,
    player: PlayerState,
    inventory: Inventory,
}

impl GameSession {
    /// Build the map once from a map-type key and distribution policy and
    /// spawn the player at the origin. Core errors propagate unchanged.
    pub fn new(map_type_key: &str, policy: Distribution, rng: &mut dyn RngCore) -> Result<Self> {
        let grid = mapgen::build_map(map_type_key, policy, rng)?;
        Ok(Self::from_grid(grid))
    }

    /// Wrap an already-built grid, spawning the player at the origin.
    pub fn from_grid(grid: TileGrid) -> Self {
        Self {
            grid,
            player: PlayerState::default(),
            inventory: Inventory::new(),
        }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn player(&self) -> PlayerState {
        self.player
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Dispatch one action against the session state.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Move { direction } => self.move_player(direction),
            Action::Collect => {
                self.collect();
            }
        }
    }

    /// Step one cell in `direction`, wrapping toroidally at the map edges.
    pub fn move_player(&mut self, direction: Direction) {
        let side = self.grid.side();
        match direction {
            Direction::Up => self.player.y = (self.player.y + side - 1) % side,
            Direction::Down => self.player.y = (self.player.y + 1) % side,
            Direction::Left => self.player.x = (self.player.x + side - 1) % side,
            Direction::Right => self.player.x = (self.player.x + 1) % side,
        }
    }

    /// Collect the resource under the player, if any.
    ///
    /// A non-empty cell is added to the inventory and depleted to the empty
    /// sentinel; an empty cell is a no-op. Returns the collected label.
    pub fn collect(&mut self) -> Option<Label> {
        let PlayerState { x, y } = self.player;
        if self.grid.get(x, y) == EMPTY_LABEL {
            return None;
        }

        let label = self.grid.replace(x, y, EMPTY_LABEL);
        self.inventory.add(label.clone());
        debug!(x, y, resource = %label, "collected resource");
        Some(label)
    }

    /// Current `{player, inventory, map}` state.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            player: self.player,
            inventory: self.inventory.clone(),
            map: self.grid.to_rows(),
        }
    }

    /// Windowed map slice centered on the player, wrapping toroidally.
    pub fn view(&self, radius: usize) -> Vec<Vec<Label>> {
        self.grid.view(self.player.x, self.player.y, radius)
    }
}
