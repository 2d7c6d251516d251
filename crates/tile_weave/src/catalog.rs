//! Category lists and the built-in map-type configuration table.
//!
//! A [`MapType`] bundles everything the map builder needs for one world
//! flavor: the grid side length, the ordered category list, and the default
//! weight vector aligned to it. Order matters; weight vectors are positional.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Label of the empty-cell sentinel category present in every map type.
pub const EMPTY_LABEL: &str = "none";

pub type Label = String;

/// One resource kind (or the empty sentinel) with its stable position in the
/// category list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Category {
    pub index: usize,
    pub label: Label,
}

impl Category {
    pub fn new(index: usize, label: impl Into<Label>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }

    /// Whether this is the empty-cell sentinel.
    pub fn is_empty_sentinel(&self) -> bool {
        self.label == EMPTY_LABEL
    }
}

/// A map-type configuration: side length, categories, default weights.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct MapType {
    /// Stable lookup key.
    pub key: &'static str,
    /// Grid side length; the grid holds `side * side` cells.
    pub side: usize,
    /// Ordered category list, headed by the empty sentinel.
    pub categories: Vec<Category>,
    /// Default weights, positionally aligned to `categories`.
    pub default_weights: Vec<u64>,
}

impl MapType {
    fn new(key: &'static str, side: usize, labels: &[&str], weights: &[u64]) -> Self {
        debug_assert_eq!(labels.len(), weights.len());
        Self {
            key,
            side,
            categories: labels
                .iter()
                .enumerate()
                .map(|(i, l)| Category::new(i, *l))
                .collect(),
            default_weights: weights.to_vec(),
        }
    }

    /// Total cell count of the grid this map type describes.
    pub fn target_size(&self) -> usize {
        self.side * self.side
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Category labels in list order.
    pub fn labels(&self) -> Vec<Label> {
        self.categories.iter().map(|c| c.label.clone()).collect()
    }
}

/// Keys of the built-in map types, in lookup order.
pub const MAP_TYPE_KEYS: [&str; 3] = ["standard", "compact", "rich"];

/// Look up a built-in map type by key.
///
/// Fails with [`Error::UnknownMapType`] for keys outside [`MAP_TYPE_KEYS`];
/// the lookup happens before any weight computation or randomness.
pub fn map_type(key: &str) -> Result<MapType> {
    match key {
        "standard" => Ok(MapType::new(
            "standard",
            32,
            &["none", "stone", "ore", "energy"],
            &[10, 5, 2, 1],
        )),
        "compact" => Ok(MapType::new(
            "compact",
            16,
            &["none", "stone", "ore", "energy"],
            &[10, 5, 2, 1],
        )),
        "rich" => Ok(MapType::new(
            "rich",
            24,
            &["none", "stone", "ore", "energy", "crystal"],
            &[6, 6, 4, 2, 1],
        )),
        other => Err(Error::UnknownMapType { key: other.into() }),
    }
}
