//! Map builder: weight vector in, shuffled labeled grid out.
//!
//! The pipeline normalizes weights into an exact integer partition of the
//! grid's cell count ([`partition`]), expands the partition into a flat
//! multiset of category indices, pads it if the clamp left it short, applies
//! a uniform shuffle, and reshapes the result into rows of labels.
//!
//! Everything up to the padding step is deterministic; given a fixed RNG
//! state the whole build is reproducible.
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tracing::{info, warn};

use crate::catalog::{self, MapType};
use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::grid::TileGrid;

pub mod partition;

/// Produce the shuffled flat multiset of category indices for a map of
/// `target_size` cells.
///
/// `weights` must supply at least one weight per category; extra entries are
/// ignored. Fails with [`Error::InsufficientWeights`] before consuming any
/// randomness.
pub fn generate_indices(
    category_count: usize,
    target_size: usize,
    weights: &[u64],
    rng: &mut dyn RngCore,
) -> Result<Vec<usize>> {
    if weights.len() < category_count {
        return Err(Error::InsufficientWeights {
            expected: category_count,
            got: weights.len(),
        });
    }

    let mut shares = partition::normalized_shares(&weights[..category_count], target_size);
    partition::correct_drift(&mut shares, target_size);

    let mut flat = partition::expand(&shares);
    pad_with_random(&mut flat, target_size, category_count, rng);
    flat.shuffle(rng);

    Ok(flat)
}

/// Build a labeled grid for `map_type` from an explicit weight vector.
pub fn build_grid(map_type: &MapType, weights: &[u64], rng: &mut dyn RngCore) -> Result<TileGrid> {
    let target = map_type.target_size();
    let indices = generate_indices(map_type.category_count(), target, weights, rng)?;

    // Reshape consumes exactly side^2 entries; overshoot from a degenerate
    // clamped partition stays behind.
    let cells = indices
        .into_iter()
        .take(target)
        .map(|i| map_type.categories[i].label.clone())
        .collect();

    Ok(TileGrid::from_cells(map_type.side, cells))
}

/// Build a labeled grid from a map-type key and a distribution policy.
///
/// This is the session-facing entry point: the catalog lookup runs first and
/// an unknown key fails with [`Error::UnknownMapType`] before any weight
/// computation.
pub fn build_map(key: &str, policy: Distribution, rng: &mut dyn RngCore) -> Result<TileGrid> {
    let map_type = catalog::map_type(key)?;
    let weights = policy.weights(map_type.category_count(), rng);
    let grid = build_grid(&map_type, &weights, rng)?;

    info!(
        map_type = key,
        policy = %policy,
        side = grid.side(),
        "built tile map"
    );

    Ok(grid)
}

/// Append uniformly random category indices until `flat` reaches `target`.
/// Reachable only when the drift clamp left the partition short.
fn pad_with_random(
    flat: &mut Vec<usize>,
    target: usize,
    category_count: usize,
    rng: &mut dyn RngCore,
) {
    if flat.len() >= target {
        return;
    }

    warn!(
        missing = target - flat.len(),
        "partition fell short of the cell count; padding with random categories"
    );
    while flat.len() < target {
        flat.push(rng.random_range(0..category_count));
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn histogram(indices: &[usize], category_count: usize) -> Vec<usize> {
        let mut counts = vec![0; category_count];
        for &i in indices {
            counts[i] += 1;
        }
        counts
    }

    #[test]
    fn classic_weights_partition_exactly() {
        // total 18 over 16 cells: floors [8, 4, 1, 0->1], surplus 2 to last
        let mut rng = StdRng::seed_from_u64(11);
        let indices = generate_indices(4, 16, &[10, 5, 2, 1], &mut rng).unwrap();

        assert_eq!(indices.len(), 16);
        assert_eq!(histogram(&indices, 4), vec![8, 4, 1, 3]);
    }

    #[test]
    fn shuffle_preserves_the_multiset() {
        let mut rng = StdRng::seed_from_u64(3);
        let weights = [7, 3, 1];
        let target = 25;

        let mut shares = partition::normalized_shares(&weights, target);
        partition::correct_drift(&mut shares, target);
        let mut expected = partition::expand(&shares);

        let mut produced = generate_indices(3, target, &weights, &mut rng).unwrap();
        expected.sort_unstable();
        produced.sort_unstable();
        assert_eq!(produced, expected);
    }

    #[test]
    fn extra_weight_entries_are_ignored() {
        let mut rng = StdRng::seed_from_u64(5);
        let indices = generate_indices(2, 4, &[1, 1, 100], &mut rng).unwrap();
        assert_eq!(histogram(&indices, 2), vec![2, 2]);
    }

    #[test]
    fn short_weight_vector_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let err = generate_indices(4, 16, &[3, 2], &mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientWeights {
                expected: 4,
                got: 2
            }
        );
    }

    #[test]
    fn padding_fills_short_multisets_within_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut flat = vec![0, 1];
        pad_with_random(&mut flat, 10, 3, &mut rng);

        assert_eq!(flat.len(), 10);
        assert!(flat.iter().all(|&i| i < 3));
        assert_eq!(&flat[..2], &[0, 1]);
    }

    #[test]
    fn padding_leaves_full_multisets_alone() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut flat = vec![0, 1, 2];
        pad_with_random(&mut flat, 3, 3, &mut rng);
        assert_eq!(flat, vec![0, 1, 2]);
    }

    #[test]
    fn built_grid_has_square_shape() {
        let mut rng = StdRng::seed_from_u64(21);
        let grid = build_map("compact", Distribution::Uniform, &mut rng).unwrap();

        assert_eq!(grid.side(), 16);
        assert_eq!(grid.len(), 16 * 16);
        let rows = grid.to_rows();
        assert_eq!(rows.len(), 16);
        assert!(rows.iter().all(|r| r.len() == 16));
    }

    #[test]
    fn grid_labels_come_from_the_catalog() {
        let mut rng = StdRng::seed_from_u64(2);
        let map_type = catalog::map_type("standard").unwrap();
        let grid = build_grid(&map_type, &map_type.default_weights, &mut rng).unwrap();

        let labels = map_type.labels();
        for row in grid.rows() {
            assert!(row.iter().all(|l| labels.contains(l)));
        }
        // the dominant "none" weight keeps the sentinel most frequent
        assert!(grid.count_of("none") > grid.count_of("energy"));
    }

    #[test]
    fn unknown_map_type_fails_before_weights() {
        let mut rng = StdRng::seed_from_u64(2);
        let err = build_map("volcanic", Distribution::Uniform, &mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownMapType {
                key: "volcanic".into()
            }
        );
    }

    #[test]
    fn same_seed_builds_the_same_map() {
        let mut rng_a = StdRng::seed_from_u64(77);
        let mut rng_b = StdRng::seed_from_u64(77);
        let a = build_map("standard", Distribution::Random, &mut rng_a).unwrap();
        let b = build_map("standard", Distribution::Random, &mut rng_b).unwrap();
        assert_eq!(a, b);

        let mut rng_c = StdRng::seed_from_u64(78);
        let c = build_map("standard", Distribution::Random, &mut rng_c).unwrap();
        assert_ne!(a, c);
    }
}
