//! Integer partition arithmetic for the map builder.
//!
//! Turns a weight vector into per-category cell counts that sum to the grid's
//! target cell count, correcting the drift that floor division introduces.
//! All functions here are pure; randomness stays in [`crate::mapgen`].

/// Floor-normalize `weights` into per-category shares of `target` cells.
///
/// Every share is at least 1, so a category whose exact share rounds to zero
/// still appears on the map. A weight vector summing to zero is treated as
/// summing to 1.
pub fn normalized_shares(weights: &[u64], target: usize) -> Vec<usize> {
    let total: u128 = weights.iter().map(|&w| w as u128).sum();
    let total = total.max(1);

    weights
        .iter()
        .map(|&w| {
            let share = (w as u128 * target as u128 / total) as usize;
            share.max(1)
        })
        .collect()
}

/// Fold rounding drift into the LAST share.
///
/// A surplus is added to the last share in full; a deficit is subtracted from
/// it, clamped so it never drops below 1. The clamp means the corrected
/// partition may not sum to `target` exactly; that slack is accepted and
/// later absorbed by padding, never reported as an error.
pub fn correct_drift(shares: &mut [usize], target: usize) {
    let sum: usize = shares.iter().sum();
    let diff = target as isize - sum as isize;
    if let Some(last) = shares.last_mut() {
        *last = (*last as isize + diff).max(1) as usize;
    }
}

/// Expand shares into the flat multiset of category indices, in category
/// order: index `i` appears `shares[i]` times.
pub fn expand(shares: &[usize]) -> Vec<usize> {
    let mut flat = Vec::with_capacity(shares.iter().sum());
    for (index, &count) in shares.iter().enumerate() {
        flat.extend(std::iter::repeat(index).take(count));
    }
    flat
}
