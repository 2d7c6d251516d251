use rand::rngs::StdRng;
use rand::SeedableRng;
use tile_weave::prelude::*;
use tile_weave_examples::{init_tracing, render_grid_ascii};

/// Builds a compact map once per distribution policy and prints each as
/// ASCII with a per-category histogram, so the shaping effect of every
/// policy is visible side by side.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let compact = map_type("compact")?;
    let labels = compact.labels();

    for policy in ALL_DISTRIBUTIONS {
        let mut rng = StdRng::seed_from_u64(2026);
        let grid = build_map(compact.key, policy, &mut rng)?;

        println!("== {policy} ==");
        print!("{}", render_grid_ascii(&grid));
        for label in &labels {
            println!("  {label:>8}: {}", grid.count_of(label));
        }
        println!();
    }

    Ok(())
}
