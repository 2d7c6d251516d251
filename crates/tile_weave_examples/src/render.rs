//! Shared helpers for the example binaries: tracing setup and ASCII rendering.
use std::collections::HashMap;

use tile_weave::grid::TileGrid;
use tracing_subscriber::EnvFilter;

/// Glyph palette assigned to category labels in first-seen order.
pub const GLYPHS: &[char] = &['.', '#', 'o', '*', '+', '%', '@', '&'];

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Render a grid to ASCII, one glyph per cell, plus a legend line.
pub fn render_grid_ascii(grid: &TileGrid) -> String {
    let mut glyph_of: HashMap<&str, char> = HashMap::new();
    let mut legend: Vec<(char, String)> = Vec::new();

    let mut out = String::with_capacity(grid.len() + grid.side() + 64);
    for row in grid.rows() {
        for label in row {
            let next = GLYPHS[glyph_of.len() % GLYPHS.len()];
            let glyph = *glyph_of.entry(label.as_str()).or_insert_with(|| {
                legend.push((next, label.clone()));
                next
            });
            out.push(glyph);
        }
        out.push('\n');
    }

    out.push_str("legend:");
    for (glyph, label) in legend {
        out.push_str(&format!(" {glyph}={label}"));
    }
    out.push('\n');
    out
}
