#![forbid(unsafe_code)]

mod render;

pub use render::{init_tracing, render_grid_ascii, GLYPHS};
