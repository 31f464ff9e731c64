// crates/core/src/presentation.rs
pub mod fields;
pub mod formatters;
pub mod renderer;

pub use renderer::{TextRenderer, console_lines, render, render_with};
