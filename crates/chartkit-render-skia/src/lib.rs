// File: crates/chartkit-render-skia/src/lib.rs
// Summary: Skia renderer crate: draws a chartkit chart onto CPU raster surfaces.

pub mod canvas;
pub mod render;
pub mod text;

pub use canvas::{to_color, SkiaCanvas};
pub use render::{render_to_png, render_to_png_bytes, render_to_rgba8, render_to_surface, RenderOptions};
pub use text::TextShaper;
