// File: crates/chartkit-core/src/theme.rs
// Summary: Backend-neutral RGBA colors and light/dark theme presets for chart decorations.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color. Renderers convert this into their native color type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::from_argb(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::from_argb(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::from_argb(255, 0, 0, 0);

    /// Same argument order as Skia's `Color::from_argb`.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Multiply the current alpha by `factor` (clamped to 0..=1).
    pub fn scale_alpha(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self { a: (self.a as f32 * f).round() as u8, ..self }
    }

    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::TRANSPARENT
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub bar: Rgba,
    pub placeholder: Rgba,
    pub avg_line: Rgba,
    pub axis_label: Rgba,
    pub horizontal_line: Rgba,
    pub line_stroke: Rgba,
    pub line_grid: Rgba,
    pub line_label: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_argb(255, 18, 18, 20),
            bar: Rgba::from_argb(255, 64, 160, 255),
            placeholder: Rgba::TRANSPARENT,
            avg_line: Rgba::from_argb(255, 10, 132, 255),
            axis_label: Rgba::from_argb(255, 235, 235, 245),
            horizontal_line: Rgba::from_argb(255, 60, 60, 66),
            line_stroke: Rgba::WHITE,
            line_grid: Rgba::from_argb(77, 255, 255, 255),
            line_label: Rgba::from_argb(153, 255, 255, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::from_argb(255, 250, 250, 252),
            bar: Rgba::from_argb(255, 32, 120, 200),
            placeholder: Rgba::TRANSPARENT,
            avg_line: Rgba::from_argb(255, 0, 122, 255),
            axis_label: Rgba::from_argb(255, 20, 20, 30),
            horizontal_line: Rgba::from_argb(255, 211, 211, 211),
            line_stroke: Rgba::from_argb(255, 32, 120, 200),
            line_grid: Rgba::from_argb(77, 20, 20, 30),
            line_label: Rgba::from_argb(153, 20, 20, 30),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::BLACK,
            bar: Rgba::from_argb(255, 0x00, 0xaa, 0xff),
            placeholder: Rgba::TRANSPARENT,
            avg_line: Rgba::from_argb(255, 0xff, 0xff, 0x00),
            axis_label: Rgba::WHITE,
            horizontal_line: Rgba::from_argb(255, 0x44, 0x44, 0x44),
            line_stroke: Rgba::from_argb(255, 0x00, 0xff, 0xff),
            line_grid: Rgba::from_argb(120, 0xff, 0xff, 0xff),
            line_label: Rgba::WHITE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
