// File: crates/chartkit-core/src/types.rs
// Summary: Shared types and constants (default view size, insets, headroom factors).

use serde::{Deserialize, Serialize};

/// Default view width in pixels.
pub const WIDTH: f32 = 390.0;
/// Default view height in pixels.
pub const HEIGHT: f32 = 260.0;

/// The top-most horizontal line sits 10% above the highest value.
pub const TOP_HEADROOM: f64 = 110.0 / 100.0;
/// The lowest horizontal line sits 5% below the lowest value.
pub const BOTTOM_HEADROOM: f64 = 95.0 / 100.0;

/// Screen margins around the chart content, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    /// Negative inputs are clamped to zero.
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left: left.max(0.0), right: right.max(0.0), top: top.max(0.0), bottom: bottom.max(0.0) }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}
