// File: crates/chartkit-core/src/scale.rs
// Summary: Value (Y) scale mapping data values to a height fraction and to pixels.
// Notes:
// - Every ratio goes through `safe_div`; a division by zero yields 0, never NaN.
// - A degenerate range domain (min == max) maps every value to mid-height (0.5).

use crate::geometry::safe_div;
use crate::types::{BOTTOM_HEADROOM, TOP_HEADROOM};

/// Fraction returned for a degenerate (`min == max`) range domain.
pub const DEGENERATE_FRACTION: f64 = 0.5;

/// Closed `[min, max]` interval of data values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Returns `None` when no finite values are supplied.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_finite() && max.is_finite() { Some(Self { min, max }) } else { None }
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Domain widened by the headroom factors: the minimum is pulled down and the
    /// maximum pushed up (relative to their magnitude, so negatives widen too).
    pub fn padded(&self, top_headroom: f64, bottom_headroom: f64) -> Domain {
        Domain {
            min: self.min - self.min.abs() * (1.0 - bottom_headroom),
            max: self.max + self.max.abs() * (top_headroom - 1.0),
        }
    }
}

/// Maps values onto the vertical span of the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub domain: Option<Domain>,
    pub use_range: bool,
    pub top_headroom: f64,
    pub bottom_headroom: f64,
}

impl ValueScale {
    pub fn new(domain: Option<Domain>, use_range: bool) -> Self {
        Self { domain, use_range, top_headroom: TOP_HEADROOM, bottom_headroom: BOTTOM_HEADROOM }
    }

    pub fn with_headroom(mut self, top: f64, bottom: f64) -> Self {
        self.top_headroom = top;
        self.bottom_headroom = bottom;
        self
    }

    /// Values at the bottom and top of the plot: the padded domain with `use_range`,
    /// `[0, max]` otherwise. `None` without data.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let domain = self.domain?;
        if self.use_range {
            let padded = domain.padded(self.top_headroom, self.bottom_headroom);
            Some((padded.min, padded.max))
        } else {
            Some((0.0, domain.max))
        }
    }

    /// How far up the available vertical span `value` sits, in `[0, 1]`.
    pub fn height_fraction(&self, value: f64) -> f64 {
        let Some(domain) = self.domain else { return 0.0 };
        if !value.is_finite() {
            return 0.0;
        }
        let fraction = if self.use_range {
            if domain.is_degenerate() {
                return DEGENERATE_FRACTION;
            }
            let padded = domain.padded(self.top_headroom, self.bottom_headroom);
            let span = padded.max - padded.min;
            if span <= 0.0 {
                return DEGENERATE_FRACTION;
            }
            safe_div(value - padded.min, span)
        } else {
            if value == 0.0 {
                return 0.0;
            }
            safe_div(value, domain.max)
        };
        fraction.clamp(0.0, 1.0)
    }

    /// Pixel y for `value` inside the vertical span `[top_px, bottom_px]`.
    #[inline]
    pub fn to_px(&self, value: f64, top_px: f32, bottom_px: f32) -> f32 {
        let f = self.height_fraction(value) as f32;
        bottom_px - f * (bottom_px - top_px)
    }
}

/// Stand-alone form of [`ValueScale::height_fraction`] with the default headroom.
pub fn height_fraction(value: f64, domain_min: f64, domain_max: f64, use_range: bool) -> f64 {
    let domain = Domain::from_values([domain_min, domain_max]);
    ValueScale::new(domain, use_range).height_fraction(value)
}
