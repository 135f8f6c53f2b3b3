// File: crates/chartkit-core/src/position.rs
// Summary: Horizontal slot layout (x offset, bar width, spacing) for N logical slots.
// Notes:
// - Effective slot count = max(min_slot_count, min(max_visible_count, slot_count)).
// - Explicit width/spacing overrides win over the derived values.
// - Zero effective slots resolve to zero width and spacing, never NaN.

use crate::geometry::safe_div_f32;

/// Share of the available width handed to inter-bar spacing when none is configured.
pub const SPACING_SHARE: f32 = 0.2;

/// Inputs to the slot layout, resolved from the chart configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlotRequest {
    pub available_width: f32,
    pub slot_count: usize,
    pub min_slot_count: Option<usize>,
    pub max_visible_count: Option<usize>,
    pub fixed_width: Option<f32>,
    pub fixed_spacing: Option<f32>,
}

impl SlotRequest {
    pub fn new(available_width: f32, slot_count: usize) -> Self {
        Self { available_width, slot_count, ..Self::default() }
    }

    /// Number of real entries rendered after applying the visible cap.
    pub fn displayed(&self) -> usize {
        self.slot_count.min(self.max_visible_count.unwrap_or(usize::MAX))
    }

    pub fn effective(&self) -> usize {
        self.displayed().max(self.min_slot_count.unwrap_or(0))
    }
}

/// Resolved per-slot geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlotLayout {
    /// Real entries drawn (after the visible cap).
    pub displayed: usize,
    /// Slots laid out, including trailing placeholders.
    pub effective: usize,
    pub width: f32,
    pub spacing: f32,
    /// Extra offset applied to every slot of group `g`: `g * group_spacing`.
    pub group_spacing: f32,
    /// Groups laid out; zero for ungrouped series.
    pub group_count: usize,
}

impl SlotLayout {
    pub fn compute(req: &SlotRequest) -> Self {
        let displayed = req.displayed();
        let effective = req.effective();
        let available = req.available_width.max(0.0);
        Self::resolve(displayed, effective, available, req.fixed_width, req.fixed_spacing, 0.0)
    }

    /// Grouped (clustered) layout: bars of one group are contiguous and groups are
    /// separated by `group_spacing`. The total group gap is reserved from the
    /// available width before the slot width is derived.
    pub fn grouped(req: &SlotRequest, group_count: usize, group_spacing: f32) -> Self {
        let displayed = req.displayed();
        let effective = req.effective();
        let group_spacing = group_spacing.max(0.0);
        let available = (req.available_width - group_count as f32 * group_spacing).max(0.0);
        let slots = Self::resolve(displayed, effective, available, req.fixed_width, req.fixed_spacing, group_spacing);
        Self { group_count, ..slots }
    }

    fn resolve(
        displayed: usize,
        effective: usize,
        available: f32,
        fixed_width: Option<f32>,
        fixed_spacing: Option<f32>,
        group_spacing: f32,
    ) -> Self {
        if effective == 0 {
            return Self { displayed, effective, width: 0.0, spacing: 0.0, group_spacing, group_count: 0 };
        }
        let n = effective as f32;
        let spacing = fixed_spacing.unwrap_or_else(|| safe_div_f32(available * SPACING_SHARE, n)).max(0.0);
        let width = fixed_width.unwrap_or_else(|| safe_div_f32(available, n) - spacing).max(0.0);
        Self { displayed, effective, width, spacing, group_spacing, group_count: 0 }
    }

    /// Trailing empty slots appended to satisfy the minimum slot count.
    pub fn placeholder_count(&self) -> usize {
        self.effective.saturating_sub(self.displayed)
    }

    /// Distance between the left edges of two neighbouring slots.
    pub fn stride(&self) -> f32 {
        self.width + self.spacing
    }

    /// Left edge of slot `index`.
    #[inline]
    pub fn x(&self, index: usize) -> f32 {
        index as f32 * self.stride()
    }

    /// Left edge of flattened slot `index` belonging to group `group`.
    #[inline]
    pub fn grouped_x(&self, group: usize, index: usize) -> f32 {
        self.x(index) + self.spacing / 2.0 + group as f32 * self.group_spacing
    }

    /// Width covered by `slots` bars without trailing spacing.
    pub fn content_width(&self, slots: usize) -> f32 {
        let w = self.stride() * slots as f32 - self.spacing;
        if w.is_finite() { w.max(0.0) } else { 0.0 }
    }
}
