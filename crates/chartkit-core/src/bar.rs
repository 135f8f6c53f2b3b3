// File: crates/chartkit-core/src/bar.rs
// Summary: Drawable bar records with stable slot identity.
// Notes:
// - Identity is the slot position (plus group / range side), never the entry content.
// - Two bars compare equal iff their identities match.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geometry::Rect;
use crate::series::Entry;
use crate::theme::Rgba;

/// Which half of a range pair a bar draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RangeSide {
    /// From the entry's value down to its min.
    Min,
    /// From the entry's value up to its max.
    Max,
}

/// Stable identity of a bar across rebuilds.
///
/// Simple bars use `slot` only. Grouped bars carry the owning group. Both bars of
/// a range pair share one `slot` and differ by `side`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BarId {
    pub group: Option<usize>,
    pub slot: usize,
    pub side: Option<RangeSide>,
}

impl BarId {
    pub const fn slot(slot: usize) -> Self {
        Self { group: None, slot, side: None }
    }
    pub const fn grouped(group: usize, slot: usize) -> Self {
        Self { group: Some(group), slot, side: None }
    }
    pub const fn range(slot: usize, side: RangeSide) -> Self {
        Self { group: None, slot, side: Some(side) }
    }

    pub fn is_max(&self) -> bool {
        self.side == Some(RangeSide::Max)
    }
}

impl fmt::Display for BarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.group, self.side) {
            (Some(g), _) => write!(f, "g{}:{}", g, self.slot),
            (None, Some(RangeSide::Min)) => write!(f, "{}:min", self.slot),
            (None, Some(RangeSide::Max)) => write!(f, "{}:max", self.slot),
            (None, None) => write!(f, "{}", self.slot),
        }
    }
}

/// Edge the bar grows from when it animates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Bottom,
    Top,
}

/// One drawable bar: identity, source entry, geometry and style.
#[derive(Clone, Debug)]
pub struct Bar {
    pub id: BarId,
    /// `None` for placeholder slots.
    pub entry: Option<Entry>,
    /// Filled bar geometry.
    pub rect: Rect,
    /// Full-height column behind the bar; the hit-test target.
    pub track: Rect,
    pub color: Rgba,
    pub anchor: Anchor,
    pub corner_radius: f32,
}

impl Bar {
    pub fn is_placeholder(&self) -> bool {
        self.entry.is_none()
    }

    pub fn value(&self) -> Option<f64> {
        self.entry.as_ref().map(|e| e.value)
    }

    /// Touch target: the full column, or just the bar for range halves sharing a column.
    pub fn hit_rect(&self) -> Rect {
        if self.id.side.is_some() { self.rect } else { self.track }
    }

    /// Zero-height frame at the anchor edge; entering bars grow from here.
    pub fn collapsed_rect(&self) -> Rect {
        let y = match self.anchor {
            Anchor::Bottom => self.rect.bottom(),
            Anchor::Top => self.rect.y,
        };
        Rect::from_xywh(self.rect.x, y, self.rect.width, 0.0)
    }

    /// Corner radius clamped to half the height so short bars stay well-formed.
    pub fn effective_corner_radius(&self, rect: &Rect) -> f32 {
        self.corner_radius.min(rect.height / 2.0).min(rect.width / 2.0).max(0.0)
    }
}

impl PartialEq for Bar {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Bar {}

impl Hash for Bar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
