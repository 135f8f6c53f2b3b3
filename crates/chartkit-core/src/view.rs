// File: crates/chartkit-core/src/view.rs
// Summary: Horizontal scroll state over the chart content.

use crate::geometry::{Point, Rect};
use crate::layout::ChartFrame;

/// Thickness of the scroll indicator, in pixels.
pub const INDICATOR_HEIGHT: f32 = 3.0;
const INDICATOR_MIN_WIDTH: f32 = 16.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f32,
}

impl ScrollState {
    /// Pan by a pointer delta in pixels (dragging right scrolls towards the start).
    /// Returns whether the offset changed.
    pub fn pan_by_pixels(&mut self, dx: f32, frame: &ChartFrame, scrollable: bool, width_inset: f32) -> bool {
        if !scrollable || !dx.is_finite() {
            return false;
        }
        let before = self.offset;
        self.offset = (self.offset - dx).clamp(0.0, frame.max_scroll(width_inset));
        self.offset != before
    }

    /// Re-clamp after the content or the view changed size.
    pub fn clamp_to(&mut self, frame: &ChartFrame, width_inset: f32) {
        self.offset = self.offset.clamp(0.0, frame.max_scroll(width_inset));
    }

    /// Content-space x interval currently on screen.
    pub fn visible_range(&self, frame: &ChartFrame) -> (f32, f32) {
        (self.offset, self.offset + frame.view.width)
    }

    pub fn to_content(&self, p: Point) -> Point {
        Point::new(p.x + self.offset, p.y)
    }

    pub fn to_view(&self, r: &Rect) -> Rect {
        r.translate(-self.offset, 0.0)
    }

    /// Whether a content-space rect overlaps the viewport.
    pub fn is_visible(&self, frame: &ChartFrame, r: &Rect) -> bool {
        let (lo, hi) = self.visible_range(frame);
        r.right() >= lo && r.x <= hi
    }

    /// View-space thumb showing which part of the content is on screen.
    /// `None` when everything fits.
    pub fn indicator_rect(&self, frame: &ChartFrame, width_inset: f32) -> Option<Rect> {
        let max = frame.max_scroll(width_inset);
        let view = frame.view.width;
        if !view.is_finite() || !max.is_finite() || max <= 0.0 || frame.content_width <= view {
            return None;
        }
        let thumb = (view * view / (frame.content_width + width_inset)).clamp(INDICATOR_MIN_WIDTH.min(view), view);
        let x = (self.offset / max).clamp(0.0, 1.0) * (view - thumb);
        let y = (frame.view.height - INDICATOR_HEIGHT).max(0.0);
        Some(Rect::from_xywh(x, y, thumb, INDICATOR_HEIGHT))
    }
}
