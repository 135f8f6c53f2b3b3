// File: crates/chartkit-render-skia/src/canvas.rs
// Summary: `chartkit_core::Canvas` adapter over a borrowed Skia canvas.

use chartkit_core::{Canvas, Point, Rect, Rgba};
use skia_safe as skia;

use crate::text::TextShaper;

pub fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_xywh(r.x, r.y, r.width, r.height)
}

pub struct SkiaCanvas<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    /// When false, text calls are dropped (keeps pixel output independent of installed fonts).
    pub draw_labels: bool,
}

impl<'a> SkiaCanvas<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper, draw_labels: true }
    }
}

impl Canvas for SkiaCanvas<'_> {
    fn clear(&mut self, color: Rgba) {
        self.canvas.clear(to_color(color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, color: Rgba, corner_radius: f32) {
        if !rect.is_finite() || color.is_transparent() {
            return;
        }
        let mut paint = skia::Paint::default();
        paint.set_color(to_color(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        let r = corner_radius.max(0.0);
        self.canvas.draw_round_rect(to_rect(rect), r, r, &paint);
    }

    fn stroke_line(&mut self, points: &[Point], color: Rgba, width: f32, dash: Option<&[f32]>) {
        let Some((first, rest)) = points.split_first() else { return };
        if rest.is_empty() || color.is_transparent() {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_color(to_color(color));
        stroke.set_stroke_width(width);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_join(skia::paint::Join::Round);
        if let Some(intervals) = dash.filter(|d| d.len() >= 2) {
            stroke.set_path_effect(skia::PathEffect::dash(intervals, 0.0));
        }
        self.canvas.draw_path(&path, &stroke);
    }

    fn draw_text(&mut self, text: &str, origin: Point, font_size: f32, color: Rgba) {
        if !self.draw_labels || text.is_empty() {
            return;
        }
        self.shaper.draw_top_left(self.canvas, text, origin.x, origin.y, font_size, to_color(color));
    }
}
