// File: crates/chartkit-core/src/backend.rs
// Summary: Collaborator traits the core calls into (text metrics, drawing), plus headless stand-ins.
// Notes:
// - Implementations live in renderer crates; the core never touches a graphics API.
// - `FixedWidthMeasure` and `RecordingCanvas` are used for headless layout and tests.

use crate::geometry::{Point, Rect};
use crate::theme::Rgba;

/// Measures the advance width of a single-line label.
pub trait TextMeasure {
    fn measure_text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Drawing surface the chart renders onto.
pub trait Canvas {
    fn clear(&mut self, color: Rgba);
    fn fill_rounded_rect(&mut self, rect: Rect, color: Rgba, corner_radius: f32);
    /// Stroke a polyline. `dash` is an on/off interval pattern.
    fn stroke_line(&mut self, points: &[Point], color: Rgba, width: f32, dash: Option<&[f32]>);
    /// Draw a single-line label with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font_size: f32, color: Rgba);
}

/// Every character advances by `font_size * ratio`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedWidthMeasure {
    pub ratio: f32,
}

impl Default for FixedWidthMeasure {
    fn default() -> Self {
        Self { ratio: 0.6 }
    }
}

impl TextMeasure for FixedWidthMeasure {
    fn measure_text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.ratio
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    RoundedRect { rect: Rect, color: Rgba, radius: f32 },
    Line { points: Vec<Point>, color: Rgba, width: f32, dash: Option<Vec<f32>> },
    Text { text: String, origin: Point, font_size: f32, color: Rgba },
}

/// Canvas that records every call instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Rgba)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::RoundedRect { rect, color, .. } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn dashed_lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { dash: Some(_), .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, color: Rgba, corner_radius: f32) {
        self.commands.push(DrawCommand::RoundedRect { rect, color, radius: corner_radius });
    }

    fn stroke_line(&mut self, points: &[Point], color: Rgba, width: f32, dash: Option<&[f32]>) {
        self.commands.push(DrawCommand::Line { points: points.to_vec(), color, width, dash: dash.map(<[f32]>::to_vec) });
    }

    fn draw_text(&mut self, text: &str, origin: Point, font_size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), origin, font_size, color });
    }
}
