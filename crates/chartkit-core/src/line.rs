// File: crates/chartkit-core/src/line.rs
// Summary: Seven-day line plot: point padding, column placement and weekday labels.
// Notes:
// - Always exactly `POINT_COUNT` points once at least one sample exists.
// - With `pin_minimum_to_center`, points holding the minimum value sit at mid-height.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::series::LinePoint;

pub const POINT_COUNT: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    pub margin: f32,
    pub top_border: f32,
    pub bottom_border: f32,
    pub point_diameter: f32,
    pub line_width: f32,
    pub label_font_size: f32,
    pub pin_minimum_to_center: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            margin: 8.0,
            top_border: 15.0,
            bottom_border: 20.0,
            point_diameter: 6.0,
            line_width: 2.0,
            label_font_size: 11.0,
            pin_minimum_to_center: true,
        }
    }
}

/// Sort by date, keep the most recent `POINT_COUNT` samples and, when fewer exist,
/// prepend copies of the earliest kept value on each preceding calendar day.
pub fn pad_week(points: &[LinePoint]) -> Vec<LinePoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.date);
    let skip = sorted.len().saturating_sub(POINT_COUNT);
    let mut kept: Vec<LinePoint> = sorted.into_iter().skip(skip).collect();

    let Some(&earliest) = kept.first() else { return kept };
    let mut padding = Vec::with_capacity(POINT_COUNT - kept.len());
    let mut day = earliest.date;
    while padding.len() + kept.len() < POINT_COUNT {
        let Some(prev) = day.pred_opt() else { break };
        day = prev;
        padding.push(LinePoint::new(earliest.value, day));
    }
    padding.reverse();
    padding.append(&mut kept);
    padding
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineLabel {
    pub text: String,
    pub center: Point,
    pub is_today: bool,
}

/// Resolved geometry of a line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePlot {
    pub points: Vec<LinePoint>,
    pub vertices: Vec<Point>,
    /// Vertical guide per column as (top, bottom).
    pub guides: Vec<(Point, Point)>,
    pub labels: Vec<LineLabel>,
    pub point_diameter: f32,
    pub line_width: f32,
    pub label_font_size: f32,
}

impl LinePlot {
    /// Lay out `points` inside `bounds`. Returns `None` for an empty input.
    pub fn compute(points: &[LinePoint], bounds: Rect, options: &LineOptions, today: NaiveDate) -> Option<Self> {
        let points = pad_week(points);
        if points.is_empty() {
            return None;
        }
        let max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
        let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);

        let vertices = points
            .iter()
            .enumerate()
            .map(|(i, p)| Point::new(column_x(bounds, options, i), column_y(bounds, options, p.value, min, max)))
            .collect();
        let guides = (0..POINT_COUNT)
            .map(|i| {
                let x = column_x(bounds, options, i);
                (Point::new(x, bounds.y + options.top_border), Point::new(x, bounds.bottom() - options.bottom_border))
            })
            .collect();
        let label_y = bounds.bottom() - options.bottom_border / 2.0;
        let labels = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let is_today = p.date == today;
                LineLabel {
                    text: weekday_label(p.date, today),
                    center: Point::new(column_x(bounds, options, i), label_y),
                    is_today,
                }
            })
            .collect();

        Some(Self {
            points,
            vertices,
            guides,
            labels,
            point_diameter: options.point_diameter,
            line_width: options.line_width,
            label_font_size: options.label_font_size,
        })
    }

    /// Square bounding each point marker.
    pub fn marker_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        let d = self.point_diameter;
        self.vertices.iter().map(move |v| Rect::from_xywh(v.x - d / 2.0, v.y - d / 2.0, d, d))
    }
}

/// Centre x of column `col`; seven columns span the width minus the margins.
pub fn column_x(bounds: Rect, options: &LineOptions, col: usize) -> f32 {
    let graph_width = bounds.width - options.margin * 2.0 - 4.0;
    let spacing = graph_width / (POINT_COUNT - 1) as f32;
    bounds.x + col as f32 * spacing + options.margin + 2.0
}

/// Pixel y for `value`, scaled linearly against `max` from the bottom of the graph.
pub fn column_y(bounds: Rect, options: &LineOptions, value: f64, min: f64, max: f64) -> f32 {
    let graph_height = bounds.height - options.top_border - options.bottom_border;
    let top = bounds.y + options.top_border;
    if options.pin_minimum_to_center && value == min {
        return top + graph_height * 0.5;
    }
    let ratio = value / max;
    let y = if ratio.is_finite() { ratio as f32 * graph_height } else { 0.5 * graph_height };
    top + graph_height - y
}

/// `Today` for the host's current date, otherwise the abbreviated weekday.
pub fn weekday_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today { "Today".to_string() } else { date.format("%a").to_string() }
}
