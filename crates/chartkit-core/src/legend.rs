// File: crates/chartkit-core/src/legend.rs
// Summary: Legend grid layout (color swatch + label per item, wrapped into rows).

use crate::backend::TextMeasure;
use crate::geometry::{safe_div_f32, Point, Rect};
use crate::theme::Rgba;

pub const SWATCH_DIAMETER: f32 = 10.0;
pub const ITEM_SPACING: f32 = 10.0;
pub const LABEL_SPACING: f32 = 14.0;
pub const ROW_SPACING: f32 = 20.0;
pub const FONT_SIZE: f32 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgba,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>, color: Rgba) -> Self {
        Self { label: label.into(), color }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub swatch: Rect,
    pub label_origin: Point,
    pub label: String,
    pub color: Rgba,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendLayout {
    pub items: Vec<LegendItem>,
    pub item_width: f32,
    pub per_row: usize,
    pub height: f32,
}

impl LegendLayout {
    /// Every item gets the width of the widest one; items fill rows left to right.
    pub fn compute(entries: &[LegendEntry], width: f32, measure: &dyn TextMeasure) -> Self {
        if entries.is_empty() {
            return Self::default();
        }
        let widest = entries
            .iter()
            .map(|e| measure.measure_text_width(&e.label, FONT_SIZE))
            .fold(0.0f32, f32::max);
        let item_width = SWATCH_DIAMETER + LABEL_SPACING + widest + ITEM_SPACING;
        let per_row = (safe_div_f32(width, item_width).floor() as usize).max(1);

        let items = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let x = item_width * (i % per_row) as f32;
                let y = ROW_SPACING * (i / per_row) as f32;
                LegendItem {
                    swatch: Rect::from_xywh(x, y, SWATCH_DIAMETER, SWATCH_DIAMETER),
                    label_origin: Point::new(x + SWATCH_DIAMETER + LABEL_SPACING, y),
                    label: e.label.clone(),
                    color: e.color,
                }
            })
            .collect();
        let rows = entries.len().div_ceil(per_row);
        Self { items, item_width, per_row, height: rows as f32 * ROW_SPACING }
    }
}
