// File: crates/chartkit-core/src/axis.rs
// Summary: Y-axis ticks, the dashed average line and x-axis label placement.

use crate::backend::TextMeasure;
use crate::config::ChartConfig;
use crate::geometry::{safe_div, Rect};
use crate::grid::grid_fractions;
use crate::kind::ChartKind;
use crate::layout::ChartFrame;
use crate::position::SlotLayout;
use crate::scale::ValueScale;
use crate::series::Series;

/// Dash pattern of the average line.
pub const AVG_DASH: [f32; 2] = [4.0, 4.0];

#[derive(Clone, Debug, PartialEq)]
pub struct YTick {
    /// 0 at the top of the grid, 1 at the bottom.
    pub fraction: f64,
    pub value: i64,
    pub label: String,
    pub y: f32,
}

/// Number of entries the tick count is derived from: range charts count pairs.
fn entry_count(series: &Series) -> usize {
    match series {
        Series::Range(entries) => entries.len(),
        other => other.value_count(),
    }
}

/// Horizontal grid lines with their labels, spanning the same bounds as the bar scale.
/// Empty when the y axis is hidden or there is no data.
pub fn y_ticks(series: &Series, config: &ChartConfig, grid: Rect) -> Vec<YTick> {
    if !config.show_y_axis {
        return Vec::new();
    }
    let Some(domain) = series.domain() else { return Vec::new() };
    let scale = ValueScale::new(Some(domain), config.use_min_max_range)
        .with_headroom(config.top_headroom, config.bottom_headroom);
    let Some((min, max)) = scale.bounds() else { return Vec::new() };
    let gap = (max - min).ceil();

    grid_fractions(entry_count(series), domain.is_degenerate())
        .into_iter()
        .map(|fraction| {
            let value = ((1.0 - fraction) * gap) as i64 + min as i64;
            YTick {
                fraction,
                value,
                label: config.y_axis_format.format(value as f64),
                y: grid.y + fraction as f32 * grid.height,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct AvgLine {
    pub value: f64,
    pub y: f32,
    pub start_x: f32,
    pub end_x: f32,
    pub label: String,
    /// Top-left of the label, right of the plot.
    pub label_x: f32,
    pub label_y: f32,
}

pub fn avg_line(series: &Series, config: &ChartConfig, frame: &ChartFrame, scale: &ValueScale) -> Option<AvgLine> {
    if !config.show_avg_line {
        return None;
    }
    let values = series.domain_values();
    if values.is_empty() {
        return None;
    }
    let avg = safe_div(values.iter().sum(), values.len() as f64);
    let y = scale.to_px(avg, frame.plot.y, frame.plot.bottom());
    let start_x = config.insets.left + if config.show_y_axis { config.left_spacing } else { 0.0 };
    Some(AvgLine {
        value: avg,
        y,
        start_x,
        end_x: frame.grid.right(),
        label: config.y_axis_format.format(avg.round()),
        label_x: frame.grid.right() - config.right_avg_spacing,
        label_y: y - (config.y_axis_font_size + 2.0),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct XLabel {
    pub index: usize,
    pub text: String,
    /// Box the label is centred in.
    pub rect: Rect,
}

/// Visible x-axis labels. With auto-formatting, every `gap`-th label is kept so the
/// widest label fits.
pub fn x_labels(
    kind: &dyn ChartKind,
    series: &Series,
    slots: &SlotLayout,
    frame: &ChartFrame,
    config: &ChartConfig,
    measure: &dyn TextMeasure,
) -> Vec<XLabel> {
    let count = kind.label_count(series).min(config.max_visible_count.unwrap_or(usize::MAX));
    if !config.show_x_axis || count == 0 {
        return Vec::new();
    }
    let mut gap = 1;
    if config.auto_format_x_axis {
        let widest = (0..count)
            .filter_map(|i| kind.label(series, i))
            .map(|l| measure.measure_text_width(l, config.x_axis_font_size))
            .fold(0.0f32, f32::max);
        if widest > 0.0 {
            let max_labels = safe_div(frame.x_axis.width as f64, widest as f64) as usize;
            if max_labels == 0 {
                return Vec::new();
            }
            gap = count / max_labels + 1;
        }
    }

    let band = frame.x_axis.height;
    (0..count)
        .step_by(gap)
        .filter_map(|i| {
            let text = kind.label(series, i)?;
            let x = frame.x_axis.x + kind.x_axis_position(series, slots, i);
            let rect = Rect::from_xywh(x, frame.x_axis.y + band / 3.0, kind.width_for_label(series, slots, i), band);
            Some(XLabel { index: i, text: text.to_string(), rect })
        })
        .collect()
}
