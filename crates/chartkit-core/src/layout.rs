// File: crates/chartkit-core/src/layout.rs
// Summary: Chart frame: bar container, x-axis band, grid area and scrollable content width.
// Notes:
// - All rects are in content coordinates; scrolling shifts them left by `ScrollState::offset`.

use crate::config::ChartConfig;
use crate::geometry::{Rect, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartFrame {
    pub view: Size,
    /// Bar container. Bars are laid out from its left edge.
    pub plot: Rect,
    /// Band under the plot holding the x-axis labels.
    pub x_axis: Rect,
    /// Area behind the plot holding y labels, horizontal lines and the average line.
    pub grid: Rect,
    /// Total scrollable width.
    pub content_width: f32,
}

impl ChartFrame {
    /// Left edge of the bar container: y-axis labels and margin, then the left inset.
    pub fn plot_x(config: &ChartConfig) -> f32 {
        let axis = if config.show_y_axis { config.left_spacing + config.container_left_margin } else { 0.0 };
        axis + config.insets.left
    }

    fn avg_band(config: &ChartConfig) -> f32 {
        if config.show_avg_line { config.right_avg_spacing } else { 0.0 }
    }

    /// Width the bars may fill without scrolling.
    pub fn available_width(view: Size, config: &ChartConfig) -> f32 {
        (view.width - Self::plot_x(config) - Self::avg_band(config) - config.insets.right).max(0.0)
    }

    /// Frame for a view of `view` whose bars need `bars_width` pixels.
    pub fn compute(view: Size, config: &ChartConfig, bars_width: f32) -> Self {
        let plot_x = Self::plot_x(config);
        let top = config.insets.top;
        let band = if config.show_x_axis { config.x_axis_spacing.max(0.0) } else { 0.0 };
        let plot_w = bars_width.max(Self::available_width(view, config));
        let plot_h = (view.height - config.insets.vsum() - band).max(0.0);
        let avg = Self::avg_band(config);

        let plot = Rect::from_xywh(plot_x, top, plot_w, plot_h);
        let x_axis = Rect::from_xywh(plot_x, plot.bottom(), plot_w, band);
        let grid = Rect::from_xywh(config.insets.left, top, plot_x + plot_w + avg - config.insets.left, plot_h);
        let content_width = plot_x + plot_w + avg + config.insets.right;
        Self { view, plot, x_axis, grid, content_width }
    }

    /// Largest horizontal scroll offset.
    pub fn max_scroll(&self, width_inset: f32) -> f32 {
        (self.content_width - self.view.width + width_inset).max(0.0)
    }
}
