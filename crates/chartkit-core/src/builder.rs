// File: crates/chartkit-core/src/builder.rs
// Summary: Layout pipeline: slots -> frame -> value scale -> bars (or the line plot).
// Notes:
// - Pure: the same series, config and size always yield the same geometry.

use chrono::NaiveDate;

use crate::bar::{Bar, BarId};
use crate::config::ChartConfig;
use crate::geometry::{Rect, Size};
use crate::kind::{kind_for, BuildContext, ChartKind};
use crate::layout::ChartFrame;
use crate::line::LinePlot;
use crate::position::SlotLayout;
use crate::scale::ValueScale;
use crate::series::Series;
use crate::theme::Theme;

/// Result of one layout pass over a bar-style series.
#[derive(Clone, Debug, Default)]
pub struct BarLayout {
    pub slots: SlotLayout,
    pub frame: ChartFrame,
    pub scale: Option<ValueScale>,
    pub bars: Vec<Bar>,
}

impl BarLayout {
    pub fn bar(&self, id: BarId) -> Option<&Bar> {
        self.bars.iter().find(|b| b.id == id)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SeriesBuilder<'a> {
    pub config: &'a ChartConfig,
    pub theme: &'a Theme,
}

impl<'a> SeriesBuilder<'a> {
    pub fn new(config: &'a ChartConfig, theme: &'a Theme) -> Self {
        Self { config, theme }
    }

    pub fn kind(&self, series: &Series) -> Option<&'static dyn ChartKind> {
        kind_for(series.series_type())
    }

    pub fn scale(&self, series: &Series) -> ValueScale {
        ValueScale::new(series.domain(), self.config.use_min_max_range)
            .with_headroom(self.config.top_headroom, self.config.bottom_headroom)
    }

    /// Lay out `series` in a view of `view`. Line series yield a frame and no bars.
    pub fn build(&self, series: &Series, view: Size) -> BarLayout {
        let Some(kind) = self.kind(series) else {
            return BarLayout { frame: ChartFrame::compute(view, self.config, 0.0), ..BarLayout::default() };
        };
        let available = ChartFrame::available_width(view, self.config);
        let slots = kind.slot_layout(series, available, self.config);
        let content = kind.compute_content_size(series, &slots);
        let frame = ChartFrame::compute(view, self.config, content);
        let scale = self.scale(series);
        let ctx = BuildContext { config: self.config, theme: self.theme, slots, scale, plot: frame.plot };
        let bars = kind.build_bars(series, &ctx);
        log::trace!("built {} bars ({} slots, width {:.1}, spacing {:.1})", bars.len(), slots.effective, slots.width, slots.spacing);
        BarLayout { slots, frame, scale: Some(scale), bars }
    }

    /// Line plot inside the view minus insets. `None` unless `series` is a non-empty line series.
    pub fn build_line(&self, series: &Series, view: Size, today: NaiveDate) -> Option<LinePlot> {
        let Series::Line(points) = series else { return None };
        let insets = self.config.insets;
        let bounds = Rect::from_xywh(
            insets.left,
            insets.top,
            (view.width - insets.hsum()).max(0.0),
            (view.height - insets.vsum()).max(0.0),
        );
        LinePlot::compute(points, bounds, &self.config.line, today)
    }
}
