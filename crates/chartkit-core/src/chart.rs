// File: crates/chartkit-core/src/chart.rs
// Summary: Chart instance: owns entries, config and the current bars; drives updates, touches and drawing.
// Notes:
// - Single-threaded and event driven. Each public mutation is one discrete event.
// - Time always comes from the caller; nothing here reads a clock except `Chart::new` for `today`.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::animation::{AnimationController, AnimationEvent, AnimationRequest};
use crate::axis::{self, AvgLine, XLabel, YTick, AVG_DASH};
use crate::backend::{Canvas, TextMeasure};
use crate::bar::{Bar, BarId};
use crate::builder::{BarLayout, SeriesBuilder};
use crate::config::{secs, ChartConfig, ChartOption};
use crate::geometry::{Point, Rect, Size};
use crate::kind::kind_for;
use crate::layout::ChartFrame;
use crate::line::LinePlot;
use crate::reconcile::{fresh, reconcile, Reconciliation};
use crate::selection::{SelectionChange, SelectionController};
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{HEIGHT, WIDTH};
use crate::view::ScrollState;

/// Alpha factor applied to the selected bar.
pub const SELECTED_ALPHA: f32 = 0.5;
const INDICATOR_ALPHA: f32 = 0.4;

/// Host callbacks. All methods default to no-ops.
pub trait ChartDelegate {
    fn did_select(&mut self, _bar: &Bar) {}
    fn animation_did_start(&mut self, _bar: &Bar) {}
    fn animation_did_stop(&mut self, _bar: &Bar) {}
}

pub struct Chart {
    size: Size,
    config: ChartConfig,
    theme: Theme,
    series: Series,
    layout: BarLayout,
    line: Option<LinePlot>,
    today: NaiveDate,
    animations: AnimationController,
    selection: SelectionController,
    scroll: ScrollState,
    delegate: Option<Box<dyn ChartDelegate>>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(Size::new(WIDTH, HEIGHT))
    }
}

impl Chart {
    pub fn new(size: Size) -> Self {
        Self::with_config(size, ChartConfig::default())
    }

    pub fn with_config(size: Size, config: ChartConfig) -> Self {
        let mut animations = AnimationController::new(config.easing);
        animations.enabled = config.animations_enabled;
        let mut chart = Self {
            size,
            selection: SelectionController::new(config.mark_selected),
            config,
            theme: Theme::default(),
            series: Series::default(),
            layout: BarLayout::default(),
            line: None,
            today: chrono::Local::now().date_naive(),
            animations,
            scroll: ScrollState::default(),
            delegate: None,
        };
        chart.relayout();
        chart
    }

    // ---- configuration ----------------------------------------------------------

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Apply `options` on top of the current config and relayout without animating.
    pub fn set_options(&mut self, options: &[ChartOption], now: Instant) -> Vec<AnimationEvent> {
        let next = self.config.with_options(options);
        self.set_config(next, now)
    }

    pub fn set_config(&mut self, config: ChartConfig, _now: Instant) -> Vec<AnimationEvent> {
        self.animations.easing = config.easing;
        self.animations.enabled = config.animations_enabled;
        self.selection.enabled = config.mark_selected;
        if !config.mark_selected {
            self.selection.clear();
        }
        self.config = config;
        self.snap_relayout()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.relayout();
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn ChartDelegate>) {
        self.delegate = Some(delegate);
    }

    /// Date labelled "Today" on line charts.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
        self.relayout();
    }

    // ---- entries ----------------------------------------------------------------

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Initial build: every bar grows from its collapsed frame.
    pub fn set_entries(&mut self, series: Series, now: Instant) -> Vec<AnimationEvent> {
        log::debug!("set_entries: {:?} x{}", series.series_type(), series.len());
        let previous = self.replace_series(series);
        let duration = self.config.duration();
        self.present(&previous, None, duration, now)
    }

    /// Replace the entries and animate from the previous bars over `duration` seconds.
    pub fn update_entries(&mut self, series: Series, duration: f64, now: Instant) -> Vec<AnimationEvent> {
        log::debug!("update_entries: {:?} x{} over {:.2}s", series.series_type(), series.len(), duration);
        let previous = self.replace_series(series);
        self.present(&previous, Some(&previous), secs(duration), now)
    }

    fn replace_series(&mut self, series: Series) -> Vec<Bar> {
        self.series = series;
        let previous = std::mem::take(&mut self.layout.bars);
        self.relayout();
        let bars = &self.layout.bars;
        if self.selection.retain(|id| bars.iter().any(|b| b.id == id && !b.is_placeholder())) {
            log::debug!("selection cleared: bar no longer present");
        }
        previous
    }

    /// Cancel tracks of vanished bars and schedule transitions for the current ones.
    fn present(&mut self, old: &[Bar], matched_against: Option<&[Bar]>, duration: Duration, now: Instant) -> Vec<AnimationEvent> {
        let current = std::mem::take(&mut self.layout.bars);
        let plan: Reconciliation<'_> = match matched_against {
            Some(previous) => reconcile(previous, &current, self.config.match_policy),
            None => fresh(&current),
        };
        log::debug!(
            "reconciled {} bars: {} matched, {} removed",
            plan.matches.len(),
            plan.matched_count(),
            plan.removed.len()
        );

        let alive: HashSet<BarId> = current.iter().map(|b| b.id).collect();
        let mut events = Vec::new();
        for gone in old.iter().filter(|b| !alive.contains(&b.id)) {
            events.extend(self.animations.cancel(gone.id));
        }
        let delay = self.config.delay();
        for m in &plan.matches {
            let request = AnimationRequest { id: m.current.id, from: m.from_rect(), to: m.to_rect(), duration, delay };
            events.extend(self.animations.submit(request, now));
        }
        self.layout.bars = current;
        self.dispatch(&events, old);
        events
    }

    // ---- geometry ---------------------------------------------------------------

    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the view. In-flight transitions are cancelled and bars snap to the new layout.
    pub fn resize(&mut self, size: Size, _now: Instant) -> Vec<AnimationEvent> {
        log::debug!("resize to {:.0}x{:.0}", size.width, size.height);
        self.size = size;
        self.snap_relayout()
    }

    fn snap_relayout(&mut self) -> Vec<AnimationEvent> {
        let events = self.animations.cancel_all();
        self.relayout();
        let bars = self.layout.bars.clone();
        self.dispatch(&events, &bars);
        events
    }

    fn relayout(&mut self) {
        let builder = SeriesBuilder::new(&self.config, &self.theme);
        self.layout = builder.build(&self.series, self.size);
        self.line = builder.build_line(&self.series, self.size, self.today);
        self.scroll.clamp_to(&self.layout.frame, self.config.scroll_width_inset);
    }

    pub fn bars(&self) -> &[Bar] {
        &self.layout.bars
    }

    pub fn bar(&self, id: BarId) -> Option<&Bar> {
        self.layout.bar(id)
    }

    pub fn layout(&self) -> &BarLayout {
        &self.layout
    }

    pub fn frame(&self) -> &ChartFrame {
        &self.layout.frame
    }

    pub fn line(&self) -> Option<&LinePlot> {
        self.line.as_ref()
    }

    pub fn y_ticks(&self) -> Vec<YTick> {
        axis::y_ticks(&self.series, &self.config, self.layout.frame.grid)
    }

    pub fn avg_line(&self) -> Option<AvgLine> {
        let scale = self.layout.scale?;
        axis::avg_line(&self.series, &self.config, &self.layout.frame, &scale)
    }

    pub fn x_labels(&self, measure: &dyn TextMeasure) -> Vec<XLabel> {
        let Some(kind) = kind_for(self.series.series_type()) else { return Vec::new() };
        axis::x_labels(kind, &self.series, &self.layout.slots, &self.layout.frame, &self.config, measure)
    }

    /// Frame currently on screen for `id`: mid-transition or final.
    pub fn presented_rect(&self, id: BarId, now: Instant) -> Option<Rect> {
        let bar = self.bar(id)?;
        Some(self.animations.presented(id, now).unwrap_or(bar.rect))
    }

    pub fn is_animating(&self) -> bool {
        !self.animations.is_idle()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.animations.next_deadline()
    }

    // ---- time -------------------------------------------------------------------

    /// Advance animations to `now` and report lifecycle events to the delegate.
    pub fn tick(&mut self, now: Instant) -> Vec<AnimationEvent> {
        let events = self.animations.tick(now);
        if !events.is_empty() {
            let bars = self.layout.bars.clone();
            self.dispatch(&events, &bars);
        }
        events
    }

    /// Forward events to the delegate. Ids are looked up in the current bars, then in `fallback`.
    fn dispatch(&mut self, events: &[AnimationEvent], fallback: &[Bar]) {
        let Some(delegate) = self.delegate.as_mut() else { return };
        for event in events {
            let id = event.id();
            let bar = self.layout.bars.iter().chain(fallback).find(|b| b.id == id);
            let Some(bar) = bar else { continue };
            log::trace!("animation {:?}", event);
            match event {
                AnimationEvent::Started(_) => delegate.animation_did_start(bar),
                AnimationEvent::Stopped(_) => delegate.animation_did_stop(bar),
            }
        }
    }

    // ---- interaction ------------------------------------------------------------

    /// Bar under a view-space point, accounting for the scroll offset.
    /// Placeholders and bars scrolled out of view are never hit.
    pub fn hit_test(&self, point: Point) -> Option<BarId> {
        let p = self.scroll.to_content(point);
        let frame = &self.layout.frame;
        self.layout
            .bars
            .iter()
            .filter(|b| !b.is_placeholder() && self.scroll.is_visible(frame, &b.hit_rect()))
            .find(|b| b.hit_rect().contains(p))
            .map(|b| b.id)
    }

    pub fn handle_touch(&mut self, point: Point) -> SelectionChange {
        let hit = self.hit_test(point);
        self.select(hit)
    }

    /// Feed a hit-test result into the selection state machine.
    pub fn select(&mut self, hit: Option<BarId>) -> SelectionChange {
        let change = self.selection.handle_hit(hit);
        if let SelectionChange::Selected(id) = change {
            log::debug!("selected bar {}", id);
            if let (Some(delegate), Some(bar)) = (self.delegate.as_mut(), self.layout.bars.iter().find(|b| b.id == id)) {
                delegate.did_select(bar);
            }
        }
        change
    }

    pub fn selected(&self) -> Option<BarId> {
        self.selection.selected()
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Scroll horizontally by a drag of `dx` pixels. Returns whether the offset moved.
    pub fn pan_by(&mut self, dx: f32) -> bool {
        self.scroll.pan_by_pixels(dx, &self.layout.frame, self.config.scrollable, self.config.scroll_width_inset)
    }

    // ---- drawing ----------------------------------------------------------------

    /// Draw the chart as presented at `now`. The caller clears the background.
    pub fn render(&self, canvas: &mut dyn Canvas, measure: &dyn TextMeasure, now: Instant) {
        if let Some(line) = &self.line {
            self.render_line(canvas, measure, line);
            return;
        }
        if self.series.is_empty() {
            return;
        }
        let dx = -self.scroll.offset;
        let frame = &self.layout.frame;
        let label_color = self.theme.axis_label;

        if let Some(avg) = self.avg_line() {
            let pts = [Point::new(avg.start_x + dx, avg.y), Point::new(avg.end_x + dx, avg.y)];
            canvas.stroke_line(&pts, self.theme.avg_line, 1.0, Some(&AVG_DASH));
            canvas.draw_text(&avg.label, Point::new(avg.label_x + dx, avg.label_y), self.config.y_axis_font_size, self.theme.avg_line);
        }

        let font = self.config.y_axis_font_size;
        for tick in self.y_ticks() {
            let label_y = (tick.y - font / 2.0).max(0.0);
            canvas.draw_text(&tick.label, Point::new(frame.grid.x + dx, label_y), font, label_color);
            if self.config.show_horizontal_lines {
                let pts = [Point::new(frame.plot.x + dx, tick.y), Point::new(frame.grid.right() + dx, tick.y)];
                canvas.stroke_line(&pts, self.theme.horizontal_line, 1.0, None);
            }
        }

        for bar in &self.layout.bars {
            let presented = self.animations.presented(bar.id, now).unwrap_or(bar.rect);
            if !self.scroll.is_visible(frame, &bar.track) && !self.scroll.is_visible(frame, &presented) {
                continue;
            }
            if let Some(container) = self.config.container_color {
                let track = self.scroll.to_view(&bar.track);
                canvas.fill_rounded_rect(track, container, bar.effective_corner_radius(&track));
            }
            let rect = self.scroll.to_view(&presented);
            if rect.height <= 0.0 || rect.width <= 0.0 || bar.color.is_transparent() {
                continue;
            }
            let color = if self.selection.is_selected(bar.id) { bar.color.scale_alpha(SELECTED_ALPHA) } else { bar.color };
            canvas.fill_rounded_rect(rect, color, bar.effective_corner_radius(&rect));
        }

        let font = self.config.x_axis_font_size;
        for label in self.x_labels(measure) {
            let w = measure.measure_text_width(&label.text, font);
            let x = label.rect.x + (label.rect.width - w) / 2.0 + dx;
            canvas.draw_text(&label.text, Point::new(x, label.rect.y), font, label_color);
        }

        if self.config.scrollable && self.config.show_scroll_indicator {
            if let Some(thumb) = self.scroll.indicator_rect(frame, self.config.scroll_width_inset) {
                canvas.fill_rounded_rect(thumb, label_color.scale_alpha(INDICATOR_ALPHA), thumb.height / 2.0);
            }
        }
    }

    fn render_line(&self, canvas: &mut dyn Canvas, measure: &dyn TextMeasure, line: &LinePlot) {
        canvas.stroke_line(&line.vertices, self.theme.line_stroke, line.line_width, None);
        for (top, bottom) in &line.guides {
            canvas.stroke_line(&[*top, *bottom], self.theme.line_grid, 1.0, None);
        }
        for marker in line.marker_rects() {
            canvas.fill_rounded_rect(marker, self.theme.line_stroke, marker.width / 2.0);
        }
        for label in &line.labels {
            let w = measure.measure_text_width(&label.text, line.label_font_size);
            let origin = Point::new(label.center.x - w / 2.0, label.center.y - line.label_font_size / 2.0);
            let color = if label.is_today { self.theme.line_stroke } else { self.theme.line_label };
            canvas.draw_text(&label.text, origin, line.label_font_size, color);
        }
    }
}
