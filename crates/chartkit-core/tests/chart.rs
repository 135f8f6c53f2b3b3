// File: crates/chartkit-core/tests/chart.rs
// Purpose: Chart lifecycle: entry updates, delegate callbacks, resize, touches, scrolling and drawing.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chartkit_core::{
    AnimationEvent, Bar, BarId, Chart, ChartConfig, ChartDelegate, ChartOption, Entry, FixedWidthMeasure, LinePoint,
    Point, RecordingCanvas, Rect, Rgba, SelectionChange, Series, Size,
};
use chrono::NaiveDate;

const BLUE: Rgba = Rgba::from_argb(255, 0, 0, 255);

fn bars(values: &[f64]) -> Series {
    Series::Bars(values.iter().enumerate().map(|(i, v)| Entry::new(*v, format!("D{i}"), BLUE)).collect())
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl Recorder {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl ChartDelegate for Recorder {
    fn did_select(&mut self, bar: &Bar) {
        self.0.borrow_mut().push(format!("select {}", bar.id));
    }
    fn animation_did_start(&mut self, bar: &Bar) {
        self.0.borrow_mut().push(format!("start {}", bar.id));
    }
    fn animation_did_stop(&mut self, bar: &Bar) {
        self.0.borrow_mut().push(format!("stop {}", bar.id));
    }
}

fn recorded_chart(config: ChartConfig) -> (Chart, Recorder) {
    let mut chart = Chart::with_config(Size::new(390.0, 260.0), config);
    let recorder = Recorder::default();
    chart.set_delegate(Box::new(recorder.clone()));
    (chart, recorder)
}

fn still() -> ChartConfig {
    ChartConfig::default().with_options(&[ChartOption::AnimationsEnabled(false)])
}

fn close(a: Rect, b: Rect) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3 && (a.width - b.width).abs() < 1e-3 && (a.height - b.height).abs() < 1e-3
}

#[test]
fn initial_build_animates_every_bar() {
    let (mut chart, recorder) = recorded_chart(ChartConfig::default());
    let t0 = Instant::now();
    let events = chart.set_entries(bars(&[1.0, 2.0, 3.0]), t0);

    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| matches!(e, AnimationEvent::Started(_))));
    assert_eq!(recorder.take(), vec!["start 0", "start 1", "start 2"]);
    assert!(chart.is_animating());
    // bars grow from zero height
    let grown = chart.presented_rect(BarId::slot(2), t0).unwrap();
    assert!(grown.height.abs() < 1e-3);

    let stops = chart.tick(t0 + Duration::from_secs(1));
    assert_eq!(stops.len(), 3);
    assert_eq!(recorder.take().len(), 3);
    assert!(!chart.is_animating());
    assert_eq!(chart.next_deadline(), None);
}

#[test]
fn disabled_animations_pair_events() {
    let (mut chart, recorder) = recorded_chart(still());
    let events = chart.set_entries(bars(&[1.0, 2.0]), Instant::now());
    assert_eq!(events.len(), 4);
    assert!(!chart.is_animating());
    assert_eq!(recorder.take(), vec!["start 0", "stop 0", "start 1", "stop 1"]);
}

#[test]
fn same_entries_give_same_bars() {
    let mut chart = Chart::with_config(Size::new(390.0, 260.0), still());
    let now = Instant::now();
    chart.set_entries(bars(&[4.0, 8.0, 6.0]), now);
    let first: Vec<Rect> = chart.bars().iter().map(|b| b.rect).collect();
    chart.set_entries(bars(&[4.0, 8.0, 6.0]), now);
    let second: Vec<Rect> = chart.bars().iter().map(|b| b.rect).collect();
    assert_eq!(first, second);
}

#[test]
fn update_starts_from_the_previous_frame() {
    let mut chart = Chart::new(Size::new(390.0, 260.0));
    let t0 = Instant::now();
    chart.set_entries(bars(&[10.0, 20.0, 30.0]), t0);
    let t1 = t0 + Duration::from_secs(2);
    chart.tick(t1);
    let before = chart.bar(BarId::slot(0)).unwrap().rect;

    chart.update_entries(bars(&[30.0, 20.0, 10.0]), 1.0, t1);
    let after = chart.bar(BarId::slot(0)).unwrap().rect;
    assert!(after.height > before.height);
    assert!(close(chart.presented_rect(BarId::slot(0), t1).unwrap(), before));

    let mid = chart.presented_rect(BarId::slot(0), t1 + Duration::from_millis(500)).unwrap();
    assert!(mid.height > before.height && mid.height < after.height);

    chart.tick(t1 + Duration::from_secs(1));
    assert!(close(chart.presented_rect(BarId::slot(0), t1 + Duration::from_secs(1)).unwrap(), after));
    // the duration argument does not leak into the config
    assert_eq!(chart.config().animation_duration, 0.5);
}

#[test]
fn shrinking_update_cancels_vanished_bars() {
    let (mut chart, recorder) = recorded_chart(ChartConfig::default());
    let t0 = Instant::now();
    chart.set_entries(bars(&[1.0, 2.0, 3.0]), t0);
    recorder.take();

    let events = chart.update_entries(bars(&[1.0]), 0.5, t0 + Duration::from_millis(100));
    assert!(events.contains(&AnimationEvent::Stopped(BarId::slot(2))));
    assert_eq!(chart.bars().len(), 1);
    // the delegate still hears about the bar that disappeared
    assert!(recorder.take().contains(&"stop 2".to_string()));
}

#[test]
fn resize_cancels_and_snaps() {
    let mut chart = Chart::new(Size::new(390.0, 260.0));
    let t0 = Instant::now();
    chart.set_entries(bars(&[1.0, 2.0, 3.0]), t0);
    assert!(chart.is_animating());

    let events = chart.resize(Size::new(600.0, 300.0), t0 + Duration::from_millis(100));
    assert_eq!(events.len(), 3);
    assert!(!chart.is_animating());
    let bar = chart.bar(BarId::slot(1)).unwrap();
    assert_eq!(chart.presented_rect(bar.id, t0 + Duration::from_millis(100)), Some(bar.rect));
    assert_eq!(chart.frame().view, Size::new(600.0, 300.0));
}

#[test]
fn touches_toggle_selection() {
    let (mut chart, recorder) = recorded_chart(still());
    chart.set_entries(bars(&[5.0, 10.0, 15.0]), Instant::now());
    recorder.take();

    let target = chart.bar(BarId::slot(1)).unwrap().rect;
    let inside = Point::new(target.x + target.width / 2.0, target.y + target.height / 2.0);

    assert_eq!(chart.hit_test(inside), Some(BarId::slot(1)));
    assert_eq!(chart.handle_touch(inside), SelectionChange::Selected(BarId::slot(1)));
    assert_eq!(chart.selected(), Some(BarId::slot(1)));
    assert_eq!(chart.handle_touch(inside), SelectionChange::Deselected(BarId::slot(1)));
    assert_eq!(chart.selected(), None);
    assert_eq!(chart.handle_touch(Point::new(-50.0, -50.0)), SelectionChange::Unchanged);
    assert_eq!(recorder.take(), vec!["select 1"]);
}

#[test]
fn placeholders_are_not_hit() {
    let config = still().with_options(&[ChartOption::MinEntryCount(5)]);
    let mut chart = Chart::with_config(Size::new(390.0, 260.0), config);
    chart.set_entries(bars(&[5.0]), Instant::now());
    let placeholder = chart.bar(BarId::slot(4)).unwrap();
    assert!(placeholder.is_placeholder());
    let inside = Point::new(placeholder.track.x + 1.0, placeholder.track.bottom() - 1.0);
    assert_eq!(chart.hit_test(inside), None);
}

#[test]
fn selection_dropped_when_bar_disappears() {
    let mut chart = Chart::with_config(Size::new(390.0, 260.0), still());
    let now = Instant::now();
    chart.set_entries(bars(&[1.0, 2.0, 3.0]), now);
    chart.select(Some(BarId::slot(2)));
    chart.update_entries(bars(&[1.0, 2.0, 3.0, 4.0]), 0.0, now);
    assert_eq!(chart.selected(), Some(BarId::slot(2)));
    chart.update_entries(bars(&[1.0, 2.0]), 0.0, now);
    assert_eq!(chart.selected(), None);
}

#[test]
fn selection_disabled_by_config() {
    let mut chart = Chart::with_config(Size::new(390.0, 260.0), still());
    let now = Instant::now();
    chart.set_entries(bars(&[1.0, 2.0]), now);
    chart.select(Some(BarId::slot(0)));
    chart.set_options(&[ChartOption::MarkSelected(false)], now);
    assert_eq!(chart.selected(), None);
    assert_eq!(chart.select(Some(BarId::slot(0))), SelectionChange::Unchanged);
}

#[test]
fn render_draws_bars_axes_and_avg_line() {
    let config = still().with_options(&[ChartOption::ShowAvgLine(true)]);
    let mut chart = Chart::with_config(Size::new(390.0, 260.0), config);
    let now = Instant::now();
    chart.set_entries(bars(&[10.0, 20.0, 30.0]), now);
    chart.select(Some(BarId::slot(0)));

    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, &FixedWidthMeasure::default(), now);

    assert_eq!(canvas.dashed_lines(), 1);
    assert_eq!(canvas.rects().count(), 3);
    let half = BLUE.scale_alpha(0.5);
    assert_eq!(canvas.rects().filter(|(_, c)| **c == half).count(), 1);
    let texts: Vec<&str> = canvas.texts().collect();
    assert!(texts.contains(&"D0") && texts.contains(&"D2"));
    // average 20 is labelled next to the dashed line
    assert!(texts.contains(&"20"));
}

#[test]
fn render_empty_chart_draws_nothing() {
    let chart = Chart::new(Size::new(390.0, 260.0));
    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, &FixedWidthMeasure::default(), Instant::now());
    assert!(canvas.commands.is_empty());
}

#[test]
fn line_chart_labels_today() {
    let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let mut chart = Chart::new(Size::new(390.0, 260.0));
    chart.set_today(today);
    let points = (0..7).map(|i| LinePoint::new(i as f64, today - chrono::Duration::days(6 - i))).collect();
    let events = chart.set_entries(Series::Line(points), Instant::now());
    assert!(events.is_empty());
    assert!(chart.bars().is_empty());

    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, &FixedWidthMeasure::default(), Instant::now());
    let texts: Vec<&str> = canvas.texts().collect();
    assert_eq!(texts.len(), 7);
    assert_eq!(texts.last(), Some(&"Today"));
    // one marker per point
    assert_eq!(canvas.rects().count(), 7);
}

#[test]
fn panning_respects_scrollable() {
    let config = still().with_options(&[ChartOption::MinBarWidth(20.0), ChartOption::MinSpacing(10.0)]);
    let mut chart = Chart::with_config(Size::new(390.0, 260.0), config);
    chart.set_entries(bars(&[1.0; 40]), Instant::now());
    assert!(chart.frame().content_width > 390.0);

    assert!(chart.pan_by(-50.0));
    assert_eq!(chart.scroll().offset, 50.0);
    // dragging past the start clamps to zero
    assert!(chart.pan_by(500.0));
    assert_eq!(chart.scroll().offset, 0.0);
    assert!(!chart.pan_by(100.0));

    chart.set_options(&[ChartOption::IsScrollable(false)], Instant::now());
    assert!(!chart.pan_by(-50.0));
}

#[test]
fn hit_test_follows_scroll() {
    let config = still().with_options(&[ChartOption::MinBarWidth(20.0), ChartOption::MinSpacing(10.0)]);
    let mut chart = Chart::with_config(Size::new(390.0, 260.0), config);
    chart.set_entries(bars(&[1.0; 40]), Instant::now());
    let target = chart.bar(BarId::slot(20)).unwrap().rect;
    chart.pan_by(-300.0);
    let offset = chart.scroll().offset;
    let on_screen = Point::new(target.x + target.width / 2.0 - offset, target.bottom() - 1.0);
    assert_eq!(chart.hit_test(on_screen), Some(BarId::slot(20)));
}

#[test]
fn overflowing_duration_snaps_bars() {
    let config = ChartConfig::default().with_options(&[ChartOption::AnimationDuration(1e19)]);
    let (mut chart, recorder) = recorded_chart(config);
    let events = chart.set_entries(bars(&[1.0, 2.0]), Instant::now());
    assert_eq!(events.len(), 4);
    assert!(!chart.is_animating());
    assert_eq!(chart.next_deadline(), None);
    assert_eq!(recorder.take(), vec!["start 0", "stop 0", "start 1", "stop 1"]);
}

#[test]
fn moving_selection_reports_the_new_bar() {
    let (mut chart, recorder) = recorded_chart(still());
    chart.set_entries(bars(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), Instant::now());
    recorder.take();

    assert_eq!(chart.select(Some(BarId::slot(3))), SelectionChange::Selected(BarId::slot(3)));
    assert_eq!(chart.select(Some(BarId::slot(4))), SelectionChange::Selected(BarId::slot(4)));
    assert_eq!(chart.selected(), Some(BarId::slot(4)));
    assert_eq!(recorder.take(), vec!["select 3", "select 4"]);
}

#[test]
fn vanished_bars_stop_once_each() {
    let (mut chart, recorder) = recorded_chart(ChartConfig::default());
    let t0 = Instant::now();
    chart.set_entries(bars(&[1.0; 200]), t0);
    recorder.take();

    chart.update_entries(bars(&[1.0; 50]), 0.5, t0 + Duration::from_millis(100));
    let vanished: Vec<usize> = recorder
        .take()
        .iter()
        .filter_map(|e| e.strip_prefix("stop ")?.parse::<usize>().ok())
        .filter(|slot| *slot >= 50)
        .collect();
    let unique: HashSet<usize> = vanished.iter().copied().collect();
    assert_eq!(vanished.len(), 150);
    assert_eq!(unique.len(), 150);
}

fn wide_chart(extra: &[ChartOption]) -> Chart {
    let config = still().with_options(&[ChartOption::MinBarWidth(20.0), ChartOption::MinSpacing(10.0)]).with_options(extra);
    let mut chart = Chart::with_config(Size::new(390.0, 260.0), config);
    chart.set_entries(bars(&[1.0; 40]), Instant::now());
    chart
}

#[test]
fn scroll_indicator_follows_the_offset() {
    let mut chart = wide_chart(&[]);
    let inset = chart.config().scroll_width_inset;
    let start = chart.scroll().indicator_rect(chart.frame(), inset).unwrap();
    assert_eq!(start.x, 0.0);
    assert!(start.width < 390.0);

    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, &FixedWidthMeasure::default(), Instant::now());
    assert!(canvas.rects().any(|(r, _)| *r == start));

    chart.pan_by(-10_000.0);
    let end = chart.scroll().indicator_rect(chart.frame(), inset).unwrap();
    assert!((end.right() - 390.0).abs() < 1e-3);
}

#[test]
fn scroll_indicator_respects_config() {
    let hidden = wide_chart(&[ChartOption::ShowScrollIndicator(false)]);
    let shown = wide_chart(&[]);
    let count = |chart: &Chart| {
        let mut canvas = RecordingCanvas::new();
        chart.render(&mut canvas, &FixedWidthMeasure::default(), Instant::now());
        canvas.rects().count()
    };
    assert_eq!(count(&shown), count(&hidden) + 1);

    let locked = wide_chart(&[ChartOption::IsScrollable(false)]);
    assert_eq!(count(&locked), count(&hidden));

    // content that fits gets no indicator
    let mut small = Chart::with_config(Size::new(390.0, 260.0), still());
    small.set_entries(bars(&[1.0, 2.0]), Instant::now());
    assert_eq!(small.scroll().indicator_rect(small.frame(), 0.0), None);
    assert_eq!(count(&small), 2);
}

#[test]
fn offscreen_bars_are_culled() {
    let mut chart = wide_chart(&[ChartOption::ShowScrollIndicator(false)]);
    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, &FixedWidthMeasure::default(), Instant::now());
    let drawn = canvas.rects().count();
    assert!(drawn > 0 && drawn < 40);
    let last = chart.bar(BarId::slot(39)).unwrap().rect;
    assert!(!canvas.rects().any(|(r, _)| *r == chart.scroll().to_view(&last)));

    chart.pan_by(-10_000.0);
    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, &FixedWidthMeasure::default(), Instant::now());
    assert!(canvas.rects().any(|(r, _)| *r == chart.scroll().to_view(&last)));
    let first = chart.bar(BarId::slot(0)).unwrap().rect;
    assert!(!canvas.rects().any(|(r, _)| *r == chart.scroll().to_view(&first)));
}

#[test]
fn hit_test_ignores_points_beyond_the_view() {
    let chart = wide_chart(&[]);
    let target = chart.bar(BarId::slot(30)).unwrap().rect;
    assert!(target.x > 390.0);
    let beyond = Point::new(target.x + target.width / 2.0, target.bottom() - 1.0);
    assert_eq!(chart.hit_test(beyond), None);
}
