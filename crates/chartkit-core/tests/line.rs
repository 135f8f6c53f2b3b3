// File: crates/chartkit-core/tests/line.rs
// Purpose: Seven-point padding, column geometry and weekday labels of line charts.

use chartkit_core::line::{column_x, column_y, pad_week, POINT_COUNT};
use chartkit_core::{LineOptions, LinePlot, LinePoint, Rect};
use chrono::{Duration, NaiveDate};

fn day() -> NaiveDate {
    // a Friday
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
}

fn ago(n: i64) -> NaiveDate {
    day() - Duration::days(n)
}

#[test]
fn pads_with_the_earliest_value_on_preceding_days() {
    let points = [LinePoint::new(10.0, ago(0)), LinePoint::new(12.0, ago(1)), LinePoint::new(14.0, ago(2))];
    let padded = pad_week(&points);

    assert_eq!(padded.len(), POINT_COUNT);
    let dates: Vec<NaiveDate> = padded.iter().map(|p| p.date).collect();
    assert_eq!(dates, (0..7).rev().map(ago).collect::<Vec<_>>());
    let values: Vec<f64> = padded.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![14.0, 14.0, 14.0, 14.0, 14.0, 12.0, 10.0]);
}

#[test]
fn keeps_the_seven_most_recent() {
    let points: Vec<LinePoint> = (0..10).map(|i| LinePoint::new(i as f64, ago(i))).collect();
    let padded = pad_week(&points);
    assert_eq!(padded.len(), 7);
    assert_eq!(padded.first().map(|p| p.date), Some(ago(6)));
    assert_eq!(padded.last().map(|p| p.date), Some(ago(0)));
}

#[test]
fn empty_input_does_not_render() {
    assert!(pad_week(&[]).is_empty());
    let bounds = Rect::from_xywh(0.0, 0.0, 200.0, 135.0);
    assert!(LinePlot::compute(&[], bounds, &LineOptions::default(), day()).is_none());
}

#[test]
fn columns_span_the_width() {
    let bounds = Rect::from_xywh(0.0, 0.0, 200.0, 135.0);
    let o = LineOptions::default();
    assert_eq!(column_x(bounds, &o, 0), 10.0);
    assert_eq!(column_x(bounds, &o, 6), 190.0);
}

#[test]
fn minimum_is_pinned_to_center_unless_disabled() {
    let bounds = Rect::from_xywh(0.0, 0.0, 200.0, 135.0);
    let pinned = LineOptions::default();
    // graph height 100 starting at y = 15
    assert_eq!(column_y(bounds, &pinned, 2.0, 2.0, 10.0), 65.0);
    assert_eq!(column_y(bounds, &pinned, 10.0, 2.0, 10.0), 15.0);

    let plain = LineOptions { pin_minimum_to_center: false, ..LineOptions::default() };
    assert_eq!(column_y(bounds, &plain, 2.0, 2.0, 10.0), 95.0);
    // all-zero data cannot be scaled and sits mid-height
    assert_eq!(column_y(bounds, &plain, 0.0, 0.0, 0.0), 65.0);
}

#[test]
fn labels_use_weekdays_and_today() {
    let points = [LinePoint::new(3.0, ago(0)), LinePoint::new(5.0, ago(1))];
    let bounds = Rect::from_xywh(0.0, 0.0, 200.0, 135.0);
    let plot = LinePlot::compute(&points, bounds, &LineOptions::default(), day()).unwrap();

    assert_eq!(plot.vertices.len(), 7);
    assert_eq!(plot.guides.len(), 7);
    let texts: Vec<&str> = plot.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Today"]);
    assert!(plot.labels[6].is_today);
}
