// File: crates/chartkit-core/tests/reconcile.rs
// Purpose: Positional and keyed matching of rebuilt bars against the previous list.

use chartkit_core::{
    reconcile, Anchor, Bar, BarId, ChartConfig, Entry, MatchPolicy, Rect, Rgba, Series, SeriesBuilder, Size, Theme,
};

const VIEW: Size = Size::new(390.0, 260.0);

fn build(values: &[f64]) -> Vec<Bar> {
    let config = ChartConfig::default();
    let theme = Theme::default();
    let series = Series::Bars(values.iter().map(|v| Entry::new(*v, "x", Rgba::BLACK)).collect());
    SeriesBuilder::new(&config, &theme).build(&series, VIEW).bars
}

fn bar(id: BarId, x: f32) -> Bar {
    Bar {
        id,
        entry: None,
        rect: Rect::from_xywh(x, 10.0, 5.0, 20.0),
        track: Rect::from_xywh(x, 0.0, 5.0, 30.0),
        color: Rgba::BLACK,
        anchor: Anchor::Bottom,
        corner_radius: 0.0,
    }
}

#[test]
fn equal_length_lists_match_position_by_position() {
    let old = build(&[1.0, 2.0, 3.0]);
    let new = build(&[3.0, 2.0, 1.0]);
    let plan = reconcile(&old, &new, MatchPolicy::Positional);

    assert_eq!(plan.matched_count(), 3);
    assert!(plan.removed.is_empty());
    for (i, m) in plan.matches.iter().enumerate() {
        let prev = m.previous.expect("matched");
        assert_eq!(prev.id, old[i].id);
        assert_eq!(m.from_rect(), old[i].rect);
        assert_eq!(m.to_rect(), new[i].rect);
    }
}

#[test]
fn new_bars_grow_from_collapsed_frame() {
    let old = build(&[1.0, 2.0]);
    let new = build(&[1.0, 2.0, 3.0]);
    let plan = reconcile(&old, &new, MatchPolicy::Positional);

    let last = &plan.matches[2];
    assert!(last.previous.is_none());
    let from = last.from_rect();
    assert_eq!(from.height, 0.0);
    assert_eq!(from.y, new[2].rect.bottom());
}

#[test]
fn shrinking_reports_removed_ids() {
    let old = build(&[1.0, 2.0, 3.0]);
    let new = build(&[1.0, 2.0]);
    let plan = reconcile(&old, &new, MatchPolicy::Positional);
    assert_eq!(plan.removed, vec![BarId::slot(2)]);
}

#[test]
fn positional_requires_same_id_at_same_index() {
    let old = vec![bar(BarId::slot(0), 0.0), bar(BarId::slot(1), 10.0)];
    let new = vec![bar(BarId::slot(1), 0.0)];

    let positional = reconcile(&old, &new, MatchPolicy::Positional);
    assert!(positional.matches[0].previous.is_none());
    assert_eq!(positional.removed, vec![BarId::slot(0), BarId::slot(1)]);

    let keyed = reconcile(&old, &new, MatchPolicy::Keyed);
    assert_eq!(keyed.matches[0].previous.map(|b| b.rect.x), Some(10.0));
    assert_eq!(keyed.removed, vec![BarId::slot(0)]);
}

#[test]
fn bars_compare_by_identity_only() {
    let a = bar(BarId::slot(4), 0.0);
    let b = bar(BarId::slot(4), 99.0);
    assert_eq!(a, b);
    assert_ne!(a, bar(BarId::slot(5), 0.0));
    assert_ne!(BarId::grouped(0, 4), BarId::slot(4));
}
