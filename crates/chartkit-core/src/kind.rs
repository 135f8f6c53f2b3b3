// File: crates/chartkit-core/src/kind.rs
// Summary: Chart-kind strategies (simple, grouped, range) behind one trait.
// Notes:
// - Every hook is a required method; a kind that forgets one does not compile.
// - Bar rects are produced in content coordinates (unscrolled); `ctx.plot` is the bar container.
// - A kind handed a series of another kind produces no slots and no bars.

use crate::bar::{Anchor, Bar, BarId, RangeSide};
use crate::config::ChartConfig;
use crate::geometry::Rect;
use crate::position::{SlotLayout, SlotRequest};
use crate::scale::ValueScale;
use crate::series::{Entry, GroupedEntry, Series, SeriesType};
use crate::theme::Theme;

/// Everything a kind needs to turn entries into bars.
#[derive(Clone, Copy, Debug)]
pub struct BuildContext<'a> {
    pub config: &'a ChartConfig,
    pub theme: &'a Theme,
    pub slots: SlotLayout,
    pub scale: ValueScale,
    pub plot: Rect,
}

impl BuildContext<'_> {
    fn y(&self, value: f64) -> f32 {
        self.scale.to_px(value, self.plot.y, self.plot.bottom())
    }

    fn track(&self, x: f32) -> Rect {
        Rect::from_xywh(x, self.plot.y, self.slots.width, self.plot.height)
    }
}

pub trait ChartKind {
    fn series_type(&self) -> SeriesType;

    /// Resolve slot width and spacing for `series` within `available_width`.
    fn slot_layout(&self, series: &Series, available_width: f32, config: &ChartConfig) -> SlotLayout;

    /// Width of the scrollable bar content.
    fn compute_content_size(&self, series: &Series, slots: &SlotLayout) -> f32;

    /// Left edge of bar slot `index`, relative to the plot.
    fn calculate_x_pos(&self, series: &Series, slots: &SlotLayout, index: usize) -> f32;

    fn label_count(&self, series: &Series) -> usize;

    fn label<'s>(&self, series: &'s Series, index: usize) -> Option<&'s str>;

    /// Left edge of x-axis label `index`, relative to the plot.
    fn x_axis_position(&self, series: &Series, slots: &SlotLayout, index: usize) -> f32;

    fn width_for_label(&self, series: &Series, slots: &SlotLayout, index: usize) -> f32;

    fn build_bars(&self, series: &Series, ctx: &BuildContext<'_>) -> Vec<Bar>;
}

/// Strategy for a series type; line charts have no bar strategy.
pub fn kind_for(series_type: SeriesType) -> Option<&'static dyn ChartKind> {
    match series_type {
        SeriesType::Bar => Some(&SimpleBarKind),
        SeriesType::Grouped => Some(&GroupedBarKind),
        SeriesType::Range => Some(&RangeBarKind),
        SeriesType::Line => None,
    }
}

fn request(config: &ChartConfig, available_width: f32, slot_count: usize) -> SlotRequest {
    SlotRequest {
        available_width,
        slot_count,
        min_slot_count: config.min_entry_count,
        max_visible_count: config.max_visible_count,
        fixed_width: config.min_bar_width,
        fixed_spacing: config.min_spacing,
    }
}

// ---- simple bars -------------------------------------------------------------

/// One bar per entry, padded with placeholders up to the minimum entry count.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleBarKind;

impl ChartKind for SimpleBarKind {
    fn series_type(&self) -> SeriesType {
        SeriesType::Bar
    }

    fn slot_layout(&self, series: &Series, available_width: f32, config: &ChartConfig) -> SlotLayout {
        let Series::Bars(entries) = series else { return SlotLayout::default() };
        SlotLayout::compute(&request(config, available_width, entries.len()))
    }

    fn compute_content_size(&self, _series: &Series, slots: &SlotLayout) -> f32 {
        slots.content_width(slots.effective)
    }

    fn calculate_x_pos(&self, _series: &Series, slots: &SlotLayout, index: usize) -> f32 {
        slots.x(index)
    }

    fn label_count(&self, series: &Series) -> usize {
        match series {
            Series::Bars(entries) => entries.len(),
            _ => 0,
        }
    }

    fn label<'s>(&self, series: &'s Series, index: usize) -> Option<&'s str> {
        match series {
            Series::Bars(entries) => entries.get(index).map(|e| e.label.as_str()),
            _ => None,
        }
    }

    fn x_axis_position(&self, series: &Series, slots: &SlotLayout, index: usize) -> f32 {
        self.calculate_x_pos(series, slots, index) - slots.spacing / 2.0
    }

    fn width_for_label(&self, _series: &Series, slots: &SlotLayout, _index: usize) -> f32 {
        slots.stride()
    }

    fn build_bars(&self, series: &Series, ctx: &BuildContext<'_>) -> Vec<Bar> {
        let Series::Bars(entries) = series else { return Vec::new() };
        let slots = &ctx.slots;
        let bottom = ctx.plot.bottom();
        let placeholder = ctx.config.placeholder_color.unwrap_or(ctx.theme.placeholder);
        (0..slots.effective)
            .map(|i| {
                let x = ctx.plot.x + slots.x(i);
                let entry = if i < slots.displayed { entries.get(i).cloned() } else { None };
                let (rect, color) = match &entry {
                    Some(e) => (Rect::from_ltrb(x, ctx.y(e.value), x + slots.width, bottom), e.color),
                    None => (Rect::from_xywh(x, bottom, slots.width, 0.0), placeholder),
                };
                Bar {
                    id: BarId::slot(i),
                    entry,
                    rect,
                    track: ctx.track(x),
                    color,
                    anchor: Anchor::Bottom,
                    corner_radius: ctx.config.corner_rounding,
                }
            })
            .collect()
    }
}

// ---- grouped bars ------------------------------------------------------------

/// Children of each group laid out contiguously, groups separated by `group_spacing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroupedBarKind;

impl GroupedBarKind {
    /// Groups drawn after applying the visible cap.
    fn displayed<'s>(series: &'s Series, config_cap: Option<usize>) -> &'s [GroupedEntry] {
        match series {
            Series::Grouped(groups) => &groups[..groups.len().min(config_cap.unwrap_or(usize::MAX))],
            _ => &[],
        }
    }

    /// Group owning flattened slot `index`.
    fn group_of(groups: &[GroupedEntry], index: usize) -> Option<usize> {
        let mut start = 0;
        for (g, group) in groups.iter().enumerate() {
            let end = start + group.children.len();
            if index < end {
                return Some(g);
            }
            start = end;
        }
        None
    }

    /// First flattened slot of group `group`.
    fn first_slot(groups: &[GroupedEntry], group: usize) -> usize {
        groups.iter().take(group).map(|g| g.children.len()).sum()
    }
}

impl ChartKind for GroupedBarKind {
    fn series_type(&self) -> SeriesType {
        SeriesType::Grouped
    }

    fn slot_layout(&self, series: &Series, available_width: f32, config: &ChartConfig) -> SlotLayout {
        let groups = Self::displayed(series, config.max_visible_count);
        let children = groups.iter().map(|g| g.children.len()).sum();
        let req = SlotRequest { max_visible_count: None, ..request(config, available_width, children) };
        SlotLayout::grouped(&req, groups.len(), config.group_spacing)
    }

    fn compute_content_size(&self, _series: &Series, slots: &SlotLayout) -> f32 {
        let w = slots.stride() * slots.displayed as f32 + slots.group_count as f32 * slots.group_spacing;
        if w.is_finite() { w.max(0.0) } else { 0.0 }
    }

    fn calculate_x_pos(&self, series: &Series, slots: &SlotLayout, index: usize) -> f32 {
        let Series::Grouped(groups) = series else { return 0.0 };
        match Self::group_of(groups, index) {
            Some(g) => slots.grouped_x(g, index),
            None => slots.x(index),
        }
    }

    fn label_count(&self, series: &Series) -> usize {
        match series {
            Series::Grouped(groups) => groups.len(),
            _ => 0,
        }
    }

    fn label<'s>(&self, series: &'s Series, index: usize) -> Option<&'s str> {
        match series {
            Series::Grouped(groups) => groups.get(index).map(|g| g.label.as_str()),
            _ => None,
        }
    }

    fn x_axis_position(&self, series: &Series, slots: &SlotLayout, index: usize) -> f32 {
        let Series::Grouped(groups) = series else { return 0.0 };
        slots.grouped_x(index, Self::first_slot(groups, index))
    }

    fn width_for_label(&self, series: &Series, slots: &SlotLayout, index: usize) -> f32 {
        match series {
            Series::Grouped(groups) => groups.get(index).map_or(0.0, |g| g.children.len() as f32 * slots.stride()),
            _ => 0.0,
        }
    }

    fn build_bars(&self, series: &Series, ctx: &BuildContext<'_>) -> Vec<Bar> {
        let groups = Self::displayed(series, ctx.config.max_visible_count);
        let slots = &ctx.slots;
        let bottom = ctx.plot.bottom();
        let mut bars = Vec::with_capacity(slots.displayed);
        let mut index = 0;
        for (g, group) in groups.iter().enumerate() {
            for child in &group.children {
                let x = ctx.plot.x + slots.grouped_x(g, index);
                bars.push(Bar {
                    id: BarId::grouped(g, index),
                    entry: Some(child.clone()),
                    rect: Rect::from_ltrb(x, ctx.y(child.value), x + slots.width, bottom),
                    track: ctx.track(x),
                    color: child.color,
                    anchor: Anchor::Bottom,
                    corner_radius: ctx.config.corner_rounding,
                });
                index += 1;
            }
        }
        bars
    }
}

// ---- range bars --------------------------------------------------------------

/// Two bars per entry: value down to min (faded) and value up to max.
#[derive(Clone, Copy, Debug, Default)]
pub struct RangeBarKind;

impl ChartKind for RangeBarKind {
    fn series_type(&self) -> SeriesType {
        SeriesType::Range
    }

    fn slot_layout(&self, series: &Series, available_width: f32, config: &ChartConfig) -> SlotLayout {
        let Series::Range(entries) = series else { return SlotLayout::default() };
        SlotLayout::compute(&request(config, available_width, entries.len()))
    }

    fn compute_content_size(&self, _series: &Series, slots: &SlotLayout) -> f32 {
        slots.content_width(slots.effective)
    }

    fn calculate_x_pos(&self, _series: &Series, slots: &SlotLayout, index: usize) -> f32 {
        slots.x(index)
    }

    fn label_count(&self, series: &Series) -> usize {
        match series {
            Series::Range(entries) => entries.len(),
            _ => 0,
        }
    }

    fn label<'s>(&self, series: &'s Series, index: usize) -> Option<&'s str> {
        match series {
            Series::Range(entries) => entries.get(index).map(|e| e.label.as_str()),
            _ => None,
        }
    }

    fn x_axis_position(&self, series: &Series, slots: &SlotLayout, index: usize) -> f32 {
        self.calculate_x_pos(series, slots, index) - slots.spacing / 2.0
    }

    fn width_for_label(&self, _series: &Series, slots: &SlotLayout, _index: usize) -> f32 {
        slots.stride()
    }

    fn build_bars(&self, series: &Series, ctx: &BuildContext<'_>) -> Vec<Bar> {
        let Series::Range(entries) = series else { return Vec::new() };
        let slots = &ctx.slots;
        let mut bars = Vec::with_capacity(slots.displayed * 2);
        for (i, entry) in entries.iter().take(slots.displayed).enumerate() {
            let x = ctx.plot.x + slots.x(i);
            let mid = ctx.y(entry.value);
            let lo = ctx.y(entry.min);
            let hi = ctx.y(entry.max);
            let as_entry = |value: f64, color| Entry::new(value, entry.label.clone(), color);

            let min_color = entry.color.scale_alpha(ctx.config.min_bar_alpha);
            bars.push(Bar {
                id: BarId::range(i, RangeSide::Min),
                entry: Some(as_entry(entry.min, min_color)),
                rect: Rect::from_ltrb(x, mid.min(lo), x + slots.width, mid.max(lo)),
                track: ctx.track(x),
                color: min_color,
                anchor: Anchor::Top,
                corner_radius: ctx.config.corner_rounding,
            });
            bars.push(Bar {
                id: BarId::range(i, RangeSide::Max),
                entry: Some(as_entry(entry.max, entry.color)),
                rect: Rect::from_ltrb(x, hi.min(mid), x + slots.width, hi.max(mid)),
                track: ctx.track(x),
                color: entry.color,
                anchor: Anchor::Bottom,
                corner_radius: ctx.config.corner_rounding,
            });
        }
        bars
    }
}
