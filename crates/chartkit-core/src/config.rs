// File: crates/chartkit-core/src/config.rs
// Summary: Immutable chart configuration, named options, and TOML preset load/save.
// Notes:
// - Options are applied in order onto a copy; the last write for an option wins.
// - `#[serde(default)]` lets partial TOML files override only what they name.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::{ChartError, Result};
use crate::format::AxisFormat;
use crate::line::LineOptions;
use crate::reconcile::MatchPolicy;
use crate::theme::Rgba;
use crate::types::{Insets, BOTTOM_HEADROOM, TOP_HEADROOM};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Seconds each bar transition lasts; 0 disables animation.
    pub animation_duration: f64,
    /// Seconds before a scheduled transition starts.
    pub animation_delay: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_visible_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_entry_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bar_width: Option<f32>,
    pub corner_rounding: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_color: Option<Rgba>,
    pub mark_selected: bool,
    pub show_avg_line: bool,
    pub show_horizontal_lines: bool,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
    pub use_min_max_range: bool,
    pub auto_format_x_axis: bool,
    pub group_spacing: f32,
    pub insets: Insets,
    /// Height of the band under the plot that holds the x-axis labels.
    pub x_axis_spacing: f32,
    /// Width reserved for y-axis labels.
    pub left_spacing: f32,
    pub container_left_margin: f32,
    /// Width reserved right of the plot for the average label.
    pub right_avg_spacing: f32,
    pub x_axis_font_size: f32,
    pub y_axis_font_size: f32,
    pub y_axis_format: AxisFormat,
    /// Alpha factor applied to the min half of range bars.
    pub min_bar_alpha: f32,
    pub top_headroom: f64,
    pub bottom_headroom: f64,
    pub scrollable: bool,
    pub show_scroll_indicator: bool,
    pub scroll_width_inset: f32,
    pub animations_enabled: bool,
    pub easing: Easing,
    pub match_policy: MatchPolicy,
    pub line: LineOptions,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            animation_duration: 0.5,
            animation_delay: 0.0,
            max_visible_count: None,
            min_entry_count: None,
            min_spacing: None,
            min_bar_width: None,
            corner_rounding: 5.0,
            container_color: None,
            placeholder_color: None,
            mark_selected: true,
            show_avg_line: false,
            show_horizontal_lines: true,
            show_x_axis: true,
            show_y_axis: true,
            use_min_max_range: true,
            auto_format_x_axis: true,
            group_spacing: 10.0,
            insets: Insets::default(),
            x_axis_spacing: 30.0,
            left_spacing: 20.0,
            container_left_margin: 10.0,
            right_avg_spacing: 20.0,
            x_axis_font_size: 12.0,
            y_axis_font_size: 12.0,
            y_axis_format: AxisFormat::Integer,
            min_bar_alpha: 0.3,
            top_headroom: TOP_HEADROOM,
            bottom_headroom: BOTTOM_HEADROOM,
            scrollable: true,
            show_scroll_indicator: true,
            scroll_width_inset: 0.0,
            animations_enabled: true,
            easing: Easing::default(),
            match_policy: MatchPolicy::default(),
            line: LineOptions::default(),
        }
    }
}

/// One named option. A list of these is folded into a new [`ChartConfig`].
#[derive(Clone, Debug, PartialEq)]
pub enum ChartOption {
    AnimationDuration(f64),
    AnimationDelay(f64),
    MaxVisibleCount(usize),
    MinEntryCount(usize),
    MinSpacing(f32),
    MinBarWidth(f32),
    CornerRounding(f32),
    ContainerColor(Rgba),
    PlaceholderColor(Rgba),
    MarkSelected(bool),
    ShowAvgLine(bool),
    ShowHorizontalLines(bool),
    ShowXAxis(bool),
    ShowYAxis(bool),
    UseMinMaxRange(bool),
    ShouldAutoFormatXAxis(bool),
    GroupSpacing(f32),
    Insets(Insets),
    XAxisSpacing(f32),
    XAxisFontSize(f32),
    YAxisFontSize(f32),
    YAxisFormat(AxisFormat),
    MinBarAlpha(f32),
    IsScrollable(bool),
    ShowScrollIndicator(bool),
    ScrollViewWidthInsets(f32),
    AnimationsEnabled(bool),
    Easing(Easing),
    MatchPolicy(MatchPolicy),
    Line(LineOptions),
}

impl ChartConfig {
    /// Copy of `self` with `options` applied in order.
    pub fn with_options(&self, options: &[ChartOption]) -> ChartConfig {
        let mut next = self.clone();
        for option in options {
            next.apply(option);
        }
        next
    }

    fn apply(&mut self, option: &ChartOption) {
        match *option {
            ChartOption::AnimationDuration(v) => self.animation_duration = v,
            ChartOption::AnimationDelay(v) => self.animation_delay = v,
            ChartOption::MaxVisibleCount(v) => self.max_visible_count = Some(v),
            ChartOption::MinEntryCount(v) => self.min_entry_count = Some(v),
            ChartOption::MinSpacing(v) => self.min_spacing = Some(v),
            ChartOption::MinBarWidth(v) => self.min_bar_width = Some(v),
            ChartOption::CornerRounding(v) => self.corner_rounding = v,
            ChartOption::ContainerColor(v) => self.container_color = Some(v),
            ChartOption::PlaceholderColor(v) => self.placeholder_color = Some(v),
            ChartOption::MarkSelected(v) => self.mark_selected = v,
            ChartOption::ShowAvgLine(v) => self.show_avg_line = v,
            ChartOption::ShowHorizontalLines(v) => self.show_horizontal_lines = v,
            ChartOption::ShowXAxis(v) => self.show_x_axis = v,
            ChartOption::ShowYAxis(v) => self.show_y_axis = v,
            ChartOption::UseMinMaxRange(v) => self.use_min_max_range = v,
            ChartOption::ShouldAutoFormatXAxis(v) => self.auto_format_x_axis = v,
            ChartOption::GroupSpacing(v) => self.group_spacing = v,
            ChartOption::Insets(v) => self.insets = v,
            ChartOption::XAxisSpacing(v) => self.x_axis_spacing = v,
            ChartOption::XAxisFontSize(v) => self.x_axis_font_size = v,
            ChartOption::YAxisFontSize(v) => self.y_axis_font_size = v,
            ChartOption::YAxisFormat(v) => self.y_axis_format = v,
            ChartOption::MinBarAlpha(v) => self.min_bar_alpha = v,
            ChartOption::IsScrollable(v) => self.scrollable = v,
            ChartOption::ShowScrollIndicator(v) => self.show_scroll_indicator = v,
            ChartOption::ScrollViewWidthInsets(v) => self.scroll_width_inset = v,
            ChartOption::AnimationsEnabled(v) => self.animations_enabled = v,
            ChartOption::Easing(v) => self.easing = v,
            ChartOption::MatchPolicy(v) => self.match_policy = v,
            ChartOption::Line(v) => self.line = v,
        }
    }

    /// Whether transitions run over time (as opposed to snapping).
    pub fn is_animated(&self) -> bool {
        self.animations_enabled && self.animation_duration > 0.0
    }

    pub fn duration(&self) -> Duration {
        secs(self.animation_duration)
    }

    pub fn delay(&self) -> Duration {
        secs(self.animation_delay)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ChartError::ConfigParse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ChartError::ConfigSerialize(e.to_string()))
    }

    /// Load a config preset from a TOML file. Missing fields use defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save the config as pretty-printed TOML, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Seconds to `Duration`; negative or non-finite inputs become zero.
pub(crate) fn secs(v: f64) -> Duration {
    if v.is_finite() && v > 0.0 { Duration::try_from_secs_f64(v).unwrap_or_default() } else { Duration::ZERO }
}
