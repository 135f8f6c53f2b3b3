// File: crates/chartkit-core/src/lib.rs
// Summary: Core library entry point; exports the layout, reconciliation, animation and chart API.

pub mod animation;
pub mod axis;
pub mod backend;
pub mod bar;
pub mod builder;
pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod kind;
pub mod layout;
pub mod legend;
pub mod line;
pub mod position;
pub mod reconcile;
pub mod scale;
pub mod selection;
pub mod series;
pub mod theme;
pub mod types;
pub mod view;

pub use animation::{AnimationController, AnimationEvent, AnimationRequest, Easing};
pub use backend::{Canvas, DrawCommand, FixedWidthMeasure, RecordingCanvas, TextMeasure};
pub use bar::{Anchor, Bar, BarId, RangeSide};
pub use builder::{BarLayout, SeriesBuilder};
pub use chart::{Chart, ChartDelegate};
pub use config::{ChartConfig, ChartOption};
pub use error::{ChartError, Result};
pub use format::AxisFormat;
pub use geometry::{safe_div, Point, Rect, Size};
pub use kind::{kind_for, ChartKind, GroupedBarKind, RangeBarKind, SimpleBarKind};
pub use layout::ChartFrame;
pub use legend::{LegendEntry, LegendLayout};
pub use line::{LineOptions, LinePlot};
pub use position::{SlotLayout, SlotRequest};
pub use reconcile::{reconcile, MatchPolicy, Reconciliation};
pub use scale::{Domain, ValueScale};
pub use selection::{SelectionChange, SelectionController};
pub use series::{Entry, GroupedEntry, LinePoint, RangeEntry, Series, SeriesType};
pub use theme::{Rgba, Theme};
pub use types::Insets;
pub use view::ScrollState;
