// File: crates/chartkit-core/src/series.rs
// Summary: Entry models (bar, grouped, range, line point) and the Series wrapper per chart kind.
// Notes:
// - Entries are immutable once constructed; a new entry set replaces the old one wholesale.
// - `RangeEntry::new` is permissive (no ordering check). `RangeEntry::try_new` enforces
//   min <= value <= max for callers that want validation.

use chrono::NaiveDate;

use crate::error::{ChartError, Result};
use crate::scale::Domain;
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesType {
    Bar,
    Grouped,
    Range,
    Line,
}

/// A single labeled value drawn as one bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub value: f64,
    pub label: String,
    pub color: Rgba,
}

impl Entry {
    pub fn new(value: f64, label: impl Into<String>, color: Rgba) -> Self {
        Self { value, label: label.into(), color }
    }
}

/// A cluster of bars sharing one x-axis label. `value` is the running mean of the children.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupedEntry {
    pub children: Vec<Entry>,
    pub label: String,
    pub value: f64,
}

impl GroupedEntry {
    pub fn new(children: Vec<Entry>, label: impl Into<String>) -> Self {
        let value = incremental_mean(children.iter().map(|e| e.value));
        Self { children, label: label.into(), value }
    }
}

/// Running mean: `avg += (x - avg) / (i + 1)`. Empty input yields 0.
pub fn incremental_mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values
        .into_iter()
        .enumerate()
        .fold(0.0, |avg, (i, x)| avg + (x - avg) / (i as f64 + 1.0))
}

/// A value with a surrounding `[min, max]` band, drawn as a min bar and a max bar.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeEntry {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub label: String,
    pub color: Rgba,
}

impl RangeEntry {
    pub fn new(value: f64, min: f64, max: f64, label: impl Into<String>, color: Rgba) -> Self {
        Self { value, min, max, label: label.into(), color }
    }

    /// Construct a range entry enforcing `min <= value <= max`.
    pub fn try_new(value: f64, min: f64, max: f64, label: impl Into<String>, color: Rgba) -> Result<Self> {
        let label = label.into();
        if !(min <= value && value <= max) {
            return Err(ChartError::InvalidRange { label, min, value, max });
        }
        Ok(Self { value, min, max, label, color })
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.value && self.value <= self.max
    }
}

/// One dated sample of a line chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePoint {
    pub value: f64,
    pub date: NaiveDate,
}

impl LinePoint {
    pub fn new(value: f64, date: NaiveDate) -> Self {
        Self { value, date }
    }
}

/// The entry set of one chart, tagged by chart kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Series {
    Bars(Vec<Entry>),
    Grouped(Vec<GroupedEntry>),
    Range(Vec<RangeEntry>),
    Line(Vec<LinePoint>),
}

impl Default for Series {
    fn default() -> Self {
        Series::Bars(Vec::new())
    }
}

impl Series {
    pub fn series_type(&self) -> SeriesType {
        match self {
            Series::Bars(_) => SeriesType::Bar,
            Series::Grouped(_) => SeriesType::Grouped,
            Series::Range(_) => SeriesType::Range,
            Series::Line(_) => SeriesType::Line,
        }
    }

    /// Number of top-level entries (groups for grouped charts).
    pub fn len(&self) -> usize {
        match self {
            Series::Bars(v) => v.len(),
            Series::Grouped(v) => v.len(),
            Series::Range(v) => v.len(),
            Series::Line(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values that drive the vertical scale: bar values, every grouped child,
    /// or every range min and max.
    pub fn domain_values(&self) -> Vec<f64> {
        match self {
            Series::Bars(v) => v.iter().map(|e| e.value).collect(),
            Series::Grouped(v) => v.iter().flat_map(|g| g.children.iter().map(|e| e.value)).collect(),
            Series::Range(v) => v.iter().flat_map(|e| [e.min, e.max]).collect(),
            Series::Line(v) => v.iter().map(|p| p.value).collect(),
        }
    }

    pub fn domain(&self) -> Option<Domain> {
        Domain::from_values(self.domain_values())
    }

    /// Number of values the axes treat as "entries" (flattened for grouped/range).
    pub fn value_count(&self) -> usize {
        self.domain_values().len()
    }

    /// Top-level labels, in slot order.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Series::Bars(v) => v.iter().map(|e| e.label.as_str()).collect(),
            Series::Grouped(v) => v.iter().map(|g| g.label.as_str()).collect(),
            Series::Range(v) => v.iter().map(|e| e.label.as_str()).collect(),
            Series::Line(_) => Vec::new(),
        }
    }
}
