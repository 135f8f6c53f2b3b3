// File: crates/chartkit-core/src/format.rs
// Summary: Axis value formatting (plain integers or compact "12.5k" / "2M" labels).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisFormat {
    /// Whole numbers, e.g. `12500`.
    #[default]
    Integer,
    /// Thousands/millions with one truncated decimal, e.g. `12.5k`, `2M`.
    Compact,
}

impl AxisFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            AxisFormat::Integer => format_integer(value),
            AxisFormat::Compact => short_number(value),
        }
    }
}

fn format_integer(value: f64) -> String {
    if value.is_finite() { format!("{}", value.trunc() as i64) } else { "0".to_string() }
}

/// Compact number label: values from 10 000 use `k`, from 1 000 000 use `M`.
/// One decimal is kept (truncated, not rounded) unless it is zero.
pub fn short_number(num: f64) -> String {
    if !num.is_finite() {
        return "0".to_string();
    }
    let abs = num.abs();
    let sign = if num < 0.0 { "-" } else { "" };
    let (scaled, suffix) = if abs >= 1_000_000.0 {
        (abs / 1_000_000.0, "M")
    } else if abs >= 10_000.0 {
        (abs / 1_000.0, "k")
    } else if abs.fract() == 0.0 {
        return format!("{}", num as i64);
    } else {
        return format!("{}", num);
    };
    let truncated = (scaled * 10.0).floor() / 10.0;
    if truncated.fract() == 0.0 {
        format!("{sign}{}{suffix}", truncated as i64)
    } else {
        format!("{sign}{truncated:.1}{suffix}")
    }
}
