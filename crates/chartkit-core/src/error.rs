// File: crates/chartkit-core/src/error.rs
// Summary: Crate-level error type. Data never produces errors; only config I/O and opt-in validation do.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("config serialize error: {0}")]
    ConfigSerialize(String),

    #[error("range entry '{label}' violates min <= value <= max ({min} <= {value} <= {max})")]
    InvalidRange { label: String, min: f64, value: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, ChartError>;
