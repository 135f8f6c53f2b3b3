// File: crates/chartkit-core/src/grid.rs
// Summary: Horizontal grid line placement.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Grid line positions as fractions of the plot height, top to bottom.
/// Three lines normally; only top and bottom for fewer than three values or a flat domain.
pub fn grid_fractions(value_count: usize, degenerate: bool) -> Vec<f64> {
    let steps = if value_count < 3 || degenerate { 2 } else { 3 };
    linspace(0.0, 1.0, steps)
}
