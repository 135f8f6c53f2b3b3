// File: crates/chartkit-demo/src/bin/example_bars.rs
// Summary: Minimal programmatic example: a padded bar chart, one update, PNGs of the mid-transition and final frames.

use std::time::{Duration, Instant};

use anyhow::Result;
use chartkit_core::{Chart, ChartOption, Entry, Rgba, Series, Size};
use chartkit_render_skia::{render_to_png, RenderOptions};

fn week(values: &[f64]) -> Series {
    let color = Rgba::from_argb(255, 32, 120, 200);
    let days = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    Series::Bars(values.iter().zip(days).map(|(v, d)| Entry::new(*v, d, color)).collect())
}

fn settle(chart: &mut Chart, mut now: Instant) -> Instant {
    while let Some(deadline) = chart.next_deadline() {
        now = now.max(deadline);
        chart.tick(now);
    }
    now
}

fn main() -> Result<()> {
    env_logger::init();

    let mut chart = Chart::new(Size::new(390.0, 260.0));
    let t0 = Instant::now();
    chart.set_options(
        &[
            ChartOption::MinEntryCount(7),
            ChartOption::ShowAvgLine(true),
            ChartOption::ContainerColor(Rgba::from_argb(20, 0, 0, 0)),
        ],
        t0,
    );
    chart.set_entries(week(&[4.0, 8.0, 6.0, 9.0, 3.0]), t0);
    let t1 = settle(&mut chart, t0);

    chart.update_entries(week(&[7.0, 5.0, 8.0, 4.0, 6.0, 9.0]), 0.6, t1);
    let opts = RenderOptions::default();
    let mid = t1 + Duration::from_millis(300);
    render_to_png(&chart, &opts, "target/out/example_bars_mid.png", mid)?;

    let end = settle(&mut chart, mid);
    render_to_png(&chart, &opts, "target/out/example_bars.png", end)?;
    println!("Wrote target/out/example_bars_mid.png and target/out/example_bars.png");
    Ok(())
}
