// File: crates/chartkit-demo/src/main.rs
// Summary: Demo loads labelled values from CSV and renders bar, range, grouped and line charts to PNGs.
// Usage: chartkit-demo [data.csv] [--config preset.toml] [--theme dark]

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chartkit_core::theme;
use chartkit_core::{
    Chart, ChartConfig, Entry, GroupedEntry, LinePoint, RangeEntry, Rgba, Series, Size, Theme,
};
use chartkit_render_skia::{render_to_png, RenderOptions};
use serde::Deserialize;

const PALETTE: [Rgba; 4] = [
    Rgba::from_argb(255, 32, 120, 200),
    Rgba::from_argb(255, 240, 140, 30),
    Rgba::from_argb(255, 60, 170, 90),
    Rgba::from_argb(255, 200, 60, 80),
];

#[derive(Debug, Deserialize)]
struct Row {
    label: String,
    value: f64,
    #[serde(default)]
    min: Option<f64>,
    #[serde(default)]
    max: Option<f64>,
    #[serde(default)]
    group: Option<String>,
}

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    theme: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => args.config = Some(it.next().context("--config needs a path")?.into()),
            "--theme" => args.theme = Some(it.next().context("--theme needs a name")?),
            _ => args.input = Some(arg.into()),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let path = args
        .input
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("data/weekly.csv"));
    println!("Using input file: {}", path.display());

    let rows = load_rows(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if rows.is_empty() {
        anyhow::bail!("no rows loaded, check the header (label,value[,min,max[,group]])");
    }
    println!("Loaded {} rows", rows.len());

    let config = match &args.config {
        Some(p) => ChartConfig::load(p).unwrap_or_else(|e| {
            log::warn!("ignoring config {}: {}", p.display(), e);
            ChartConfig::default()
        }),
        None => ChartConfig::default(),
    };
    let theme = args.theme.as_deref().map(theme::find).unwrap_or_default();

    let mut charts = vec![("bars", bar_series(&rows, theme.bar)), ("line", line_series(&rows))];
    if let Some(s) = range_series(&rows) {
        charts.push(("range", s));
    }
    if let Some(s) = grouped_series(&rows) {
        charts.push(("grouped", s));
    }

    let opts = RenderOptions::default();
    for (suffix, series) in charts {
        let out = out_name_with(&path, suffix);
        render_chart(series, &config, theme, &opts, &out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

/// Render the final frame of a freshly built chart.
fn render_chart(series: Series, config: &ChartConfig, theme: Theme, opts: &RenderOptions, out: &Path) -> Result<()> {
    let mut chart = Chart::with_config(Size::new(390.0, 260.0), config.clone());
    chart.set_theme(theme);
    let now = Instant::now();
    chart.set_entries(series, now);
    let done = settle(&mut chart, now);
    render_to_png(&chart, opts, out, done)
}

/// Tick through every pending deadline; returns the instant the chart came to rest.
fn settle(chart: &mut Chart, mut now: Instant) -> Instant {
    while let Some(deadline) = chart.next_deadline() {
        now = now.max(deadline);
        chart.tick(now);
    }
    now
}

fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, rec) in rdr.deserialize::<Row>().enumerate() {
        match rec {
            Ok(row) => rows.push(row),
            Err(e) => log::warn!("skipping row {}: {}", i + 1, e),
        }
    }
    Ok(rows)
}

fn bar_series(rows: &[Row], color: Rgba) -> Series {
    Series::Bars(rows.iter().map(|r| Entry::new(r.value, r.label.as_str(), color)).collect())
}

/// Rows that carry both bounds, or `None` when no row does.
fn range_series(rows: &[Row]) -> Option<Series> {
    let entries: Vec<RangeEntry> = rows
        .iter()
        .filter_map(|r| {
            let (min, max) = (r.min?, r.max?);
            Some(RangeEntry::new(r.value, min, max, r.label.as_str(), PALETTE[1]))
        })
        .collect();
    (!entries.is_empty()).then_some(Series::Range(entries))
}

/// Rows clustered by their `group` column, in order of first appearance.
fn grouped_series(rows: &[Row]) -> Option<Series> {
    let mut groups: Vec<(String, Vec<Entry>)> = Vec::new();
    for row in rows {
        let Some(name) = row.group.as_deref().filter(|g| !g.is_empty()) else { continue };
        let idx = match groups.iter().position(|(g, _)| g == name) {
            Some(idx) => idx,
            None => {
                groups.push((name.to_string(), Vec::new()));
                groups.len() - 1
            }
        };
        let children = &mut groups[idx].1;
        let color = PALETTE[children.len() % PALETTE.len()];
        children.push(Entry::new(row.value, row.label.as_str(), color));
    }
    if groups.is_empty() {
        return None;
    }
    Some(Series::Grouped(groups.into_iter().map(|(name, children)| GroupedEntry::new(children, name)).collect()))
}

/// Values dated backwards from today, last row first.
fn line_series(rows: &[Row]) -> Series {
    let today = chrono::Local::now().date_naive();
    let n = rows.len() as i64;
    let points = rows
        .iter()
        .enumerate()
        .map(|(i, r)| LinePoint::new(r.value, today - chrono::Duration::days(n - 1 - i as i64)))
        .collect();
    Series::Line(points)
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push(format!("chart_{}.png", suffix));
    } else {
        out.push(format!("chart_{}_{}.png", stem, suffix));
    }
    out
}
