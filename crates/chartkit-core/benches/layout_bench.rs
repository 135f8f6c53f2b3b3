use std::time::Instant;

use chartkit_core::{
    reconcile, Chart, ChartConfig, ChartOption, Entry, MatchPolicy, Rgba, Series, SeriesBuilder, Size, Theme,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_series(n: usize) -> Series {
    let entries = (0..n)
        .map(|i| {
            let v = (i as f64 * 0.01).sin() * 10.0 + 12.0;
            Entry::new(v, format!("{i}"), Rgba::from_argb(255, 40, 120, 220))
        })
        .collect();
    Series::Bars(entries)
}

fn bench_build(c: &mut Criterion) {
    let config = ChartConfig::default().with_options(&[ChartOption::MinBarWidth(4.0), ChartOption::MinSpacing(2.0)]);
    let theme = Theme::default();
    let mut group = c.benchmark_group("build_bars");
    for &n in &[1_000usize, 10_000usize] {
        let series = build_series(n);
        group.bench_function(format!("bars_{n}"), |b| {
            b.iter(|| {
                let layout = SeriesBuilder::new(&config, &theme).build(black_box(&series), Size::new(800.0, 500.0));
                black_box(layout.bars.len());
            });
        });
    }
    group.finish();
}

fn bench_reconcile(c: &mut Criterion) {
    let config = ChartConfig::default();
    let theme = Theme::default();
    let builder = SeriesBuilder::new(&config, &theme);
    let old = builder.build(&build_series(10_000), Size::new(800.0, 500.0)).bars;
    let new = builder.build(&build_series(9_000), Size::new(800.0, 500.0)).bars;

    let mut group = c.benchmark_group("reconcile");
    for policy in [MatchPolicy::Positional, MatchPolicy::Keyed] {
        group.bench_function(format!("{policy:?}"), |b| {
            b.iter(|| black_box(reconcile(&old, &new, policy).matched_count()));
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut chart = Chart::new(Size::new(800.0, 500.0));
    let a = build_series(2_000);
    let b = build_series(2_100);
    let mut flip = false;
    c.bench_function("chart_update_entries_2k", |bench| {
        bench.iter(|| {
            flip = !flip;
            let next = if flip { b.clone() } else { a.clone() };
            black_box(chart.update_entries(next, 0.5, Instant::now()).len());
        });
    });
}

criterion_group!(benches, bench_build, bench_reconcile, bench_update);
criterion_main!(benches);
