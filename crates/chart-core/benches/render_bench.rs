use anyhow::Result;
use chart_core::{AreaStyle, AxisOption, Chart, ChartOption, RenderOptions, SeriesOption, Size};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_area_chart(n: usize) -> Chart {
    let data = (0..n)
        .map(|i| (i as f64 * 1_000.0, (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)))
        .collect();
    let option = ChartOption {
        x_axis: Some(AxisOption::time()),
        y_axis: Some(AxisOption::value()),
        series: vec![SeriesOption {
            area_style: Some(AreaStyle::default()),
            data: Some(data),
            ..SeriesOption::default()
        }],
        ..ChartOption::default()
    };
    Chart::headless(Size::new(800, 300), option)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[100usize, 1_000usize, 10_000usize] {
        group.bench_function(format!("area_{n}"), |b| {
            let ch = build_area_chart(n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
