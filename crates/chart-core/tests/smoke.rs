// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end render smoke test for a gradient area series writing a PNG.

use chart_core::{
    AreaOrigin, AreaStyle, AxisOption, Chart, ChartOption, ColorStop, Fill, LinearGradient, RenderOptions, Rgba,
    SeriesOption, Size,
};

fn area_option() -> ChartOption {
    let data = (0..20).map(|i| (i as f64 * 1_000.0, 10.0 + (i as f64 * 0.6).sin() * 4.0)).collect();
    ChartOption {
        x_axis: Some(AxisOption::time()),
        y_axis: Some(AxisOption::value()),
        series: vec![SeriesOption {
            color: Some(Rgba::rgba(0, 0, 0, 0.6)),
            area_style: Some(AreaStyle {
                fill: Some(Fill::Linear(LinearGradient::vertical(vec![
                    ColorStop::new(0.0, Rgba::rgba(0, 0, 0, 0.2)),
                    ColorStop::new(1.0, Rgba::rgba(0, 0, 0, 0.01)),
                ]))),
                origin: Some(AreaOrigin::Start),
                opacity: Some(0.62),
            }),
            data: Some(data),
            ..SeriesOption::default()
        }],
        ..ChartOption::default()
    }
}

#[test]
fn render_smoke_png() {
    let chart = Chart::headless(Size::new(400, 300), area_option());

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&RenderOptions::default(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_with_tooltip_and_annotations() {
    let chart = Chart::headless(Size::new(400, 300), area_option());
    let mut opts = RenderOptions::default();
    opts.crosshair = Some((200.0, 150.0));
    opts.annotations = vec![chart_core::Annotation {
        text: "CURRENT STREAM: 1: 2".into(),
        corner: chart_core::Corner::BottomLeft,
        row: 0,
        color: Rgba::rgb(0, 0, 0),
        background: Some(Rgba::rgb(0x99, 0xfa, 0xff)),
    }];
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn disposed_chart_refuses_to_render() {
    let mut chart = Chart::headless(Size::new(200, 100), area_option());
    chart.dispose();
    assert!(chart.is_disposed());
    assert!(chart.render_to_png_bytes(&RenderOptions::default()).is_err());
}
