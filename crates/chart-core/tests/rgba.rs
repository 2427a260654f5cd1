// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and the background pixel.

use chart_core::{Chart, ChartOption, RenderOptions, Rgba, SeriesOption, Size};

#[test]
fn render_rgba8_buffer() {
    let option = ChartOption {
        series: vec![SeriesOption::with_data(vec![(0.0, 0.0), (4.0, 4.0)])],
        ..ChartOption::default()
    };
    let chart = Chart::headless(Size::new(320, 200), option);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts.background = Rgba::rgb(10, 20, 30);
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // top-left corner sits in the margin, outside the plot
    assert_eq!(&px[0..4], &[10, 20, 30, 255]);
}

#[test]
fn render_size_follows_layout_not_container() {
    let container = chart_core::Container::new(Size::new(300, 120));
    let mut chart = Chart::init(container.clone(), ChartOption::default());
    container.set_width(180);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (_, w, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w, 300, "container change is invisible until resize");

    chart.resize();
    let (_, w, h, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (180, 120));
}
