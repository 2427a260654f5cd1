// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshots with bless flow for the light and dark area styles.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and returns without failing to ease first run.

use chart_core::{
    AreaOrigin, AreaStyle, AxisOption, BoundaryGap, Chart, ChartOption, ColorStop, Fill, LinearGradient,
    RenderOptions, Rgba, SeriesOption, Size,
};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // decoded pixels avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_area(line: Rgba, top: Rgba, bottom: Rgba, background: Rgba) -> Vec<u8> {
    let data = vec![(0.0, 1.0), (1.0, 1.2), (2.0, 0.8), (3.0, 1.8), (4.0, 1.0), (5.0, 1.4)];
    let option = ChartOption {
        x_axis: Some(AxisOption::value()),
        y_axis: Some(AxisOption { boundary_gap: Some(BoundaryGap { min: 0.0, max: 1.0 }), ..AxisOption::value() }),
        series: vec![SeriesOption {
            color: Some(line),
            area_style: Some(AreaStyle {
                fill: Some(Fill::Linear(LinearGradient::vertical(vec![
                    ColorStop::new(0.0, top),
                    ColorStop::new(1.0, bottom),
                ]))),
                origin: Some(AreaOrigin::Start),
                opacity: Some(0.62),
            }),
            data: Some(data),
            ..SeriesOption::default()
        }],
        ..ChartOption::default()
    };
    let chart = Chart::headless(Size::new(400, 300), option);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // deterministic
    opts.background = background;
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_area_light() {
    let bytes = render_area(
        Rgba::rgba(0, 0, 0, 0.6),
        Rgba::rgba(0, 0, 0, 0.2),
        Rgba::rgba(0, 0, 0, 0.01),
        Rgba::rgb(0xee, 0xfc, 0xfd),
    );
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/area_light.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_area_dark() {
    let bytes = render_area(
        Rgba::rgba(153, 250, 255, 0.8),
        Rgba::rgba(153, 250, 255, 0.08),
        Rgba::rgba(153, 250, 255, 0.01),
        Rgba::rgb(0x0e, 0x1a, 0x1f),
    );
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/area_dark.png");
    write_or_compare(&path, &bytes);
}
