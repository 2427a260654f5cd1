// File: crates/chart-tile/src/patch.rs
// Summary: Patch requests produced by the trigger bridges, and the base configuration
//          a chart instance is mounted with.

use chart_core::{AxisOption, BoundaryGap, ChartOption, GridOption, SeriesOption};

use crate::palette::Palette;
use crate::window::WindowSnapshot;

/// A targeted update for the live chart. Each variant touches its own option
/// subtree: layout only, style only, or data only.
#[derive(Clone, Debug, PartialEq)]
pub enum PatchRequest {
    /// Container dimensions changed; carries nothing.
    Resize,
    ThemeChanged(Palette),
    DataAppended(WindowSnapshot),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatchKind {
    Resize,
    Theme,
    Data,
}

impl PatchRequest {
    pub fn kind(&self) -> PatchKind {
        match self {
            PatchRequest::Resize => PatchKind::Resize,
            PatchRequest::ThemeChanged(_) => PatchKind::Theme,
            PatchRequest::DataAppended(_) => PatchKind::Data,
        }
    }

    /// Partial option to merge into the live chart. `None` for layout-only
    /// requests.
    pub fn to_option(&self) -> Option<ChartOption> {
        match self {
            PatchRequest::Resize => None,
            PatchRequest::ThemeChanged(palette) => Some(palette.to_option()),
            PatchRequest::DataAppended(snapshot) => Some(data_option(snapshot)),
        }
    }
}

/// Data-only patch: `series[0].data` and nothing else.
pub fn data_option(snapshot: &WindowSnapshot) -> ChartOption {
    ChartOption::with_series_at(0, SeriesOption::with_data(snapshot.points()))
}

/// Full configuration a chart is mounted with: layout, axes, series shape,
/// then the palette's style subtree and the window's data.
pub fn base_option(palette: &Palette, snapshot: &WindowSnapshot) -> ChartOption {
    let mut option = ChartOption {
        // header rows above the plot, footer rows below the axis labels
        grid: Some(GridOption { left: Some(44), right: Some(16), top: Some(52), bottom: Some(64) }),
        x_axis: Some(AxisOption {
            boundary_gap: Some(BoundaryGap { min: 0.0, max: 0.0 }),
            split_line: Some(false),
            ..AxisOption::time()
        }),
        y_axis: Some(AxisOption {
            boundary_gap: Some(BoundaryGap { min: 0.0, max: 1.0 }),
            split_line: Some(true),
            ..AxisOption::value()
        }),
        tooltip: None,
        series: vec![SeriesOption {
            name: Some("stream".into()),
            line_width: Some(1.5),
            show_symbol: Some(false),
            ..SeriesOption::default()
        }],
    };
    option.merge(palette.to_option());
    option.merge(data_option(snapshot));
    option
}
