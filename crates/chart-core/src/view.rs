// File: crates/chart-core/src/view.rs
// Summary: Visible data ranges derived from the option tree (axis bounds, boundary gaps, autoscale).

use crate::option::{AxisOption, ChartOption};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    pub fn from_option(option: &ChartOption) -> Self {
        let (x_data, y_data) = data_extents(option);
        let (x_min, x_max) = resolve_extent(option.x_axis.as_ref(), x_data);
        let (y_min, y_max) = resolve_extent(option.y_axis.as_ref(), y_data);
        Self { x_min, x_max, y_min, y_max }
    }
}

/// Min/max over all series points, per axis. `None` when there is no data.
pub fn data_extents(option: &ChartOption) -> (Option<(f64, f64)>, Option<(f64, f64)>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for s in &option.series {
        for &(x, y) in s.data.iter().flatten() {
            if !(x.is_finite() && y.is_finite()) {
                continue;
            }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !x_min.is_finite() {
        return (None, None);
    }
    (Some((x_min, x_max)), Some((y_min, y_max)))
}

/// Apply boundary gap and explicit bounds to a data extent.
pub fn resolve_extent(axis: Option<&AxisOption>, data: Option<(f64, f64)>) -> (f64, f64) {
    let (lo, hi) = data.unwrap_or((0.0, 1.0));
    let span = hi - lo;
    let gap = axis.and_then(|a| a.boundary_gap).unwrap_or_default();
    let mut min = lo - span * gap.min;
    let mut max = hi + span * gap.max;
    if let Some(axis) = axis {
        if let Some(m) = axis.min { min = m; }
        if let Some(m) = axis.max { max = m; }
    }
    if (max - min).abs() < 1e-9 {
        // flat data: open a unit window above it
        max = min + 1.0;
    }
    (min, max)
}
