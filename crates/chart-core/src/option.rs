// File: crates/chart-core/src/option.rs
// Summary: Declarative chart configuration tree and its merge rules.
// Notes:
// - Every field is optional, so the same type describes a full configuration
//   and a partial patch handed to `Chart::set_option`.
// - Merge: `None` leaves the target untouched; nested objects merge field by
//   field; series merge by index; arrays (data, gradient stops) replace.

use crate::color::Rgba;
use crate::geometry::Insets;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartOption {
    pub grid: Option<GridOption>,
    pub x_axis: Option<AxisOption>,
    pub y_axis: Option<AxisOption>,
    pub tooltip: Option<TooltipOption>,
    pub series: Vec<SeriesOption>,
}

impl ChartOption {
    /// Merge `patch` into `self` in place.
    pub fn merge(&mut self, patch: ChartOption) {
        merge_field(&mut self.grid, patch.grid);
        merge_field(&mut self.x_axis, patch.x_axis);
        merge_field(&mut self.y_axis, patch.y_axis);
        merge_field(&mut self.tooltip, patch.tooltip);
        for (i, s) in patch.series.into_iter().enumerate() {
            match self.series.get_mut(i) {
                Some(target) => target.merge(s),
                None => self.series.push(s),
            }
        }
    }

    /// Convenience for patches that only touch series `index`.
    pub fn with_series_at(index: usize, series: SeriesOption) -> Self {
        let mut series_list = vec![SeriesOption::default(); index];
        series_list.push(series);
        Self { series: series_list, ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        *self == ChartOption::default()
    }

    pub fn series_data(&self, index: usize) -> Option<&[(f64, f64)]> {
        self.series.get(index)?.data.as_deref()
    }
}

/// Field-level merge for option objects.
pub trait Merge {
    fn merge(&mut self, patch: Self);
}

fn merge_field<T: Merge>(target: &mut Option<T>, patch: Option<T>) {
    match (target.as_mut(), patch) {
        (Some(t), Some(p)) => t.merge(p),
        (None, Some(p)) => *target = Some(p),
        (_, None) => {}
    }
}

fn replace_field<T>(target: &mut Option<T>, patch: Option<T>) {
    if patch.is_some() {
        *target = patch;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridOption {
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub top: Option<u32>,
    pub bottom: Option<u32>,
}

impl GridOption {
    pub fn insets(&self) -> Insets {
        let d = Insets::default();
        Insets::new(
            self.left.unwrap_or(d.left),
            self.right.unwrap_or(d.right),
            self.top.unwrap_or(d.top),
            self.bottom.unwrap_or(d.bottom),
        )
    }
}

impl Merge for GridOption {
    fn merge(&mut self, patch: Self) {
        replace_field(&mut self.left, patch.left);
        replace_field(&mut self.right, patch.right);
        replace_field(&mut self.top, patch.top);
        replace_field(&mut self.bottom, patch.bottom);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisKind {
    /// Values are epoch milliseconds, labels are formatted as clock times.
    Time,
    #[default]
    Value,
}

/// Extra room around the data extent, as fractions of the data span.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundaryGap {
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisOption {
    pub kind: Option<AxisKind>,
    pub name: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub boundary_gap: Option<BoundaryGap>,
    pub split_line: Option<bool>,
    pub show_labels: Option<bool>,
}

impl AxisOption {
    pub fn time() -> Self {
        Self { kind: Some(AxisKind::Time), ..Self::default() }
    }

    pub fn value() -> Self {
        Self { kind: Some(AxisKind::Value), ..Self::default() }
    }

    pub fn kind(&self) -> AxisKind {
        self.kind.unwrap_or_default()
    }
}

impl Merge for AxisOption {
    fn merge(&mut self, patch: Self) {
        replace_field(&mut self.kind, patch.kind);
        replace_field(&mut self.name, patch.name);
        replace_field(&mut self.min, patch.min);
        replace_field(&mut self.max, patch.max);
        replace_field(&mut self.boundary_gap, patch.boundary_gap);
        replace_field(&mut self.split_line, patch.split_line);
        replace_field(&mut self.show_labels, patch.show_labels);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TooltipTrigger {
    #[default]
    Axis,
    Item,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TooltipOption {
    pub show: Option<bool>,
    pub trigger: Option<TooltipTrigger>,
    pub background: Option<Rgba>,
    pub text_color: Option<Rgba>,
    pub border_radius: Option<f32>,
}

impl Merge for TooltipOption {
    fn merge(&mut self, patch: Self) {
        replace_field(&mut self.show, patch.show);
        replace_field(&mut self.trigger, patch.trigger);
        replace_field(&mut self.background, patch.background);
        replace_field(&mut self.text_color, patch.text_color);
        replace_field(&mut self.border_radius, patch.border_radius);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Gradient direction in coordinates relative to the filled shape's bounds:
/// (x, y) is the start point, (x2, y2) the end point, all in [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub x: f32,
    pub y: f32,
    pub x2: f32,
    pub y2: f32,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Top-to-bottom gradient.
    pub fn vertical(stops: Vec<ColorStop>) -> Self {
        Self { x: 0.0, y: 0.0, x2: 0.0, y2: 1.0, stops }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(Rgba),
    Linear(LinearGradient),
}

/// Where the area under a line is closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AreaOrigin {
    /// Axis minimum.
    Start,
    /// Axis maximum.
    End,
    /// Zero, clamped into the visible range.
    #[default]
    Auto,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaStyle {
    pub fill: Option<Fill>,
    pub origin: Option<AreaOrigin>,
    pub opacity: Option<f32>,
}

impl Merge for AreaStyle {
    fn merge(&mut self, patch: Self) {
        replace_field(&mut self.fill, patch.fill);
        replace_field(&mut self.origin, patch.origin);
        replace_field(&mut self.opacity, patch.opacity);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesOption {
    pub name: Option<String>,
    pub color: Option<Rgba>,
    pub line_width: Option<f32>,
    pub show_symbol: Option<bool>,
    pub area_style: Option<AreaStyle>,
    pub data: Option<Vec<(f64, f64)>>,
}

impl SeriesOption {
    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data: Some(data), ..Self::default() }
    }
}

impl Merge for SeriesOption {
    fn merge(&mut self, patch: Self) {
        replace_field(&mut self.name, patch.name);
        replace_field(&mut self.color, patch.color);
        replace_field(&mut self.line_width, patch.line_width);
        replace_field(&mut self.show_symbol, patch.show_symbol);
        merge_field(&mut self.area_style, patch.area_style);
        replace_field(&mut self.data, patch.data);
    }
}
