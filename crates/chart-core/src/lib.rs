// File: crates/chart-core/src/lib.rs
// Summary: Chart engine entry point; exports the option tree, the long-lived `Chart`
//          instance and its rendering options.

pub mod axis;
pub mod chart;
pub mod color;
pub mod container;
pub mod geometry;
pub mod option;
pub mod scale;
pub mod text;
pub mod view;

pub use chart::{Annotation, Chart, Corner, RenderOptions};
pub use color::{ColorParseError, Rgba};
pub use container::Container;
pub use geometry::{Insets, RectI32, Size};
pub use option::{
    AreaOrigin, AreaStyle, AxisKind, AxisOption, BoundaryGap, ChartOption, ColorStop, Fill, GridOption,
    LinearGradient, SeriesOption, TooltipOption, TooltipTrigger,
};
pub use text::{HAlign, TextShaper};
pub use view::ViewState;

/// Engine identification shown in tile footers.
pub const ENGINE_NAME: &str = "CHART-CORE";
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
