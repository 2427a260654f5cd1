// File: crates/chart-tile/src/lib.rs
// Summary: Live area-chart tile. A bounded window of readings, a theme palette and container
//          resizes each drive targeted patches into one long-lived chart instance.

pub mod bridge;
pub mod config;
pub mod error;
pub mod host;
pub mod manager;
pub mod overlay;
pub mod palette;
pub mod patch;
pub mod signal;
pub mod source;
pub mod widget;
pub mod window;

pub use bridge::{DataBridge, ResizeBridge, ThemeBridge};
pub use config::WidgetConfig;
pub use error::ChartError;
pub use host::Host;
pub use manager::{ChartEngine, ChartHandle, ChartInstanceManager};
pub use overlay::{OverlayColors, SampleHealth, TileOverlay};
pub use palette::{resolve, Palette, ThemeMode};
pub use patch::{base_option, PatchKind, PatchRequest};
pub use signal::{Channel, Signal, Subscription};
pub use source::{DataSource, SyntheticSource};
pub use widget::{ChartTile, Widget, WidgetState, BRIDGE_ORDER};
pub use window::{Reading, Window, WindowSnapshot, DEFAULT_WINDOW_LEN};
