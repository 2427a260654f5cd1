// File: crates/chart-tile/src/overlay.rs
// Summary: Header/footer text drawn over the tile and its per-theme colors.

use std::fmt;

use chart_core::{Annotation, Corner, Rgba, ENGINE_NAME, ENGINE_VERSION};

use crate::config::WidgetConfig;
use crate::palette::ThemeMode;
use crate::window::WindowSnapshot;

pub const CONNECTION_OK: &str = "SOCKET_CONN_OK";

/// State of the sample window as shown in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleHealth {
    /// Nothing received yet.
    Waiting,
    /// The most recent tick carried no reading.
    Stale,
    Filling { len: usize, capacity: usize },
    Ok,
}

impl SampleHealth {
    pub fn assess(len: usize, capacity: usize, last_tick_empty: bool) -> Self {
        if len == 0 {
            SampleHealth::Waiting
        } else if last_tick_empty {
            SampleHealth::Stale
        } else if len < capacity {
            SampleHealth::Filling { len, capacity }
        } else {
            SampleHealth::Ok
        }
    }
}

impl fmt::Display for SampleHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleHealth::Waiting => f.write_str("WAITING"),
            SampleHealth::Stale => f.write_str("STALE"),
            SampleHealth::Filling { len, capacity } => write!(f, "FILLING {len}/{capacity}"),
            SampleHealth::Ok => f.write_str("OK"),
        }
    }
}

/// Text content of the tile chrome.
#[derive(Clone, Debug, PartialEq)]
pub struct TileOverlay {
    pub tile_id: String,
    pub dataset: String,
    pub health: SampleHealth,
    /// Most recent reading, absent while the window is empty or the last
    /// tick was empty.
    pub current_stream: Option<String>,
}

impl TileOverlay {
    pub fn compose(config: &WidgetConfig, snapshot: &WindowSnapshot, capacity: usize, last_tick_empty: bool) -> Self {
        let current_stream = if last_tick_empty {
            None
        } else {
            snapshot.latest().map(ToString::to_string)
        };
        Self {
            tile_id: config.tile_id.clone(),
            dataset: config.dataset.clone(),
            health: SampleHealth::assess(snapshot.len(), capacity, last_tick_empty),
            current_stream,
        }
    }

    pub fn header(&self) -> [String; 3] {
        [format!("ID {}", self.tile_id), format!("DATA SET: {}", self.dataset), CONNECTION_OK.to_string()]
    }

    /// Footer lines, top to bottom. The stream line is skipped when absent.
    pub fn footer(&self) -> Vec<String> {
        let mut lines = vec![format!("SAMPLE HEALTH: {}", self.health)];
        if let Some(stream) = &self.current_stream {
            lines.push(format!("CURRENT STREAM: {stream}"));
        }
        lines
    }

    pub fn engine_label() -> [String; 2] {
        [ENGINE_NAME.to_string(), format!("V. {ENGINE_VERSION}")]
    }

    pub fn annotations(&self, theme: ThemeMode) -> Vec<Annotation> {
        let colors = OverlayColors::for_theme(theme);
        let [id, dataset, conn] = self.header();
        let mut out = vec![
            Annotation { text: id, corner: Corner::TopLeft, row: 0, color: colors.badge_text, background: Some(colors.badge) },
            Annotation { text: dataset, corner: Corner::TopLeft, row: 1, color: colors.text, background: None },
            Annotation { text: conn, corner: Corner::TopRight, row: 0, color: colors.text, background: None },
        ];
        // bottom rows count upwards; the health line keeps its row whether or
        // not the stream line is shown
        out.push(Annotation {
            text: format!("SAMPLE HEALTH: {}", self.health),
            corner: Corner::BottomLeft,
            row: 1,
            color: colors.text,
            background: None,
        });
        if let Some(stream) = &self.current_stream {
            out.push(Annotation {
                text: format!("CURRENT STREAM: {stream}"),
                corner: Corner::BottomLeft,
                row: 0,
                color: colors.text,
                background: None,
            });
        }
        let [name, version] = Self::engine_label();
        out.push(Annotation { text: name, corner: Corner::BottomRight, row: 1, color: colors.text, background: None });
        out.push(Annotation { text: version, corner: Corner::BottomRight, row: 0, color: colors.text, background: None });
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayColors {
    pub background: Rgba,
    pub text: Rgba,
    pub badge: Rgba,
    pub badge_text: Rgba,
}

impl OverlayColors {
    pub fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Light => Self {
                background: Rgba::rgb(0xee, 0xfc, 0xfd),
                text: Rgba::rgb(0x3c, 0x3f, 0x46),
                badge: Rgba::rgb(0x99, 0xfa, 0xff),
                badge_text: Rgba::rgb(0x18, 0x19, 0x23),
            },
            ThemeMode::Dark => Self {
                background: Rgba::rgb(0x0e, 0x1a, 0x1f),
                text: Rgba::rgb(0xc9, 0xd1, 0xd9),
                badge: Rgba::rgb(0x99, 0xfa, 0xff),
                badge_text: Rgba::rgb(0x18, 0x19, 0x23),
            },
        }
    }
}
