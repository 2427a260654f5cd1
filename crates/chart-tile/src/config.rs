// File: crates/chart-tile/src/config.rs
// Summary: Tile configuration; every field has a default so partial files and env overrides deserialize.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::window::DEFAULT_WINDOW_LEN;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Readings kept on screen.
    pub window_len: usize,
    /// Fixed chart surface height.
    pub height_px: u32,
    /// Period of the data source tick.
    pub tick_interval_ms: u64,
    pub tile_id: String,
    pub dataset: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            window_len: DEFAULT_WINDOW_LEN,
            height_px: 300,
            tick_interval_ms: 1_000,
            tile_id: "255212".into(),
            dataset: "POLARIS".into(),
        }
    }
}

impl WidgetConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Defaults, overlaid by the TOML file at `path` (if any), overlaid by
    /// `TILE_*` environment variables (`TILE_WINDOW_LEN=50`).
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path));
        }
        let settings = builder
            .add_source(::config::Environment::with_prefix("TILE").try_parsing(true))
            .build()
            .context("reading tile settings")?;
        Ok(settings.try_deserialize()?)
    }
}
