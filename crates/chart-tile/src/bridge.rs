// File: crates/chart-tile/src/bridge.rs
// Summary: Resize, theme and data-tick observers that turn host notifications into patch requests.

use crate::palette::{resolve, ThemeMode};
use crate::patch::PatchRequest;
use crate::window::{Reading, Window};

/// Emits `Resize` when the observed width differs from the last one seen.
#[derive(Clone, Copy, Debug)]
pub struct ResizeBridge {
    last_width: u32,
}

impl ResizeBridge {
    /// Seeded with the width at subscription time, so that width never emits.
    pub fn new(initial_width: u32) -> Self {
        Self { last_width: initial_width }
    }

    pub fn observe(&mut self, width: u32) -> Option<PatchRequest> {
        if width == self.last_width {
            return None;
        }
        tracing::debug!(from = self.last_width, to = width, "container width changed");
        self.last_width = width;
        Some(PatchRequest::Resize)
    }
}

/// Emits `ThemeChanged` with the resolved palette when the theme flips.
#[derive(Clone, Copy, Debug)]
pub struct ThemeBridge {
    last: ThemeMode,
}

impl ThemeBridge {
    /// Seeded with the theme the base configuration was built from.
    pub fn new(initial: ThemeMode) -> Self {
        Self { last: initial }
    }

    pub fn current(&self) -> ThemeMode {
        self.last
    }

    pub fn observe(&mut self, theme: ThemeMode) -> Option<PatchRequest> {
        if theme == self.last {
            return None;
        }
        self.last = theme;
        Some(PatchRequest::ThemeChanged(resolve(theme)))
    }
}

/// Appends ticks to the window and emits `DataAppended`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataBridge {
    ticks: u64,
    empty_ticks: u64,
    last_tick_empty: bool,
}

impl DataBridge {
    pub fn observe(&mut self, window: &mut Window, tick: Option<&Reading>) -> Option<PatchRequest> {
        self.ticks += 1;
        let Some(reading) = tick else {
            self.empty_ticks += 1;
            self.last_tick_empty = true;
            tracing::trace!(empty_ticks = self.empty_ticks, "empty tick skipped");
            return None;
        };
        self.last_tick_empty = false;
        let snapshot = window.append(*reading);
        (!snapshot.is_empty()).then_some(PatchRequest::DataAppended(snapshot))
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn empty_ticks(&self) -> u64 {
        self.empty_ticks
    }

    pub fn last_tick_empty(&self) -> bool {
        self.last_tick_empty
    }
}
