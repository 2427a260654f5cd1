// File: crates/chart-tile/src/host.rs
// Summary: The widget's environment: container size, width observer, theme provider and data ticks.

use chart_core::{Container, Size};

use crate::palette::ThemeMode;
use crate::signal::{Channel, Signal};
use crate::window::Reading;

/// What a tile is mounted into. Clones share the same signals.
#[derive(Clone)]
pub struct Host {
    container: Container,
    width: Signal<u32>,
    theme: Signal<ThemeMode>,
    ticks: Channel<Option<Reading>>,
}

impl Host {
    pub fn new(size: Size, theme: ThemeMode) -> Self {
        Self {
            container: Container::new(size),
            width: Signal::new(size.width),
            theme: Signal::new(theme),
            ticks: Channel::new(),
        }
    }

    pub fn container(&self) -> Container {
        self.container.clone()
    }

    pub fn width(&self) -> &Signal<u32> {
        &self.width
    }

    pub fn theme(&self) -> &Signal<ThemeMode> {
        &self.theme
    }

    pub fn ticks(&self) -> &Channel<Option<Reading>> {
        &self.ticks
    }

    /// Update the container first so observers of the width see the new size.
    pub fn resize_container(&self, width: u32) {
        self.container.set_width(width);
        self.width.set(width);
    }

    pub fn set_theme(&self, theme: ThemeMode) {
        self.theme.set(theme);
    }

    pub fn toggle_theme(&self) -> ThemeMode {
        let next = self.theme.get().toggle();
        self.theme.set(next);
        next
    }

    /// Deliver one data tick. `None` models a tick that carried no reading.
    pub fn tick(&self, reading: Option<Reading>) {
        self.ticks.emit(&reading);
    }
}
