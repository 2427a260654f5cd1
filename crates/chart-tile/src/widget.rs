// File: crates/chart-tile/src/widget.rs
// Summary: The tile widget: mount/unmount state machine wiring the window, the chart
//          instance manager and the three trigger bridges.

use std::cell::RefCell;
use std::path::Path;
use std::rc::{Rc, Weak};

use anyhow::{anyhow, Result};
use chart_core::{Chart, ChartOption, RenderOptions, Size};

use crate::bridge::{DataBridge, ResizeBridge, ThemeBridge};
use crate::config::WidgetConfig;
use crate::error::ChartError;
use crate::host::Host;
use crate::manager::{ChartEngine, ChartHandle, ChartInstanceManager};
use crate::overlay::{OverlayColors, TileOverlay};
use crate::palette::{resolve, ThemeMode};
use crate::patch::{base_option, PatchKind, PatchRequest};
use crate::signal::Subscription;
use crate::window::{Reading, Window, WindowSnapshot};

/// Order in which a mounting widget subscribes its bridges to the host.
pub const BRIDGE_ORDER: [PatchKind; 3] = [PatchKind::Resize, PatchKind::Theme, PatchKind::Data];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetState {
    Unmounted,
    Mounting,
    Ready,
    Unmounting,
}

struct Bridges {
    resize: ResizeBridge,
    theme: ThemeBridge,
    data: DataBridge,
}

struct TileCore<E> {
    state: WidgetState,
    manager: ChartInstanceManager<E>,
    handle: Option<ChartHandle>,
    window: Window,
    bridges: Bridges,
    delivered: u64,
}

impl<E: ChartEngine> TileCore<E> {
    /// The one place patch requests reach the manager. Anything arriving
    /// outside `Ready` is dropped.
    fn deliver(&mut self, request: PatchRequest) {
        let kind = request.kind();
        let handle = match (self.state, self.handle) {
            (WidgetState::Ready, Some(handle)) => handle,
            (state, _) => {
                tracing::debug!(?kind, ?state, "patch dropped outside Ready");
                return;
            }
        };
        match self.manager.apply_patch(handle, &request) {
            Ok(()) => {
                self.delivered += 1;
                tracing::debug!(?kind, delivered = self.delivered, "patch applied");
            }
            Err(err) => {
                tracing::error!(%err, ?kind, "chart manager rejected a patch while Ready");
                debug_assert!(false, "chart manager rejected a patch while Ready: {err}");
            }
        }
    }

    fn on_width(&mut self, width: u32) {
        if let Some(request) = self.bridges.resize.observe(width) {
            self.deliver(request);
        }
    }

    fn on_theme(&mut self, theme: ThemeMode) {
        if let Some(request) = self.bridges.theme.observe(theme) {
            self.deliver(request);
        }
    }

    fn on_tick(&mut self, tick: Option<&Reading>) {
        if let Some(request) = self.bridges.data.observe(&mut self.window, tick) {
            self.deliver(request);
        }
    }
}

fn with_core<E: ChartEngine>(core: &Weak<RefCell<TileCore<E>>>, f: impl FnOnce(&mut TileCore<E>)) {
    if let Some(core) = core.upgrade() {
        f(&mut core.borrow_mut());
    }
}

/// A self-contained live chart tile over an engine `E`.
///
/// Mounting builds the base configuration from the host's current theme and
/// an empty (or seeded) window, creates the engine, then subscribes the
/// resize, theme and data bridges. Unmounting unsubscribes all three before
/// the engine is disposed, so no patch can reach a disposed instance.
pub struct Widget<E: ChartEngine> {
    core: Rc<RefCell<TileCore<E>>>,
    subscriptions: Vec<Subscription>,
    config: WidgetConfig,
}

impl<E: ChartEngine> Widget<E> {
    pub fn new(config: WidgetConfig, factory: impl FnMut(ChartOption) -> E + 'static) -> Self {
        let core = TileCore {
            state: WidgetState::Unmounted,
            manager: ChartInstanceManager::new(factory),
            handle: None,
            window: Window::new(config.window_len),
            bridges: Bridges {
                resize: ResizeBridge::new(0),
                theme: ThemeBridge::new(ThemeMode::default()),
                data: DataBridge::default(),
            },
            delivered: 0,
        };
        Self { core: Rc::new(RefCell::new(core)), subscriptions: Vec::new(), config }
    }

    pub fn state(&self) -> WidgetState {
        self.core.borrow().state
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Theme the chart currently shows.
    pub fn theme(&self) -> ThemeMode {
        self.core.borrow().bridges.theme.current()
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        self.core.borrow().window.snapshot()
    }

    /// Patch requests applied since construction.
    pub fn delivered_patches(&self) -> u64 {
        self.core.borrow().delivered
    }

    pub fn overlay(&self) -> TileOverlay {
        let core = self.core.borrow();
        TileOverlay::compose(
            &self.config,
            &core.window.snapshot(),
            core.window.capacity(),
            core.bridges.data.last_tick_empty(),
        )
    }

    /// Run `f` against the live engine; `None` unless mounted.
    pub fn with_engine<R>(&self, f: impl FnOnce(&E) -> R) -> Option<R> {
        let core = self.core.borrow();
        let handle = core.handle?;
        core.manager.inspect(handle).ok().map(f)
    }

    /// Leave `Ready`: unsubscribe every bridge, then dispose the engine.
    /// A no-op in any other state.
    pub fn unmount(&mut self) {
        {
            let mut core = self.core.borrow_mut();
            if core.state != WidgetState::Ready {
                return;
            }
            core.state = WidgetState::Unmounting;
        }
        for subscription in self.subscriptions.drain(..) {
            subscription.unsubscribe();
        }
        let mut core = self.core.borrow_mut();
        if let Some(handle) = core.handle.take() {
            if let Err(err) = core.manager.dispose(handle) {
                tracing::error!(%err, "dispose failed during unmount");
                debug_assert!(false, "dispose failed during unmount: {err}");
            }
        }
        core.state = WidgetState::Unmounted;
        tracing::info!(tile = %self.config.tile_id, delivered = core.delivered, "tile unmounted");
    }
}

impl<E: ChartEngine + 'static> Widget<E> {
    pub fn mount(&mut self, host: &Host) -> Result<(), ChartError> {
        self.mount_seeded(host, std::iter::empty())
    }

    /// Mount with the window prefilled from `seed` (oldest first). Only
    /// possible from `Unmounted`: any other state, `Unmounting` included,
    /// returns [`ChartError::AlreadyMounted`].
    pub fn mount_seeded(&mut self, host: &Host, seed: impl IntoIterator<Item = Reading>) -> Result<(), ChartError> {
        {
            let mut core = self.core.borrow_mut();
            if core.state != WidgetState::Unmounted {
                return Err(ChartError::AlreadyMounted);
            }
            core.state = WidgetState::Mounting;

            let mut window = Window::new(self.config.window_len);
            for reading in seed {
                window.append(reading);
            }
            let theme = host.theme().get();
            let base = base_option(&resolve(theme), &window.snapshot());
            core.window = window;
            core.bridges = Bridges {
                resize: ResizeBridge::new(host.width().get()),
                theme: ThemeBridge::new(theme),
                data: DataBridge::default(),
            };
            let mounted = core.manager.mount(base);
            match mounted {
                Ok(handle) => core.handle = Some(handle),
                Err(err) => {
                    core.state = WidgetState::Unmounted;
                    return Err(err);
                }
            }
            core.state = WidgetState::Ready;
        }

        let weak = Rc::downgrade(&self.core);
        for kind in BRIDGE_ORDER {
            let core = weak.clone();
            let subscription = match kind {
                PatchKind::Resize => host.width().subscribe(move |width| with_core(&core, |c| c.on_width(*width))),
                PatchKind::Theme => host.theme().subscribe(move |theme| with_core(&core, |c| c.on_theme(*theme))),
                PatchKind::Data => host.ticks().subscribe(move |tick| with_core(&core, |c| c.on_tick(tick.as_ref()))),
            };
            self.subscriptions.push(subscription);
        }

        tracing::info!(
            tile = %self.config.tile_id,
            window_len = self.config.window_len,
            seeded = self.core.borrow().window.len(),
            "tile mounted"
        );
        Ok(())
    }
}

impl<E: ChartEngine> Drop for Widget<E> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// The tile over the Skia-backed engine.
pub type ChartTile = Widget<Chart>;

impl Widget<Chart> {
    /// Engine instances draw into the host's container at the configured
    /// fixed height.
    pub fn for_host(config: WidgetConfig, host: &Host) -> Self {
        let container = host.container();
        let height = config.height_px;
        Self::new(config, move |base| {
            let width = container.size().width;
            container.set_size(Size { width, height });
            Chart::init(container.clone(), base)
        })
    }

    /// Frame inputs: tile background and the header/footer overlay.
    pub fn frame(&self, crosshair: Option<(f32, f32)>) -> RenderOptions {
        let theme = self.theme();
        RenderOptions {
            background: OverlayColors::for_theme(theme).background,
            draw_labels: true,
            crosshair,
            annotations: self.overlay().annotations(theme),
        }
    }

    pub fn render_rgba8(&self, crosshair: Option<(f32, f32)>) -> Result<(Vec<u8>, i32, i32, usize)> {
        let frame = self.frame(crosshair);
        self.with_engine(|chart| chart.render_to_rgba8(&frame))
            .ok_or_else(|| anyhow!("tile is not mounted"))?
    }

    pub fn render_png_bytes(&self, crosshair: Option<(f32, f32)>) -> Result<Vec<u8>> {
        let frame = self.frame(crosshair);
        self.with_engine(|chart| chart.render_to_png_bytes(&frame))
            .ok_or_else(|| anyhow!("tile is not mounted"))?
    }

    pub fn render_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let frame = self.frame(None);
        self.with_engine(|chart| chart.render_to_png(&frame, path))
            .ok_or_else(|| anyhow!("tile is not mounted"))?
    }
}
