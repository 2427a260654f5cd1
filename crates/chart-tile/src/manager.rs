// File: crates/chart-tile/src/manager.rs
// Summary: Owns the single live rendering-engine instance and applies targeted patches to it.

use chart_core::{Chart, ChartOption};

use crate::error::ChartError;
use crate::patch::PatchRequest;

/// Operations the manager needs from a rendering engine.
pub trait ChartEngine {
    /// Apply `option`; with `merge` only the subtrees it carries change.
    fn set_option(&mut self, option: ChartOption, merge: bool);
    /// Recompute layout from the current container dimensions.
    fn resize(&mut self);
    fn dispose(&mut self);
}

impl ChartEngine for Chart {
    fn set_option(&mut self, option: ChartOption, merge: bool) {
        Chart::set_option(self, option, merge)
    }

    fn resize(&mut self) {
        Chart::resize(self)
    }

    fn dispose(&mut self) {
        Chart::dispose(self)
    }
}

/// Opaque token naming one mounted engine instance. Only the manager mints
/// them; a token outlives its instance only as a stale reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChartHandle {
    id: u64,
}

pub type EngineFactory<E> = Box<dyn FnMut(ChartOption) -> E>;

/// Holds at most one engine instance at a time.
pub struct ChartInstanceManager<E> {
    factory: EngineFactory<E>,
    live: Option<(ChartHandle, E)>,
    issued: u64,
}

impl<E: ChartEngine> ChartInstanceManager<E> {
    pub fn new(factory: impl FnMut(ChartOption) -> E + 'static) -> Self {
        Self { factory: Box::new(factory), live: None, issued: 0 }
    }

    pub fn is_mounted(&self) -> bool {
        self.live.is_some()
    }

    /// Create the engine with the full base configuration.
    pub fn mount(&mut self, base: ChartOption) -> Result<ChartHandle, ChartError> {
        if self.live.is_some() {
            return Err(ChartError::AlreadyMounted);
        }
        self.issued += 1;
        let handle = ChartHandle { id: self.issued };
        let engine = (self.factory)(base);
        self.live = Some((handle, engine));
        tracing::debug!(handle = handle.id, "chart instance mounted");
        Ok(handle)
    }

    /// Merge the subtree implied by the request's kind into the live option.
    pub fn apply_patch(&mut self, handle: ChartHandle, request: &PatchRequest) -> Result<(), ChartError> {
        let engine = self.live_mut(handle)?;
        match request.to_option() {
            Some(option) => engine.set_option(option, true),
            None => engine.resize(),
        }
        Ok(())
    }

    pub fn resize(&mut self, handle: ChartHandle) -> Result<(), ChartError> {
        self.live_mut(handle)?.resize();
        Ok(())
    }

    /// Release the instance. Disposing a token twice reports `AlreadyDisposed`.
    pub fn dispose(&mut self, handle: ChartHandle) -> Result<(), ChartError> {
        match self.live.take() {
            Some((live, mut engine)) if live == handle => {
                engine.dispose();
                tracing::debug!(handle = handle.id, "chart instance disposed");
                Ok(())
            }
            other => {
                self.live = other;
                if handle.id <= self.issued {
                    Err(ChartError::AlreadyDisposed)
                } else {
                    Err(ChartError::NotMounted)
                }
            }
        }
    }

    /// Read access to the live engine, e.g. for rendering a frame.
    pub fn inspect(&self, handle: ChartHandle) -> Result<&E, ChartError> {
        match &self.live {
            Some((live, engine)) if *live == handle => Ok(engine),
            _ => Err(ChartError::NotMounted),
        }
    }

    fn live_mut(&mut self, handle: ChartHandle) -> Result<&mut E, ChartError> {
        match &mut self.live {
            Some((live, engine)) if *live == handle => Ok(engine),
            _ => Err(ChartError::NotMounted),
        }
    }
}
