// File: crates/chart-core/src/container.rs
// Summary: Host-owned container size that a mounted chart reads when asked to resize.

use std::cell::Cell;
use std::rc::Rc;

use crate::geometry::Size;

/// Cheap, clonable view onto the size of the element hosting a chart.
///
/// The host writes it whenever its layout changes; the chart only reads it from
/// `Chart::init` and `Chart::resize`, so a layout change stays invisible to the
/// chart until the host asks for a resize.
#[derive(Clone, Debug, Default)]
pub struct Container {
    size: Rc<Cell<Size>>,
}

impl Container {
    pub fn new(size: Size) -> Self {
        Self { size: Rc::new(Cell::new(size)) }
    }

    pub fn size(&self) -> Size {
        self.size.get()
    }

    pub fn set_size(&self, size: Size) {
        self.size.set(size);
    }

    pub fn set_width(&self, width: u32) {
        let current = self.size.get();
        self.size.set(Size { width, ..current });
    }
}
