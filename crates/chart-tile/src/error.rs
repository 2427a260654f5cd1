// File: crates/chart-tile/src/error.rs
// Summary: Chart instance manager misuse errors.

use thiserror::Error;

/// Lifecycle-ordering errors. The widget's state machine never produces them in
/// normal operation; seeing one means an ordering invariant was broken.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChartError {
    #[error("a chart instance is already mounted")]
    AlreadyMounted,
    #[error("no live chart instance for this handle")]
    NotMounted,
    #[error("chart instance was already disposed")]
    AlreadyDisposed,
}
