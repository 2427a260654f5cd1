// File: crates/chart-tile/src/window.rs
// Summary: Bounded FIFO window of readings with immutable, cheaply clonable snapshots.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Reference window length.
pub const DEFAULT_WINDOW_LEN: usize = 100;

/// One sample: arrival ordinal plus `[timestamp_ms, level]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub ordinal: u64,
    pub value: [f64; 2],
}

impl Reading {
    pub const fn new(ordinal: u64, timestamp_ms: f64, level: f64) -> Self {
        Self { ordinal, value: [timestamp_ms, level] }
    }

    /// Chart point: channel 0 on the time axis, channel 1 on the value axis.
    pub fn point(&self) -> (f64, f64) {
        (self.value[0], self.value[1])
    }
}

/// Channels joined by `": "`, the timestamp rendered as a calendar date.
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [at, level] = self.value;
        match DateTime::<Utc>::from_timestamp_millis(at as i64) {
            Some(at) => write!(f, "{}: {}", at.format("%Y/%-m/%-d"), level),
            None => write!(f, "{}: {}", at, level),
        }
    }
}

/// Readings in arrival order, at most `capacity` long.
///
/// Storage is shared with outstanding snapshots and copied on the first
/// append after a snapshot was taken, so snapshots never see later appends.
#[derive(Clone, Debug)]
pub struct Window {
    capacity: usize,
    readings: Arc<VecDeque<Reading>>,
}

impl Window {
    /// A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { capacity, readings: Arc::new(VecDeque::with_capacity(capacity + 1)) }
    }

    pub fn capacity(&self) -> usize { self.capacity }
    pub fn len(&self) -> usize { self.readings.len() }
    pub fn is_empty(&self) -> bool { self.readings.is_empty() }
    pub fn latest(&self) -> Option<&Reading> { self.readings.back() }

    /// Push to the tail, evicting the head once over capacity.
    pub fn append(&mut self, reading: Reading) -> WindowSnapshot {
        let buf = Arc::make_mut(&mut self.readings);
        buf.push_back(reading);
        if buf.len() > self.capacity {
            buf.pop_front();
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot(Arc::clone(&self.readings))
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_LEN)
    }
}

/// Frozen view of a window at one point in time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindowSnapshot(Arc<VecDeque<Reading>>);

impl WindowSnapshot {
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn latest(&self) -> Option<&Reading> { self.0.back() }
    pub fn oldest(&self) -> Option<&Reading> { self.0.front() }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> + '_ {
        self.0.iter()
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.0.iter().map(Reading::point).collect()
    }

    pub fn ordinals(&self) -> Vec<u64> {
        self.0.iter().map(|r| r.ordinal).collect()
    }
}
