// File: crates/chart-tile/src/source.rs
// Summary: Data source contract and the synthetic random-walk stream.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::window::{Reading, DEFAULT_WINDOW_LEN};

/// Anything that can feed the tile one tick at a time.
pub trait DataSource {
    /// Window length the source is meant to be viewed with.
    fn window_len(&self) -> usize {
        DEFAULT_WINDOW_LEN
    }

    /// Reading for the next tick, or `None` when the tick carried nothing.
    fn next_reading(&mut self) -> Option<Reading>;
}

/// One reading per simulated day; the level drifts by a uniform step in
/// [-10, 11) and is reported rounded.
pub struct SyntheticSource {
    rng: StdRng,
    window_len: usize,
    ordinal: u64,
    at: DateTime<Utc>,
    level: f64,
}

impl SyntheticSource {
    pub fn new(window_len: usize) -> Self {
        Self::from_rng(StdRng::from_os_rng(), window_len)
    }

    /// Reproducible stream for tests and golden renders.
    pub fn seeded(seed: u64, window_len: usize) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), window_len)
    }

    fn from_rng(mut rng: StdRng, window_len: usize) -> Self {
        let level = rng.random::<f64>() * 1_000.0;
        let at = Utc.with_ymd_and_hms(1997, 10, 3, 0, 0, 0).single().unwrap_or_default();
        Self { rng, window_len, ordinal: 0, at, level }
    }

    /// `n` readings, oldest first, for prefilling a window.
    pub fn backfill(&mut self, n: usize) -> Vec<Reading> {
        (0..n).filter_map(|_| self.next_reading()).collect()
    }
}

impl DataSource for SyntheticSource {
    fn window_len(&self) -> usize {
        self.window_len
    }

    fn next_reading(&mut self) -> Option<Reading> {
        self.ordinal += 1;
        self.at += Duration::days(1);
        self.level += self.rng.random_range(-10.0..11.0);
        Some(Reading::new(self.ordinal, self.at.timestamp_millis() as f64, self.level.round()))
    }
}
