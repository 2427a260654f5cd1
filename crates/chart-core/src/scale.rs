// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel mapping used for both axes.

/// Maps a data interval onto a pixel interval. The pixel interval may be
/// inverted (e.g. bottom-to-top for a value axis).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f32,
    pub r1: f32,
}

impl LinearScale {
    pub fn new((d0, d1): (f64, f64), (r0, r1): (f32, f32)) -> Self {
        let d1 = if (d1 - d0).abs() < 1e-12 { d0 + 1.0 } else { d1 };
        Self { d0, d1, r0, r1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.r0 + t as f32 * (self.r1 - self.r0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.r1 - self.r0;
        if span.abs() < f32::EPSILON {
            return self.d0;
        }
        self.d0 + ((px - self.r0) / span) as f64 * (self.d1 - self.d0)
    }
}
