// File: crates/chart-core/src/axis.rs
// Summary: Tick placement and label formatting for value and time axes.

use chrono::{DateTime, Utc};

use crate::option::AxisKind;

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

/// Candidate steps for time axes, in milliseconds.
const TIME_STEPS: [f64; 20] = [
    SECOND, 2.0 * SECOND, 5.0 * SECOND, 10.0 * SECOND, 15.0 * SECOND, 30.0 * SECOND,
    MINUTE, 2.0 * MINUTE, 5.0 * MINUTE, 10.0 * MINUTE, 15.0 * MINUTE, 30.0 * MINUTE,
    HOUR, 2.0 * HOUR, 3.0 * HOUR, 6.0 * HOUR, 12.0 * HOUR,
    DAY, 2.0 * DAY, 7.0 * DAY,
];

/// Tick positions plus the step they were laid out with.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticks {
    pub step: f64,
    pub values: Vec<f64>,
}

/// 1-2-5 step covering `span` in roughly `target` intervals.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

fn time_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    TIME_STEPS
        .iter()
        .copied()
        .find(|s| *s >= raw)
        .unwrap_or_else(|| nice_step(span / DAY, target) * DAY)
}

/// Ticks inside [min, max] for an axis of `kind`.
pub fn ticks(kind: AxisKind, min: f64, max: f64, target: usize) -> Ticks {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return Ticks { step: 1.0, values: vec![min] };
    }
    let step = match kind {
        AxisKind::Value => nice_step(max - min, target),
        AxisKind::Time => time_step(max - min, target),
    };
    let first = (min / step).ceil() * step;
    let values = (0..)
        .map(|i| first + i as f64 * step)
        .take_while(|v| *v <= max + step * 1e-9)
        .collect();
    Ticks { step, values }
}

/// Label for a tick value. `step` controls precision (value axes) or clock
/// resolution (time axes).
pub fn format_tick(kind: AxisKind, value: f64, step: f64) -> String {
    match kind {
        AxisKind::Value => {
            let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
            format!("{:.*}", decimals, value)
        }
        AxisKind::Time => {
            let Some(at) = DateTime::<Utc>::from_timestamp_millis(value as i64) else {
                return format!("{value}");
            };
            let pattern = if step < MINUTE {
                "%H:%M:%S"
            } else if step < DAY {
                "%H:%M"
            } else {
                "%m/%d"
            };
            at.format(pattern).to_string()
        }
    }
}
