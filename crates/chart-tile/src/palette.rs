// File: crates/chart-tile/src/palette.rs
// Summary: Theme modes and the pure theme -> palette resolver.

use std::fmt;
use std::str::FromStr;

use chart_core::{AreaOrigin, AreaStyle, ChartOption, ColorStop, Fill, LinearGradient, Rgba, SeriesOption, TooltipOption, TooltipTrigger};
use serde::{Deserialize, Serialize};

/// Area fill opacity shared by both palettes.
pub const AREA_OPACITY: f32 = 0.62;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        })
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{other}', expected 'light' or 'dark'")),
        }
    }
}

/// Style bundle for one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub series_color: Rgba,
    /// Top (offset 0) and bottom (offset 1) of the vertical area gradient.
    pub area_stops: [ColorStop; 2],
    pub tooltip_background: Rgba,
}

const LIGHT: Palette = Palette {
    series_color: Rgba::rgba(0, 0, 0, 0.6),
    area_stops: [
        ColorStop::new(0.0, Rgba::rgba(0, 0, 0, 0.2)),
        ColorStop::new(1.0, Rgba::rgba(0, 0, 0, 0.01)),
    ],
    tooltip_background: Rgba::rgb(0xf7, 0xf7, 0xf7),
};

const DARK: Palette = Palette {
    series_color: Rgba::rgba(153, 250, 255, 0.8),
    area_stops: [
        ColorStop::new(0.0, Rgba::rgba(153, 250, 255, 0.08)),
        ColorStop::new(1.0, Rgba::rgba(153, 250, 255, 0.01)),
    ],
    tooltip_background: Rgba::rgb(0x18, 0x19, 0x23),
};

/// Palette for `theme`. Same input, same output, no side effects.
pub fn resolve(theme: ThemeMode) -> Palette {
    match theme {
        ThemeMode::Light => LIGHT,
        ThemeMode::Dark => DARK,
    }
}

impl Palette {
    /// The style subtree as a partial option: series color, area style and
    /// tooltip. Never carries data.
    pub fn to_option(&self) -> ChartOption {
        let area = AreaStyle {
            fill: Some(Fill::Linear(LinearGradient::vertical(self.area_stops.to_vec()))),
            origin: Some(AreaOrigin::Start),
            opacity: Some(AREA_OPACITY),
        };
        let series = SeriesOption {
            color: Some(self.series_color),
            area_style: Some(area),
            ..SeriesOption::default()
        };
        ChartOption {
            tooltip: Some(TooltipOption {
                show: Some(true),
                trigger: Some(TooltipTrigger::Axis),
                background: Some(self.tooltip_background),
                border_radius: Some(0.0),
                ..TooltipOption::default()
            }),
            ..ChartOption::with_series_at(0, series)
        }
    }
}
