// File: crates/chart-core/src/color.rs
// Summary: RGBA color value with CSS-style parsing (`#rrggbb`, `#rgb`, `rgb()`, `rgba()`).

use std::fmt;
use std::str::FromStr;

use skia_safe as skia;
use thiserror::Error;

/// Straight (non-premultiplied) color. Alpha is kept as a float so values like
/// `.08` survive exactly as written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0.0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Multiply alpha by `factor` (clamped to [0, 1]).
    pub fn fade(self, factor: f32) -> Self {
        Self { a: (self.a * factor).clamp(0.0, 1.0), ..self }
    }

    pub fn alpha_u8(self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(self.alpha_u8(), self.r, self.g, self.b)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unsupported color syntax: `{0}`")]
    Syntax(String),
    #[error("color component out of range in `{0}`")]
    Range(String),
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::Syntax(raw.to_string()));
        }

        let (body, with_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(ColorParseError::Syntax(raw.to_string()));
        };
        let body = body
            .strip_suffix(')')
            .ok_or_else(|| ColorParseError::Syntax(raw.to_string()))?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != if with_alpha { 4 } else { 3 } {
            return Err(ColorParseError::Syntax(raw.to_string()));
        }

        let channel = |p: &str| -> Result<u8, ColorParseError> {
            let v: u16 = p.parse().map_err(|_| ColorParseError::Syntax(raw.to_string()))?;
            u8::try_from(v).map_err(|_| ColorParseError::Range(raw.to_string()))
        };
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;
        let a = if with_alpha {
            let a: f32 = parts[3].parse().map_err(|_| ColorParseError::Syntax(raw.to_string()))?;
            if !(0.0..=1.0).contains(&a) {
                return Err(ColorParseError::Range(raw.to_string()));
            }
            a
        } else {
            1.0
        };
        Ok(Self { r, g, b, a })
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
    match hex.len() {
        6 => {
            let pair = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
            Some(Rgba::rgb(pair(0)?, pair(2)?, pair(4)?))
        }
        3 => Some(Rgba::rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
        _ => None,
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}
