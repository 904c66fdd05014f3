//! Font-scaled size scales
//!
//! Spacing, font size, corner rounding and letter tracking all follow the
//! same shape: a static base table looked up by step, multiplied by an
//! adjustment derived from the platform font scale. The adjustment curve is
//! configured per scale through [`ScaleCurve`].

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};

/// Pixels per rem
pub const REM_PX: f32 = 16.0;

/// Pixels per spacing step (0.25rem)
pub const SPACE_UNIT_PX: f32 = 4.0;

/// Spacing steps, stored doubled so that half steps are exact integers
const SPACE_HALF_STEPS: &[u32] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 12, 14, 16, 18, 20, 22, 24, 28, 32, 40, 48, 56, 64, 72, 80,
    88, 96, 104, 112, 120, 128, 144, 160, 192,
];

/// Font sizes in pixels
pub const FONT_SIZES: &[(&str, f32)] = &[
    ("xs", 12.0),
    ("sm", 14.0),
    ("base", 16.0),
    ("lg", 18.0),
    ("xl", 20.0),
    ("2xl", 24.0),
    ("3xl", 30.0),
    ("4xl", 36.0),
    ("5xl", 48.0),
    ("6xl", 60.0),
    ("7xl", 72.0),
    ("8xl", 96.0),
    ("9xl", 128.0),
];

/// Corner radii in pixels
pub const ROUNDED: &[(&str, f32)] = &[
    ("none", 0.0),
    ("sm", 2.0),
    ("default", 4.0),
    ("md", 6.0),
    ("lg", 8.0),
    ("xl", 12.0),
    ("2xl", 16.0),
    ("3xl", 24.0),
    ("full", 9999.0),
];

/// Letter spacing in pixels at a 16px em
pub const TRACKING: &[(&str, f32)] = &[
    ("tighter", -0.8),
    ("tight", -0.4),
    ("normal", 0.0),
    ("wide", 0.4),
    ("wider", 0.8),
    ("widest", 1.6),
];

/// How a scale responds to the platform font scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleCurve {
    /// Ignore the font scale
    Fixed,
    /// Multiply by the font scale
    Linear,
    /// Move toward the font scale by the given factor (0.0..=1.0)
    Damped(f32),
}

impl ScaleCurve {
    /// Adjustment multiplier for a font scale ratio
    pub fn adjust(&self, font_scale: f32) -> f32 {
        match *self {
            ScaleCurve::Fixed => 1.0,
            ScaleCurve::Linear => font_scale,
            ScaleCurve::Damped(k) => 1.0 + (font_scale - 1.0) * k,
        }
    }

    /// Check that the curve is non-decreasing in the font scale
    pub fn validate(&self) -> Result<()> {
        match *self {
            ScaleCurve::Damped(k) if !(0.0..=1.0).contains(&k) => Err(
                TokenError::InvalidConfig(format!("damping {} is outside 0..=1", k)),
            ),
            _ => Ok(()),
        }
    }
}

fn lookup(table: &[(&str, f32)], scale: &'static str, name: &str) -> Result<f32> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
        .ok_or_else(|| TokenError::unknown(scale, name))
}

/// Base spacing for a step, in pixels
///
/// Steps are multiples of 0.25rem; fractional steps other than halves, and
/// steps outside the table, are rejected.
pub fn space(step: f32) -> Result<f32> {
    let doubled = step * 2.0;
    let known = doubled.is_finite()
        && doubled >= 0.0
        && doubled.fract() == 0.0
        && SPACE_HALF_STEPS.contains(&(doubled as u32));
    if !known {
        return Err(TokenError::unknown("space", step.to_string()));
    }
    Ok(step * SPACE_UNIT_PX)
}

/// Base font size for a named step, in pixels
pub fn font_size(name: &str) -> Result<f32> {
    lookup(FONT_SIZES, "font size", name)
}

/// Base corner radius for a named step, in pixels
pub fn rounded(name: &str) -> Result<f32> {
    lookup(ROUNDED, "rounded", name)
}

/// Base letter spacing for a named step, in pixels
pub fn tracking(name: &str) -> Result<f32> {
    lookup(TRACKING, "tracking", name)
}

/// Convert rem units to pixels for a rem base of `rem_px`
pub fn rem(value: f32, rem_px: f32) -> f32 {
    value * rem_px
}

/// All registered spacing steps, ascending
pub fn space_steps() -> impl Iterator<Item = f32> {
    SPACE_HALF_STEPS.iter().map(|half| *half as f32 / 2.0)
}
