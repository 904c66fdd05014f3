//! Styling configuration
//!
//! [`StyleConfig`] gathers the tunable parts of the styling layer: the
//! breakpoint registry, the font-scale curve of each scale, and the rem
//! base. It can be built in code or loaded from JSON; both paths validate.

use serde::{Deserialize, Serialize};

use crate::breakpoints::Breakpoints;
use crate::error::{Result, TokenError};
use crate::scale::{ScaleCurve, REM_PX};

/// Font-scale curve per scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleCurves {
    /// Curve for font sizes
    pub font_size: ScaleCurve,
    /// Curve for spacing
    pub space: ScaleCurve,
    /// Curve for corner radii
    pub rounded: ScaleCurve,
    /// Curve for letter spacing
    pub tracking: ScaleCurve,
}

impl Default for ScaleCurves {
    fn default() -> Self {
        Self {
            font_size: ScaleCurve::Linear,
            space: ScaleCurve::Damped(0.5),
            rounded: ScaleCurve::Damped(0.5),
            tracking: ScaleCurve::Linear,
        }
    }
}

impl ScaleCurves {
    fn validate(&self) -> Result<()> {
        self.font_size.validate()?;
        self.space.validate()?;
        self.rounded.validate()?;
        self.tracking.validate()
    }
}

/// Styling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Breakpoint registry
    pub breakpoints: Breakpoints,
    /// Font-scale curves
    pub curves: ScaleCurves,
    /// Pixels per rem
    pub rem_px: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            curves: ScaleCurves::default(),
            rem_px: REM_PX,
        }
    }
}

impl StyleConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the breakpoint registry
    pub fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Set the font-scale curves
    pub fn curves(mut self, curves: ScaleCurves) -> Self {
        self.curves = curves;
        self
    }

    /// Set the rem base in pixels
    pub fn rem_px(mut self, rem_px: f32) -> Self {
        self.rem_px = rem_px;
        self
    }

    /// Load and validate a configuration from JSON
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StyleConfig = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(
            breakpoints = config.breakpoints.len(),
            rem_px = config.rem_px,
            "Loaded style config"
        );
        Ok(config)
    }

    /// Check the configuration for values the scales cannot use
    pub fn validate(&self) -> Result<()> {
        if !self.rem_px.is_finite() || self.rem_px <= 0.0 {
            return Err(TokenError::InvalidConfig(format!(
                "rem base must be positive, got {}",
                self.rem_px
            )));
        }
        self.curves.validate()
    }
}
