//! Theme and scale utilities
//!
//! A [`Theme`] pairs the palette of the active scheme with a [`Utils`]
//! bundle. `Utils` closes over the font scale and breakpoint of the current
//! resolution, so a provider can ask for `utils.space(4.0)` without knowing
//! either.

use serde::Serialize;
use std::sync::Arc;
use style_tokens::{
    scale, ColorScheme, Colors, FontWeight, Result, Shadow, StyleConfig,
};

/// Scale functions bound to one resolution's font scale and breakpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Utils {
    font_scale: f32,
    breakpoint: String,
    #[serde(skip)]
    config: Arc<StyleConfig>,
}

impl Utils {
    /// Bind the scales to a font scale and breakpoint
    pub fn new(config: Arc<StyleConfig>, font_scale: f32, breakpoint: impl Into<String>) -> Self {
        Self {
            font_scale,
            breakpoint: breakpoint.into(),
            config,
        }
    }

    /// Spacing for a step (multiples of 0.25rem), font-scaled
    pub fn space(&self, step: f32) -> Result<f32> {
        Ok(scale::space(step)? * self.config.curves.space.adjust(self.font_scale))
    }

    /// Font size for a named step, font-scaled
    pub fn font_size(&self, name: &str) -> Result<f32> {
        Ok(scale::font_size(name)? * self.config.curves.font_size.adjust(self.font_scale))
    }

    /// Corner radius for a named step, font-scaled
    pub fn rounded(&self, name: &str) -> Result<f32> {
        Ok(scale::rounded(name)? * self.config.curves.rounded.adjust(self.font_scale))
    }

    /// Letter spacing for a named step, font-scaled
    pub fn tracking(&self, name: &str) -> Result<f32> {
        Ok(scale::tracking(name)? * self.config.curves.tracking.adjust(self.font_scale))
    }

    /// Font weight for a name such as "semibold"
    pub fn font_weight(&self, name: &str) -> Result<FontWeight> {
        FontWeight::from_name(name)
    }

    /// Shadow preset for a level such as "lg"
    pub fn shadow(&self, level: &str) -> Result<Shadow> {
        Shadow::level(level)
    }

    /// Whether the current breakpoint is at or above `breakpoint`
    pub fn media_min_width(&self, breakpoint: &str) -> Result<bool> {
        self.config
            .breakpoints
            .media_min_width(&self.breakpoint, breakpoint)
    }

    /// Convert rem units to pixels
    pub fn rem(&self, value: f32) -> f32 {
        scale::rem(value, self.config.rem_px)
    }

    /// Font scale these utilities are bound to
    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }

    /// Breakpoint these utilities are bound to
    pub fn breakpoint(&self) -> &str {
        &self.breakpoint
    }
}

/// Resolved theme: palette plus bound utilities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    /// Active scheme
    pub name: ColorScheme,
    /// Palette of the active scheme
    pub colors: &'static Colors,
    /// Scale utilities
    pub utils: Utils,
}

impl Theme {
    /// Theme for a scheme with the given utilities
    pub fn new(name: ColorScheme, utils: Utils) -> Self {
        Self {
            name,
            colors: name.colors(),
            utils,
        }
    }

    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.name.is_dark()
    }
}
