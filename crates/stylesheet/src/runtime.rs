//! Runtime metrics
//!
//! A [`RuntimeMetrics`] is the immutable snapshot handed to a theme provider
//! alongside the theme. It is rebuilt from the signals on every resolution.

use serde::{Deserialize, Serialize};
use style_tokens::{Breakpoints, ColorScheme};

use crate::signals::{EdgeInsets, Signals};

/// Target width of a hairline before rounding to device pixels
const HAIRLINE_TARGET: f32 = 0.4;

/// Screen orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Taller than wide (or square)
    Portrait,
    /// Wider than tall
    Landscape,
}

impl Orientation {
    /// Orientation of a window
    pub fn of(width: f32, height: f32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Window size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenSize {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

/// Status bar metrics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusBar {
    /// Height, when the platform reports one
    pub height: Option<f32>,
}

/// Environment snapshot for one resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeMetrics {
    /// Active theme
    pub theme_name: ColorScheme,
    /// Current breakpoint name
    pub breakpoint: String,
    /// Window size
    pub screen: ScreenSize,
    /// Window orientation
    pub orientation: Orientation,
    /// Safe-area insets
    pub insets: EdgeInsets,
    /// Status bar metrics
    pub status_bar: StatusBar,
    /// Device pixel ratio
    pub pixel_ratio: f32,
    /// Platform font scale
    pub font_scale: f32,
    /// Thinnest visible line width
    pub hairline_width: f32,
    /// Right-to-left layout
    pub rtl: bool,
}

impl RuntimeMetrics {
    /// Assemble metrics from (sanitized) signals
    pub fn from_signals(signals: &Signals, breakpoints: &Breakpoints) -> Self {
        let window = signals.window;
        Self {
            theme_name: signals.resolved_scheme(),
            breakpoint: breakpoints.classify(window.width).to_string(),
            screen: ScreenSize {
                width: window.width,
                height: window.height,
            },
            orientation: Orientation::of(window.width, window.height),
            insets: signals.insets,
            status_bar: StatusBar {
                height: signals.status_bar_height,
            },
            pixel_ratio: signals.pixel_ratio,
            font_scale: window.font_scale,
            hairline_width: hairline_width(signals.pixel_ratio),
            rtl: signals.rtl,
        }
    }

    /// Check for landscape orientation
    pub fn is_landscape(&self) -> bool {
        self.orientation == Orientation::Landscape
    }
}

/// Hairline width for a pixel ratio: the target rounded to whole device
/// pixels, never thinner than one device pixel
///
/// A non-finite or non-positive ratio is treated as 1.
pub fn hairline_width(pixel_ratio: f32) -> f32 {
    let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };
    let rounded = (HAIRLINE_TARGET * pixel_ratio).round() / pixel_ratio;
    if rounded == 0.0 {
        1.0 / pixel_ratio
    } else {
        rounded
    }
}
