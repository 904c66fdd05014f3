//! Host signals
//!
//! [`Signals`] is the tuple of environment values the host window layer
//! reports. Only part of it is a memoization dependency: the
//! [`SignalKey`] covers the color scheme, window size, font scale and
//! safe-area insets, compared by value.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use style_tokens::ColorScheme;

/// Default window width (logical pixels)
const DEFAULT_WIDTH: f32 = 390.0;

/// Default window height (logical pixels)
const DEFAULT_HEIGHT: f32 = 844.0;

/// Safe-area insets
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Top inset
    pub top: f32,
    /// Right inset
    pub right: f32,
    /// Bottom inset
    pub bottom: f32,
    /// Left inset
    pub left: f32,
}

impl EdgeInsets {
    /// Create insets per edge
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same inset on every edge
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    fn sanitized(&self) -> Self {
        let clean = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self::new(
            clean(self.top),
            clean(self.right),
            clean(self.bottom),
            clean(self.left),
        )
    }
}

/// Window dimensions and font scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowMetrics {
    /// Width in logical pixels
    pub width: f32,
    /// Height in logical pixels
    pub height: f32,
    /// Platform font scale ratio
    pub font_scale: f32,
}

impl Default for WindowMetrics {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            font_scale: 1.0,
        }
    }
}

/// Signals reported by the host platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signals {
    /// Preferred color scheme, if the platform reports one
    pub color_scheme: Option<ColorScheme>,
    /// Window dimensions and font scale
    pub window: WindowMetrics,
    /// Safe-area insets
    pub insets: EdgeInsets,
    /// Status bar height (Android only)
    pub status_bar_height: Option<f32>,
    /// Device pixel ratio
    pub pixel_ratio: f32,
    /// Right-to-left layout
    pub rtl: bool,
}

impl Default for Signals {
    fn default() -> Self {
        Self {
            color_scheme: None,
            window: WindowMetrics::default(),
            insets: EdgeInsets::default(),
            status_bar_height: None,
            pixel_ratio: 1.0,
            rtl: false,
        }
    }
}

impl Signals {
    /// Signals for a window of the given size, everything else default
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            window: WindowMetrics {
                width,
                height,
                ..WindowMetrics::default()
            },
            ..Self::default()
        }
    }

    /// Set the color scheme preference
    pub fn color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = Some(scheme);
        self
    }

    /// Set the font scale
    pub fn font_scale(mut self, font_scale: f32) -> Self {
        self.window.font_scale = font_scale;
        self
    }

    /// Set the safe-area insets
    pub fn insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Set the status bar height
    pub fn status_bar_height(mut self, height: f32) -> Self {
        self.status_bar_height = Some(height);
        self
    }

    /// Set the pixel ratio
    pub fn pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = ratio;
        self
    }

    /// Set right-to-left layout
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Active scheme; light when the platform reports none
    pub fn resolved_scheme(&self) -> ColorScheme {
        self.color_scheme.unwrap_or_default()
    }

    /// Copy with out-of-range values replaced by defaults
    ///
    /// Negative or non-finite sizes become 0, non-positive or non-finite
    /// font scale and pixel ratio become 1.
    pub fn sanitized(&self) -> Signals {
        let mut clean = self.clone();

        if !self.window.width.is_finite() || self.window.width < 0.0 {
            tracing::warn!(width = self.window.width, "Ignoring invalid window width");
            clean.window.width = 0.0;
        }
        if !self.window.height.is_finite() || self.window.height < 0.0 {
            tracing::warn!(height = self.window.height, "Ignoring invalid window height");
            clean.window.height = 0.0;
        }
        if !self.window.font_scale.is_finite() || self.window.font_scale <= 0.0 {
            tracing::warn!(
                font_scale = self.window.font_scale,
                "Ignoring invalid font scale"
            );
            clean.window.font_scale = 1.0;
        }
        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            tracing::warn!(pixel_ratio = self.pixel_ratio, "Ignoring invalid pixel ratio");
            clean.pixel_ratio = 1.0;
        }
        if clean.insets != self.insets.sanitized() {
            tracing::warn!(insets = ?self.insets, "Ignoring invalid safe-area insets");
            clean.insets = self.insets.sanitized();
        }

        clean
    }

    /// Memoization key of these signals
    pub fn key(&self) -> SignalKey {
        SignalKey {
            scheme: self.resolved_scheme(),
            width: self.window.width.to_bits(),
            height: self.window.height.to_bits(),
            font_scale: self.window.font_scale.to_bits(),
            insets: [
                self.insets.top.to_bits(),
                self.insets.right.to_bits(),
                self.insets.bottom.to_bits(),
                self.insets.left.to_bits(),
            ],
        }
    }
}

/// The signals a resolution depends on, compared structurally
///
/// Floats are stored by bit pattern so that equality is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalKey {
    scheme: ColorScheme,
    width: u32,
    height: u32,
    font_scale: u32,
    insets: [u32; 4],
}

/// Shared handle to the live host signals
///
/// The host window layer writes; resolvers take snapshots.
#[derive(Debug, Clone, Default)]
pub struct SignalStore {
    inner: Arc<RwLock<Signals>>,
}

impl SignalStore {
    /// Create a store holding the given signals
    pub fn new(signals: Signals) -> Self {
        Self {
            inner: Arc::new(RwLock::new(signals)),
        }
    }

    /// Copy of the current signals
    pub fn snapshot(&self) -> Signals {
        self.inner.read().clone()
    }

    /// Apply an arbitrary update
    pub fn update(&self, f: impl FnOnce(&mut Signals)) {
        f(&mut self.inner.write());
    }

    /// Report a window resize or font scale change
    pub fn set_window(&self, width: f32, height: f32, font_scale: f32) {
        self.update(|s| {
            s.window = WindowMetrics {
                width,
                height,
                font_scale,
            }
        });
    }

    /// Report a color scheme preference change
    pub fn set_color_scheme(&self, scheme: Option<ColorScheme>) {
        self.update(|s| s.color_scheme = scheme);
    }

    /// Report new safe-area insets
    pub fn set_insets(&self, insets: EdgeInsets) {
        self.update(|s| s.insets = insets);
    }

    /// Report a status bar height change
    pub fn set_status_bar_height(&self, height: Option<f32>) {
        self.update(|s| s.status_bar_height = height);
    }

    /// Report a pixel ratio change
    pub fn set_pixel_ratio(&self, ratio: f32) {
        self.update(|s| s.pixel_ratio = ratio);
    }

    /// Report a layout direction change
    pub fn set_rtl(&self, rtl: bool) {
        self.update(|s| s.rtl = rtl);
    }
}
