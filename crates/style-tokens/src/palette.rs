//! Light and dark palettes
//!
//! Palettes are process-wide constants. Colors are HSL tokens in the
//! space-separated CSS form so that [`crate::with_opacity`] can re-render
//! them with alpha.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TokenError;

/// Color scheme / theme name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light scheme
    #[default]
    Light,
    /// Dark scheme
    Dark,
}

impl ColorScheme {
    /// Lowercase scheme name
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    /// Check if this is the dark scheme
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    /// Palette for this scheme
    pub fn colors(&self) -> &'static Colors {
        match self {
            ColorScheme::Light => &LIGHT_COLORS,
            ColorScheme::Dark => &DARK_COLORS,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(TokenError::unknown("color scheme", s)),
        }
    }
}

/// Semantic colors for a scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    /// Main background color
    pub background: &'static str,
    /// Primary text color
    pub foreground: &'static str,
    /// Card surface
    pub card: &'static str,
    /// Text on cards
    pub card_foreground: &'static str,
    /// Popover surface
    pub popover: &'static str,
    /// Text on popovers
    pub popover_foreground: &'static str,
    /// Primary action color
    pub primary: &'static str,
    /// Text on primary
    pub primary_foreground: &'static str,
    /// Secondary action color
    pub secondary: &'static str,
    /// Text on secondary
    pub secondary_foreground: &'static str,
    /// Muted surface
    pub muted: &'static str,
    /// Muted text
    pub muted_foreground: &'static str,
    /// Accent surface
    pub accent: &'static str,
    /// Text on accent
    pub accent_foreground: &'static str,
    /// Destructive/error color
    pub destructive: &'static str,
    /// Text on destructive
    pub destructive_foreground: &'static str,
    /// Border color
    pub border: &'static str,
    /// Input border color
    pub input: &'static str,
    /// Focus ring color
    pub ring: &'static str,
}

/// Light palette
pub const LIGHT_COLORS: Colors = Colors {
    background: "hsl(0 0% 100%)",
    foreground: "hsl(240 10% 3.9%)",
    card: "hsl(0 0% 100%)",
    card_foreground: "hsl(240 10% 3.9%)",
    popover: "hsl(0 0% 100%)",
    popover_foreground: "hsl(240 10% 3.9%)",
    primary: "hsl(240 5.9% 10%)",
    primary_foreground: "hsl(0 0% 98%)",
    secondary: "hsl(240 4.8% 95.9%)",
    secondary_foreground: "hsl(240 5.9% 10%)",
    muted: "hsl(240 4.8% 95.9%)",
    muted_foreground: "hsl(240 3.8% 46.1%)",
    accent: "hsl(240 4.8% 95.9%)",
    accent_foreground: "hsl(240 5.9% 10%)",
    destructive: "hsl(0 84.2% 60.2%)",
    destructive_foreground: "hsl(0 0% 98%)",
    border: "hsl(240 5.9% 90%)",
    input: "hsl(240 5.9% 90%)",
    ring: "hsl(240 5.9% 10%)",
};

/// Dark palette
pub const DARK_COLORS: Colors = Colors {
    background: "hsl(240 10% 3.9%)",
    foreground: "hsl(0 0% 98%)",
    card: "hsl(240 10% 3.9%)",
    card_foreground: "hsl(0 0% 98%)",
    popover: "hsl(240 10% 3.9%)",
    popover_foreground: "hsl(0 0% 98%)",
    primary: "hsl(0 0% 98%)",
    primary_foreground: "hsl(240 5.9% 10%)",
    secondary: "hsl(240 3.7% 15.9%)",
    secondary_foreground: "hsl(0 0% 98%)",
    muted: "hsl(240 3.7% 15.9%)",
    muted_foreground: "hsl(240 5% 64.9%)",
    accent: "hsl(240 3.7% 15.9%)",
    accent_foreground: "hsl(0 0% 98%)",
    destructive: "hsl(0 72% 51%)",
    destructive_foreground: "hsl(0 0% 98%)",
    border: "hsl(240 3.7% 15.9%)",
    input: "hsl(240 3.7% 15.9%)",
    ring: "hsl(240 4.9% 83.9%)",
};
