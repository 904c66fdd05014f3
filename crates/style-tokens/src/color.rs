//! Color parsing and opacity composition
//!
//! Palette colors are kept as CSS-like strings (`hsl(240 10% 3.9%)`,
//! `#FFFFFF`, `black`). [`with_opacity`] parses such a token and re-renders
//! it with an alpha channel, preserving the HSL form when the input was HSL.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TokenError};

/// A parsed color with alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "lowercase")]
pub enum ColorValue {
    /// RGB color, channels 0-255
    Rgb {
        /// Red
        r: u8,
        /// Green
        g: u8,
        /// Blue
        b: u8,
        /// Alpha (0.0 - 1.0)
        a: f32,
    },
    /// HSL color, hue in degrees, saturation and lightness in percent
    Hsl {
        /// Hue
        h: f32,
        /// Saturation
        s: f32,
        /// Lightness
        l: f32,
        /// Alpha (0.0 - 1.0)
        a: f32,
    },
}

impl ColorValue {
    /// Opaque RGB color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorValue::Rgb { r, g, b, a: 1.0 }
    }

    /// Opaque HSL color
    pub fn hsl(h: f32, s: f32, l: f32) -> Self {
        ColorValue::Hsl { h, s, l, a: 1.0 }
    }

    /// Alpha channel
    pub fn alpha(&self) -> f32 {
        match *self {
            ColorValue::Rgb { a, .. } | ColorValue::Hsl { a, .. } => a,
        }
    }

    /// Replace the alpha channel
    pub fn with_alpha(self, alpha: f32) -> Result<Self> {
        check_opacity(alpha)?;
        Ok(match self {
            ColorValue::Rgb { r, g, b, .. } => ColorValue::Rgb { r, g, b, a: alpha },
            ColorValue::Hsl { h, s, l, .. } => ColorValue::Hsl { h, s, l, a: alpha },
        })
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ColorValue::Rgb { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            ColorValue::Hsl { h, s, l, a } => write!(f, "hsla({}, {}%, {}%, {})", h, s, l, a),
        }
    }
}

impl FromStr for ColorValue {
    type Err = TokenError;

    fn from_str(token: &str) -> Result<Self> {
        let token = token.trim();
        let invalid = || TokenError::InvalidColor(token.to_string());

        match token.to_ascii_lowercase().as_str() {
            "black" => return Ok(ColorValue::rgb(0, 0, 0)),
            "white" => return Ok(ColorValue::rgb(255, 255, 255)),
            "transparent" => return Ok(ColorValue::Rgb { r: 0, g: 0, b: 0, a: 0.0 }),
            _ => {}
        }

        if let Some(hex) = token.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        let (function, args) = split_function(token).ok_or_else(invalid)?;
        match function.as_str() {
            "rgb" | "rgba" => parse_rgb_args(&args).ok_or_else(invalid),
            "hsl" | "hsla" => parse_hsl_args(&args).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

fn check_opacity(alpha: f32) -> Result<()> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(())
    } else {
        Err(TokenError::InvalidOpacity(alpha))
    }
}

fn parse_hex(hex: &str) -> Option<ColorValue> {
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let r = u8::from_str_radix(expanded.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(expanded.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(expanded.get(4..6)?, 16).ok()?;
    Some(ColorValue::rgb(r, g, b))
}

/// Split `name(a b c)` into the lowercase name and its arguments
fn split_function(token: &str) -> Option<(String, Vec<String>)> {
    let open = token.find('(')?;
    let body = token[open + 1..].strip_suffix(')')?;
    let args = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();
    Some((token[..open].trim().to_ascii_lowercase(), args))
}

fn parse_alpha(args: &[String]) -> Option<f32> {
    match args.get(3) {
        None => Some(1.0),
        Some(raw) => {
            let alpha = match raw.strip_suffix('%') {
                Some(pct) => pct.parse::<f32>().ok()? / 100.0,
                None => raw.parse::<f32>().ok()?,
            };
            (0.0..=1.0).contains(&alpha).then_some(alpha)
        }
    }
}

fn parse_rgb_args(args: &[String]) -> Option<ColorValue> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let channel = |raw: &str| raw.parse::<u8>().ok();
    Some(ColorValue::Rgb {
        r: channel(&args[0])?,
        g: channel(&args[1])?,
        b: channel(&args[2])?,
        a: parse_alpha(args)?,
    })
}

fn parse_hsl_args(args: &[String]) -> Option<ColorValue> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let hue = args[0].trim_end_matches("deg").parse::<f32>().ok()?;
    let percent = |raw: &str| {
        raw.trim_end_matches('%')
            .parse::<f32>()
            .ok()
            .filter(|v| (0.0..=100.0).contains(v))
    };
    if !hue.is_finite() {
        return None;
    }
    Some(ColorValue::Hsl {
        h: hue,
        s: percent(&args[1])?,
        l: percent(&args[2])?,
        a: parse_alpha(args)?,
    })
}

/// Compose a color token with an opacity
///
/// ```rust
/// use style_tokens::with_opacity;
///
/// assert_eq!(with_opacity("black", 0.8).unwrap(), "rgba(0, 0, 0, 0.8)");
/// assert_eq!(
///     with_opacity("hsl(240 10% 3.9%)", 0.1).unwrap(),
///     "hsla(240, 10%, 3.9%, 0.1)"
/// );
/// ```
pub fn with_opacity(color: &str, alpha: f32) -> Result<String> {
    let parsed: ColorValue = color.parse()?;
    Ok(parsed.with_alpha(alpha)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Parsing Tests
    // ==========================================================================

    #[test]
    fn test_parse_named() {
        assert_eq!("black".parse::<ColorValue>().unwrap(), ColorValue::rgb(0, 0, 0));
        assert_eq!("White".parse::<ColorValue>().unwrap(), ColorValue::rgb(255, 255, 255));
        assert_eq!("transparent".parse::<ColorValue>().unwrap().alpha(), 0.0);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#9D4EDD".parse::<ColorValue>().unwrap(), ColorValue::rgb(157, 78, 221));
        assert_eq!("#fff".parse::<ColorValue>().unwrap(), ColorValue::rgb(255, 255, 255));
        assert!("#FF".parse::<ColorValue>().is_err());
        assert!("#GGGGGG".parse::<ColorValue>().is_err());
    }

    #[test]
    fn test_parse_rgb() {
        let color: ColorValue = "rgb(10, 20, 30)".parse().unwrap();
        assert_eq!(color, ColorValue::rgb(10, 20, 30));

        let color: ColorValue = "rgba(10, 20, 30, 0.5)".parse().unwrap();
        assert_eq!(color.alpha(), 0.5);

        assert!("rgb(300, 0, 0)".parse::<ColorValue>().is_err());
        assert!("rgb(1, 2)".parse::<ColorValue>().is_err());
    }

    #[test]
    fn test_parse_hsl_space_and_comma_forms() {
        let spaced: ColorValue = "hsl(240 10% 3.9%)".parse().unwrap();
        let commas: ColorValue = "hsl(240, 10%, 3.9%)".parse().unwrap();
        assert_eq!(spaced, commas);
        assert_eq!(spaced, ColorValue::hsl(240.0, 10.0, 3.9));

        let slash: ColorValue = "hsl(0 84.2% 60.2% / 50%)".parse().unwrap();
        assert_eq!(slash.alpha(), 0.5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<ColorValue>().is_err());
        assert!("blue-ish".parse::<ColorValue>().is_err());
        assert!("hsl(240 10%)".parse::<ColorValue>().is_err());
        assert!("lab(50 20 30)".parse::<ColorValue>().is_err());
        assert!("hsl(240 10% 3.9%".parse::<ColorValue>().is_err());
    }

    // ==========================================================================
    // Opacity Tests
    // ==========================================================================

    #[test]
    fn test_with_opacity_black() {
        assert_eq!(with_opacity("black", 0.8).unwrap(), "rgba(0, 0, 0, 0.8)");
    }

    #[test]
    fn test_with_opacity_keeps_hsl() {
        assert_eq!(
            with_opacity("hsl(0 0% 98%)", 0.1).unwrap(),
            "hsla(0, 0%, 98%, 0.1)"
        );
    }

    #[test]
    fn test_with_opacity_replaces_existing_alpha() {
        assert_eq!(
            with_opacity("rgba(1, 2, 3, 0.2)", 1.0).unwrap(),
            "rgba(1, 2, 3, 1)"
        );
    }

    #[test]
    fn test_with_opacity_rejects_out_of_range() {
        assert!(matches!(
            with_opacity("black", 1.5),
            Err(TokenError::InvalidOpacity(_))
        ));
        assert!(with_opacity("black", f32::NAN).is_err());
        assert!(matches!(
            with_opacity("not-a-color", 0.5),
            Err(TokenError::InvalidColor(_))
        ));
    }
}
