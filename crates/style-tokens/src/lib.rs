//! Design tokens for the stylesheet kit
//!
//! This crate holds the pure, stateless pieces of the styling layer: the
//! breakpoint registry, the font-scaled spacing/font-size/rounding/tracking
//! scales, static font-weight and shadow tables, color parsing with opacity
//! composition, and the light and dark palettes.
//!
//! Everything here is a deterministic function of its inputs. Unknown scale
//! keys are reported as [`TokenError::UnknownKey`] instead of falling back to
//! a default, so that a typo in a style sheet surfaces immediately.
//!
//! # Example
//!
//! ```rust
//! use style_tokens::{Breakpoints, ScaleCurve, scale};
//!
//! let breakpoints = Breakpoints::default();
//! assert_eq!(breakpoints.classify(800.0), "md");
//!
//! let padding = scale::space(4.0).unwrap();
//! assert_eq!(padding, 16.0);
//! assert_eq!(ScaleCurve::Linear.adjust(1.5), 1.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod breakpoints;
pub mod color;
pub mod config;
pub mod error;
pub mod font_weight;
pub mod palette;
pub mod scale;
pub mod shadow;

pub use breakpoints::Breakpoints;
pub use color::{with_opacity, ColorValue};
pub use config::{ScaleCurves, StyleConfig};
pub use error::{Result, TokenError};
pub use font_weight::FontWeight;
pub use palette::{ColorScheme, Colors, DARK_COLORS, LIGHT_COLORS};
pub use scale::ScaleCurve;
pub use shadow::{Shadow, ShadowOffset};
