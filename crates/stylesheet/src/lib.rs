//! Runtime style resolution
//!
//! This crate turns live window signals (color scheme, window size, font
//! scale, safe-area insets) into the style mappings that components render
//! with. A component supplies a theme provider, a function from the resolved
//! [`Theme`] and [`RuntimeMetrics`] to a [`StyleMapping`]; a
//! [`StyleResolver`] owned by the component's call site runs that provider
//! and memoizes the result until one of the signals it depends on changes.
//!
//! # Modules
//!
//! - [`signals`] - Host signals and the shared [`SignalStore`]
//! - [`runtime`] - Per-resolution runtime metrics
//! - [`theme`] - Theme and the [`Utils`] scale bundle
//! - [`record`] - Typed style records
//! - [`mapping`] - Style slots and mappings
//! - [`provider`] - Theme providers and style sheets
//! - [`resolver`] - The memoizing resolver
//! - [`combine`] - Style combination
//! - [`context`] - Scoped text-style propagation
//!
//! # Example
//!
//! ```rust
//! use stylesheet::{create_style_sheet, Signals, StyleMapping, StyleRecord, StyleResolver};
//!
//! let sheet = create_style_sheet(|theme, _runtime| {
//!     Ok(StyleMapping::new().with_static(
//!         "root",
//!         StyleRecord::new()
//!             .background_color(theme.colors.background)
//!             .padding(theme.utils.space(4.0)?),
//!     ))
//! });
//!
//! let mut resolver = StyleResolver::new(Some(sheet));
//! let resolved = resolver.resolve(&Signals::new(800.0, 600.0)).unwrap();
//! assert_eq!(resolved.breakpoint, "md");
//! assert_eq!(resolved.styles.style("root").unwrap().padding, Some(16.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod combine;
pub mod context;
pub mod error;
pub mod mapping;
pub mod provider;
pub mod record;
pub mod resolver;
pub mod runtime;
pub mod signals;
pub mod theme;

pub use combine::combine;
pub use context::{ScopeGuard, TextStyleScope};
pub use error::{Result, StyleError};
pub use mapping::{StyleMapping, StyleSlot, VariantArgs, VariantFn};
pub use provider::{create_style_sheet, StyleSheet, ThemeProvider};
pub use record::{
    Alignment, Dimension, FlexDirection, JustifyContent, Overflow, Position, StyleRecord,
    TextAlign, Transform,
};
pub use resolver::{resolve, ResolvedStyles, StyleResolver};
pub use runtime::{Orientation, RuntimeMetrics, ScreenSize, StatusBar};
pub use signals::{EdgeInsets, SignalKey, SignalStore, Signals, WindowMetrics};
pub use theme::{Theme, Utils};

pub use style_tokens::{
    with_opacity, ColorScheme, Colors, FontWeight, Shadow, StyleConfig, TokenError,
};
