//! Stylesheet Kit
//!
//! Themeable styling for a mobile UI toolkit. Re-exports the two workspace
//! crates:
//!
//! - [`style_tokens`] - Scales, breakpoints, palettes and configuration
//! - [`stylesheet`] - Signals, theme providers and the memoizing resolver

pub use style_tokens;
pub use stylesheet;

pub use stylesheet::{
    combine, create_style_sheet, resolve, ColorScheme, EdgeInsets, ResolvedStyles, RuntimeMetrics,
    SignalStore, Signals, StyleConfig, StyleError, StyleMapping, StyleRecord, StyleResolver,
    StyleSheet, TextStyleScope, Theme, VariantArgs,
};
