//! Theme providers and style sheets

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::mapping::StyleMapping;
use crate::runtime::RuntimeMetrics;
use crate::theme::Theme;

/// Builds a component's style mapping from the theme and runtime metrics
///
/// Implementations must be pure: the same theme and runtime must yield an
/// equivalent mapping. Closures of the matching shape implement this trait.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeProvider: Send + Sync {
    /// Build the mapping
    fn create(&self, theme: &Theme, runtime: &RuntimeMetrics) -> Result<StyleMapping>;
}

impl<F> ThemeProvider for F
where
    F: Fn(&Theme, &RuntimeMetrics) -> Result<StyleMapping> + Send + Sync,
{
    fn create(&self, theme: &Theme, runtime: &RuntimeMetrics) -> Result<StyleMapping> {
        self(theme, runtime)
    }
}

/// A shareable theme provider
#[derive(Clone)]
pub struct StyleSheet {
    provider: Arc<dyn ThemeProvider>,
}

impl StyleSheet {
    /// Wrap any provider
    pub fn new(provider: impl ThemeProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Run the provider
    pub fn create(&self, theme: &Theme, runtime: &RuntimeMetrics) -> Result<StyleMapping> {
        self.provider.create(theme, runtime)
    }
}

impl fmt::Debug for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSheet").finish_non_exhaustive()
    }
}

/// Declare a style sheet from a closure
pub fn create_style_sheet<F>(f: F) -> StyleSheet
where
    F: Fn(&Theme, &RuntimeMetrics) -> Result<StyleMapping> + Send + Sync + 'static,
{
    StyleSheet::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StyleRecord;
    use crate::signals::Signals;
    use crate::theme::Utils;
    use style_tokens::{Breakpoints, ColorScheme, StyleConfig};

    fn fixtures() -> (Theme, RuntimeMetrics) {
        let runtime =
            RuntimeMetrics::from_signals(&Signals::new(800.0, 600.0), &Breakpoints::default());
        let utils = Utils::new(Arc::new(StyleConfig::default()), 1.0, "md");
        (Theme::new(ColorScheme::Light, utils), runtime)
    }

    #[test]
    fn test_closure_sheet() {
        let sheet = create_style_sheet(|theme, runtime| {
            Ok(StyleMapping::new().with_static(
                "root",
                StyleRecord::new()
                    .color(theme.colors.foreground)
                    .padding_top(runtime.insets.top),
            ))
        });
        let (theme, runtime) = fixtures();
        let mapping = sheet.create(&theme, &runtime).unwrap();
        assert_eq!(
            mapping.style("root").unwrap().color.as_deref(),
            Some(theme.colors.foreground)
        );
    }

    #[test]
    fn test_sheet_propagates_token_errors() {
        let sheet = create_style_sheet(|theme, _| {
            Ok(StyleMapping::new().with_static(
                "title",
                StyleRecord::new().font_size(theme.utils.font_size("jumbo")?),
            ))
        });
        let (theme, runtime) = fixtures();
        assert!(sheet.create(&theme, &runtime).is_err());
    }

    #[test]
    fn test_sheet_wraps_mock_provider() {
        let mut mock = MockThemeProvider::new();
        mock.expect_create()
            .times(2)
            .returning(|_, _| Ok(StyleMapping::new()));
        let sheet = StyleSheet::new(mock);
        let (theme, runtime) = fixtures();
        assert!(sheet.create(&theme, &runtime).unwrap().is_empty());
        assert!(sheet.clone().create(&theme, &runtime).unwrap().is_empty());
    }
}
