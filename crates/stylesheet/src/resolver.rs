//! Memoizing style resolver
//!
//! [`resolve`] is the pure computation: sanitize the signals, assemble the
//! runtime metrics, bind the utilities, pick the palette and run the
//! provider. [`StyleResolver`] wraps it for one call site and reruns it only
//! when the [`SignalKey`] of the incoming signals differs from the last one.
//!
//! Pixel ratio, status bar height and layout direction are not part of the
//! key. They are read whenever a recomputation happens, but changing them
//! alone does not trigger one.

use std::sync::Arc;
use style_tokens::StyleConfig;

use crate::error::Result;
use crate::mapping::StyleMapping;
use crate::provider::StyleSheet;
use crate::runtime::RuntimeMetrics;
use crate::signals::{SignalKey, SignalStore, Signals};
use crate::theme::{Theme, Utils};

/// Output of one resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyles {
    /// The provider's mapping (empty without a provider)
    pub styles: StyleMapping,
    /// Theme of the active scheme
    pub theme: Theme,
    /// Current breakpoint name
    pub breakpoint: String,
    /// Runtime metrics the provider saw
    pub runtime: RuntimeMetrics,
}

/// Resolve styles once, without memoization
pub fn resolve(
    sheet: Option<&StyleSheet>,
    signals: &Signals,
    config: &Arc<StyleConfig>,
) -> Result<ResolvedStyles> {
    resolve_sanitized(sheet, &signals.sanitized(), config)
}

fn resolve_sanitized(
    sheet: Option<&StyleSheet>,
    signals: &Signals,
    config: &Arc<StyleConfig>,
) -> Result<ResolvedStyles> {
    let runtime = RuntimeMetrics::from_signals(signals, &config.breakpoints);
    let utils = Utils::new(Arc::clone(config), runtime.font_scale, runtime.breakpoint.as_str());
    let theme = Theme::new(runtime.theme_name, utils);

    let styles = match sheet {
        Some(sheet) => sheet.create(&theme, &runtime)?,
        None => StyleMapping::new(),
    };

    Ok(ResolvedStyles {
        styles,
        theme,
        breakpoint: runtime.breakpoint.clone(),
        runtime,
    })
}

/// Per-call-site memoizing resolver
#[derive(Debug)]
pub struct StyleResolver {
    config: Arc<StyleConfig>,
    sheet: Option<StyleSheet>,
    cached: Option<(SignalKey, Arc<ResolvedStyles>)>,
    recomputations: u64,
}

impl StyleResolver {
    /// Resolver with the default configuration
    pub fn new(sheet: Option<StyleSheet>) -> Self {
        Self::with_config(Arc::new(StyleConfig::default()), sheet)
    }

    /// Resolver with a shared configuration
    pub fn with_config(config: Arc<StyleConfig>, sheet: Option<StyleSheet>) -> Self {
        Self {
            config,
            sheet,
            cached: None,
            recomputations: 0,
        }
    }

    /// Resolve styles for the given signals
    ///
    /// Returns the previous result (the same `Arc`) when the signal key is
    /// unchanged. Provider errors are returned as-is and not cached.
    pub fn resolve(&mut self, signals: &Signals) -> Result<Arc<ResolvedStyles>> {
        let signals = signals.sanitized();
        let key = signals.key();

        if let Some((cached_key, resolved)) = &self.cached {
            if *cached_key == key {
                tracing::trace!(breakpoint = %resolved.breakpoint, "Style cache hit");
                return Ok(Arc::clone(resolved));
            }
        }

        let resolved = Arc::new(resolve_sanitized(self.sheet.as_ref(), &signals, &self.config)?);
        self.recomputations += 1;
        tracing::debug!(
            scheme = %resolved.theme.name,
            width = signals.window.width,
            height = signals.window.height,
            font_scale = signals.window.font_scale,
            breakpoint = %resolved.breakpoint,
            slots = resolved.styles.len(),
            "Resolved styles"
        );

        self.cached = Some((key, Arc::clone(&resolved)));
        Ok(resolved)
    }

    /// Resolve against the current contents of a signal store
    pub fn resolve_from(&mut self, store: &SignalStore) -> Result<Arc<ResolvedStyles>> {
        self.resolve(&store.snapshot())
    }

    /// Drop the cached result so the next call recomputes
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Number of times the provider has been run successfully
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{create_style_sheet, MockThemeProvider};
    use crate::mapping::VariantArgs;
    use crate::record::StyleRecord;
    use crate::signals::EdgeInsets;
    use crate::StyleError;
    use style_tokens::{Breakpoints, ColorScheme, TokenError, DARK_COLORS, LIGHT_COLORS};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn mock_sheet(times: usize) -> StyleSheet {
        let mut mock = MockThemeProvider::new();
        mock.expect_create()
            .times(times)
            .returning(|_, _| Ok(StyleMapping::new().with_static("root", StyleRecord::new())));
        StyleSheet::new(mock)
    }

    /// One slot per dependency so change-sensitivity can be checked per slot
    fn signal_sheet() -> StyleSheet {
        create_style_sheet(|theme, runtime| {
            Ok(StyleMapping::new()
                .with_static("surface", StyleRecord::new().background_color(theme.colors.background))
                .with_static("frame", StyleRecord::new().width(runtime.screen.width))
                .with_static("column", StyleRecord::new().height(runtime.screen.height))
                .with_static("title", StyleRecord::new().font_size(theme.utils.font_size("xl")?))
                .with_static(
                    "safe",
                    StyleRecord::new()
                        .padding_top(runtime.insets.top)
                        .padding_bottom(runtime.insets.bottom),
                )
                .with_static("divider", StyleRecord::new().border_width(1.0)))
        })
    }

    // ==========================================================================
    // Resolution Tests
    // ==========================================================================

    #[test]
    fn test_missing_provider_yields_empty_mapping() {
        let mut resolver = StyleResolver::new(None);
        let resolved = resolver.resolve(&Signals::new(800.0, 600.0)).unwrap();
        assert!(resolved.styles.is_empty());
        assert_eq!(resolved.breakpoint, "md");
        assert_eq!(resolved.theme.colors, &LIGHT_COLORS);
    }

    #[test]
    fn test_resolves_theme_for_scheme() {
        let config = Arc::new(StyleConfig::default());
        let signals = Signals::new(400.0, 800.0).color_scheme(ColorScheme::Dark);
        let resolved = resolve(None, &signals, &config).unwrap();
        assert_eq!(resolved.theme.name, ColorScheme::Dark);
        assert_eq!(resolved.theme.colors, &DARK_COLORS);
        assert_eq!(resolved.runtime.theme_name, ColorScheme::Dark);
    }

    #[test]
    fn test_breakpoint_uses_configured_registry() {
        let breakpoints = Breakpoints::new([("sm", 360.0), ("md", 768.0), ("lg", 1024.0)]).unwrap();
        let config = Arc::new(StyleConfig::new().breakpoints(breakpoints));
        let sheet = create_style_sheet(|theme, _| {
            let footer = if theme.utils.media_min_width("md")? {
                StyleRecord::new().flex_direction(crate::FlexDirection::RowReverse)
            } else {
                StyleRecord::new().flex_direction(crate::FlexDirection::Column)
            };
            Ok(StyleMapping::new().with_static("footer", footer))
        });
        let mut resolver = StyleResolver::with_config(config, Some(sheet));

        let wide = resolver.resolve(&Signals::new(800.0, 600.0)).unwrap();
        assert_eq!(wide.breakpoint, "md");
        assert!(wide.theme.utils.media_min_width("sm").unwrap());
        assert!(!wide.theme.utils.media_min_width("lg").unwrap());
        assert_eq!(
            wide.styles.style("footer").unwrap().flex_direction,
            Some(crate::FlexDirection::RowReverse)
        );

        let narrow = resolver.resolve(&Signals::new(200.0, 600.0)).unwrap();
        assert_eq!(narrow.breakpoint, "sm");
        assert_eq!(
            narrow.styles.style("footer").unwrap().flex_direction,
            Some(crate::FlexDirection::Column)
        );
    }

    #[test]
    fn test_provider_error_surfaces() {
        let sheet = create_style_sheet(|theme, _| {
            Ok(StyleMapping::new()
                .with_static("root", StyleRecord::new().gap(theme.utils.space(13.0)?)))
        });
        let mut resolver = StyleResolver::new(Some(sheet));
        let err = resolver.resolve(&Signals::default()).unwrap_err();
        assert!(matches!(
            err,
            StyleError::Token(TokenError::UnknownKey { scale: "space", .. })
        ));
        assert_eq!(resolver.recomputations(), 0);
    }

    // ==========================================================================
    // Memoization Tests
    // ==========================================================================

    #[test]
    fn test_identical_signals_hit_cache() {
        init_tracing();
        let mut resolver = StyleResolver::new(Some(mock_sheet(1)));
        let signals = Signals::new(390.0, 844.0).insets(EdgeInsets::new(47.0, 0.0, 34.0, 0.0));

        let first = resolver.resolve(&signals).unwrap();
        let second = resolver.resolve(&signals.clone()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(resolver.recomputations(), 1);
    }

    #[test]
    fn test_each_dependency_triggers_recompute() {
        init_tracing();
        let base = Signals::new(390.0, 844.0);
        let changes = [
            base.clone().color_scheme(ColorScheme::Dark),
            Signals::new(391.0, 844.0),
            Signals::new(390.0, 845.0),
            base.clone().font_scale(1.1),
            base.clone().insets(EdgeInsets::new(0.0, 1.0, 0.0, 0.0)),
        ];
        for changed in changes {
            let mut resolver = StyleResolver::new(Some(mock_sheet(2)));
            let first = resolver.resolve(&base).unwrap();
            let second = resolver.resolve(&changed).unwrap();
            assert!(!Arc::ptr_eq(&first, &second), "{:?}", changed);
        }
    }

    #[test]
    fn test_non_dependencies_do_not_recompute() {
        let mut resolver = StyleResolver::new(Some(mock_sheet(1)));
        let base = Signals::new(390.0, 844.0);
        let first = resolver.resolve(&base).unwrap();
        let second = resolver
            .resolve(&base.clone().pixel_ratio(3.0).rtl(true).status_bar_height(24.0))
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.runtime.pixel_ratio, 1.0);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let mut mock = MockThemeProvider::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|theme, _| Err(theme.utils.rounded("pill").unwrap_err().into()));
        mock.expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(StyleMapping::new()));

        let mut resolver = StyleResolver::new(Some(StyleSheet::new(mock)));
        assert!(resolver.resolve(&Signals::default()).is_err());
        assert!(resolver.resolve(&Signals::default()).is_ok());
        assert_eq!(resolver.recomputations(), 1);
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let mut resolver = StyleResolver::new(Some(mock_sheet(2)));
        let first = resolver.resolve(&Signals::default()).unwrap();
        resolver.invalidate();
        let second = resolver.resolve(&Signals::default()).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_call_sites_are_independent() {
        let sheet = signal_sheet();
        let mut a = StyleResolver::new(Some(sheet.clone()));
        let mut b = StyleResolver::new(Some(sheet));

        let from_a = a.resolve(&Signals::new(800.0, 600.0)).unwrap();
        let from_b = b.resolve(&Signals::new(800.0, 600.0)).unwrap();
        assert!(!Arc::ptr_eq(&from_a, &from_b));
        assert_eq!(from_a, from_b);

        b.resolve(&Signals::new(1200.0, 600.0)).unwrap();
        assert_eq!(a.recomputations(), 1);
        assert_eq!(b.recomputations(), 2);
    }

    #[test]
    fn test_resolve_from_store() {
        let store = SignalStore::new(Signals::new(390.0, 844.0));
        let mut resolver = StyleResolver::new(Some(signal_sheet()));

        let portrait = resolver.resolve_from(&store).unwrap();
        assert_eq!(portrait.breakpoint, "sm");

        store.set_window(1280.0, 800.0, 1.0);
        let landscape = resolver.resolve_from(&store).unwrap();
        assert_eq!(landscape.breakpoint, "xl");
        assert!(landscape.runtime.is_landscape());
        assert_eq!(resolver.recomputations(), 2);
    }

    #[test]
    fn test_resolver_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<StyleResolver>();
        assert_send::<Arc<ResolvedStyles>>();
    }

    // ==========================================================================
    // Change Sensitivity Tests
    // ==========================================================================

    #[test]
    fn test_change_sensitivity_per_slot() {
        let config = Arc::new(StyleConfig::default());
        let sheet = signal_sheet();
        let base_signals = Signals::new(390.0, 844.0);
        let base = resolve(Some(&sheet), &base_signals, &config).unwrap();

        let cases: [(Signals, &[&str]); 5] = [
            (base_signals.clone().color_scheme(ColorScheme::Dark), &["surface"]),
            (Signals::new(420.0, 844.0), &["frame"]),
            (Signals::new(390.0, 900.0), &["column"]),
            (base_signals.clone().font_scale(1.3), &["title"]),
            (
                base_signals.clone().insets(EdgeInsets::new(47.0, 0.0, 34.0, 0.0)),
                &["safe"],
            ),
        ];

        for (signals, changed) in cases {
            let next = resolve(Some(&sheet), &signals, &config).unwrap();
            for name in base.styles.names() {
                let before = base.styles.style(name).unwrap();
                let after = next.styles.style(name).unwrap();
                if changed.contains(&name) {
                    assert_ne!(before, after, "{} should change for {:?}", name, signals);
                } else {
                    assert_eq!(before, after, "{} should not change for {:?}", name, signals);
                }
            }
        }
    }

    #[test]
    fn test_idempotent_resolution() {
        let config = Arc::new(StyleConfig::default());
        let sheet = signal_sheet();
        let signals = Signals::new(1024.0, 768.0).font_scale(1.2);
        let a = resolve(Some(&sheet), &signals, &config).unwrap();
        let b = resolve(Some(&sheet), &signals, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_idempotent_resolution_with_variants() {
        let config = Arc::new(StyleConfig::default());
        let sheet = create_style_sheet(|theme, _| {
            let radius = theme.utils.rounded("md")?;
            let colors = theme.colors;
            Ok(StyleMapping::new()
                .with_static("label", StyleRecord::new().font_size(theme.utils.font_size("sm")?))
                .with_variant("root", move |args: &VariantArgs| {
                    let record = StyleRecord::new().border_radius(radius);
                    match args.get_or("variant", "default") {
                        "outline" => record.border_width(1.0).border_color(colors.input),
                        _ => record.background_color(colors.primary),
                    }
                }))
        });
        let signals = Signals::new(390.0, 844.0).font_scale(1.3);
        let a = resolve(Some(&sheet), &signals, &config).unwrap();
        let b = resolve(Some(&sheet), &signals, &config).unwrap();

        // Variant closures from separate runs differ by identity only
        assert_ne!(a.styles, b.styles);
        assert_eq!(a.theme, b.theme);
        assert_eq!(a.runtime, b.runtime);
        assert_eq!(a.styles.names().collect::<Vec<_>>(), b.styles.names().collect::<Vec<_>>());
        assert_eq!(a.styles.style("label").unwrap(), b.styles.style("label").unwrap());

        let samples = [
            VariantArgs::new(),
            VariantArgs::new().with("variant", "outline"),
            VariantArgs::new().with("variant", "unknown"),
        ];
        for args in &samples {
            assert_eq!(
                a.styles.variant("root", args).unwrap(),
                b.styles.variant("root", args).unwrap()
            );
            assert_eq!(
                a.styles.get("root").unwrap().evaluate(args),
                b.styles.get("root").unwrap().evaluate(args)
            );
        }
    }
}
