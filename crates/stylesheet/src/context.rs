//! Scoped text-style propagation
//!
//! Container components (an alert, a button) set a text style that nested
//! text picks up. [`TextStyleScope`] keeps those styles as an explicit stack:
//! a container pushes its style for the duration of its children and the
//! returned [`ScopeGuard`] pops it again when dropped.

use std::ops::{Deref, DerefMut};

use crate::combine::combine;
use crate::record::StyleRecord;

/// Stack of inherited text styles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyleScope {
    frames: Vec<StyleRecord>,
}

impl TextStyleScope {
    /// Create an empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a style; it is popped when the guard drops
    pub fn push(&mut self, style: StyleRecord) -> ScopeGuard<'_> {
        self.frames.push(style);
        ScopeGuard { scope: self }
    }

    /// Effective inherited style, innermost frame last
    pub fn current(&self) -> StyleRecord {
        combine(self.frames.iter().map(Some))
    }

    /// Number of pushed frames
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Run `f` with `style` pushed
    pub fn with_text_style<R>(&mut self, style: StyleRecord, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut guard = self.push(style);
        f(&mut guard)
    }
}

/// Pops its frame from the [`TextStyleScope`] on drop
#[derive(Debug)]
pub struct ScopeGuard<'a> {
    scope: &'a mut TextStyleScope,
}

impl Deref for ScopeGuard<'_> {
    type Target = TextStyleScope;

    fn deref(&self) -> &TextStyleScope {
        self.scope
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut TextStyleScope {
        self.scope
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.scope.frames.pop();
    }
}
