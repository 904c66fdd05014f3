//! Style slots and mappings
//!
//! A theme provider returns a [`StyleMapping`]: named slots, each either a
//! fixed [`StyleRecord`] or a function of [`VariantArgs`] that produces one.
//! Components read slots explicitly through [`StyleMapping::style`] and
//! [`StyleMapping::variant`].

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, StyleError};
use crate::record::StyleRecord;

/// Function producing a record from variant arguments
pub type VariantFn = Arc<dyn Fn(&VariantArgs) -> StyleRecord + Send + Sync>;

/// Arguments passed to a variant slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantArgs {
    args: BTreeMap<String, String>,
}

impl VariantArgs {
    /// No arguments
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// Look up an argument
    pub fn get(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }

    /// Look up an argument, falling back to `default`
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }
}

/// A named entry of a style mapping
#[derive(Clone)]
pub enum StyleSlot {
    /// Fixed record
    Static(StyleRecord),
    /// Record computed from variant arguments
    Variant(VariantFn),
}

impl StyleSlot {
    /// Record for this slot; static slots ignore `args`
    pub fn evaluate(&self, args: &VariantArgs) -> StyleRecord {
        match self {
            StyleSlot::Static(record) => record.clone(),
            StyleSlot::Variant(f) => f(args),
        }
    }

    /// Check if this is a static slot
    pub fn is_static(&self) -> bool {
        matches!(self, StyleSlot::Static(_))
    }
}

impl fmt::Debug for StyleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSlot::Static(record) => f.debug_tuple("Static").field(record).finish(),
            StyleSlot::Variant(_) => f.write_str("Variant(..)"),
        }
    }
}

impl PartialEq for StyleSlot {
    /// Static slots compare by value, variant slots by identity
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StyleSlot::Static(a), StyleSlot::Static(b)) => a == b,
            (StyleSlot::Variant(a), StyleSlot::Variant(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Named collection of style slots
///
/// Equality compares static slots by value and variant slots by identity, so
/// two mappings built by separate provider runs are unequal as soon as they
/// hold a variant slot. Compare the evaluated records in that case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMapping {
    slots: BTreeMap<String, StyleSlot>,
}

impl StyleMapping {
    /// Empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a static slot
    pub fn with_static(mut self, name: impl Into<String>, record: StyleRecord) -> Self {
        self.slots.insert(name.into(), StyleSlot::Static(record));
        self
    }

    /// Add a variant slot
    pub fn with_variant<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&VariantArgs) -> StyleRecord + Send + Sync + 'static,
    {
        self.slots.insert(name.into(), StyleSlot::Variant(Arc::new(f)));
        self
    }

    /// Insert or replace a slot
    pub fn insert(&mut self, name: impl Into<String>, slot: StyleSlot) {
        self.slots.insert(name.into(), slot);
    }

    /// Look up a slot
    pub fn get(&self, name: &str) -> Option<&StyleSlot> {
        self.slots.get(name)
    }

    /// Record of a static slot
    pub fn style(&self, name: &str) -> Result<&StyleRecord> {
        match self.slots.get(name) {
            Some(StyleSlot::Static(record)) => Ok(record),
            Some(StyleSlot::Variant(_)) => Err(StyleError::SlotKind {
                name: name.to_string(),
                expected: "static",
            }),
            None => Err(StyleError::MissingSlot(name.to_string())),
        }
    }

    /// Record of a variant slot for the given arguments
    pub fn variant(&self, name: &str, args: &VariantArgs) -> Result<StyleRecord> {
        match self.slots.get(name) {
            Some(StyleSlot::Variant(f)) => Ok(f(args)),
            Some(StyleSlot::Static(_)) => Err(StyleError::SlotKind {
                name: name.to_string(),
                expected: "a variant",
            }),
            None => Err(StyleError::MissingSlot(name.to_string())),
        }
    }

    /// Slot names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the mapping has no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Serialize for StyleMapping {
    /// Serializes static slots only; variant slots have no fixed form
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let statics: Vec<_> = self
            .slots
            .iter()
            .filter_map(|(name, slot)| match slot {
                StyleSlot::Static(record) => Some((name, record)),
                StyleSlot::Variant(_) => None,
            })
            .collect();
        let mut map = serializer.serialize_map(Some(statics.len()))?;
        for (name, record) in statics {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}
