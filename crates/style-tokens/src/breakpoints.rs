//! Breakpoint registry
//!
//! A breakpoint is a named minimum width. The registry keeps its thresholds
//! sorted ascending so that classification is a scan for the last threshold
//! the width reaches.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};

/// Default breakpoint widths in logical pixels
pub mod widths {
    /// Small (640px)
    pub const SM: f32 = 640.0;
    /// Medium (768px)
    pub const MD: f32 = 768.0;
    /// Large (1024px)
    pub const LG: f32 = 1024.0;
    /// Extra large (1280px)
    pub const XL: f32 = 1280.0;
    /// 2x large (1536px)
    pub const XXL: f32 = 1536.0;
}

/// A single named width threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Threshold {
    /// Breakpoint name (e.g. "md")
    pub name: String,
    /// Minimum width, inclusive
    pub min_width: f32,
}

impl Threshold {
    /// Create a new threshold
    pub fn new(name: impl Into<String>, min_width: f32) -> Self {
        Self {
            name: name.into(),
            min_width,
        }
    }
}

/// Ordered set of named width thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Threshold>", into = "Vec<Threshold>")]
pub struct Breakpoints {
    thresholds: Vec<Threshold>,
}

impl Breakpoints {
    /// Build a registry from `(name, min_width)` pairs in any order
    ///
    /// Fails if the set is empty, a name repeats, or a width is negative or
    /// not finite.
    pub fn new<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        let thresholds = pairs
            .into_iter()
            .map(|(name, width)| Threshold::new(name, width))
            .collect::<Vec<_>>();
        Self::from_thresholds(thresholds)
    }

    fn from_thresholds(mut thresholds: Vec<Threshold>) -> Result<Self> {
        if thresholds.is_empty() {
            return Err(TokenError::InvalidConfig(
                "breakpoint registry is empty".to_string(),
            ));
        }

        for (i, threshold) in thresholds.iter().enumerate() {
            if !threshold.min_width.is_finite() || threshold.min_width < 0.0 {
                return Err(TokenError::InvalidConfig(format!(
                    "breakpoint {} has invalid width {}",
                    threshold.name, threshold.min_width
                )));
            }
            if thresholds[..i].iter().any(|t| t.name == threshold.name) {
                return Err(TokenError::InvalidConfig(format!(
                    "duplicate breakpoint {}",
                    threshold.name
                )));
            }
        }

        thresholds.sort_by(|a, b| a.min_width.total_cmp(&b.min_width));
        Ok(Self { thresholds })
    }

    /// Name of the largest threshold that `width` reaches
    ///
    /// Widths below every threshold classify as the smallest breakpoint.
    pub fn classify(&self, width: f32) -> &str {
        self.classify_threshold(width).name.as_str()
    }

    /// Threshold record that `width` classifies as
    pub fn classify_threshold(&self, width: f32) -> &Threshold {
        self.thresholds
            .iter()
            .rev()
            .find(|t| width >= t.min_width)
            .unwrap_or(&self.thresholds[0])
    }

    /// Minimum width of a named breakpoint
    pub fn min_width_of(&self, name: &str) -> Result<f32> {
        self.thresholds
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.min_width)
            .ok_or_else(|| TokenError::unknown("breakpoint", name))
    }

    /// Whether `current` is at or above the named breakpoint `target`
    pub fn media_min_width(&self, current: &str, target: &str) -> Result<bool> {
        Ok(self.min_width_of(current)? >= self.min_width_of(target)?)
    }

    /// Smallest registered breakpoint
    pub fn smallest(&self) -> &Threshold {
        &self.thresholds[0]
    }

    /// Iterate thresholds in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &Threshold> {
        self.thresholds.iter()
    }

    /// Number of registered breakpoints
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Always false; an empty registry cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            thresholds: vec![
                Threshold::new("sm", widths::SM),
                Threshold::new("md", widths::MD),
                Threshold::new("lg", widths::LG),
                Threshold::new("xl", widths::XL),
                Threshold::new("2xl", widths::XXL),
            ],
        }
    }
}

impl TryFrom<Vec<Threshold>> for Breakpoints {
    type Error = TokenError;

    fn try_from(thresholds: Vec<Threshold>) -> Result<Self> {
        Self::from_thresholds(thresholds)
    }
}

impl From<Breakpoints> for Vec<Threshold> {
    fn from(breakpoints: Breakpoints) -> Self {
        breakpoints.thresholds
    }
}
