//! Typed style records
//!
//! A [`StyleRecord`] is the unit a renderer consumes: every property is
//! optional and absent properties are left out of the serialized form. The
//! property names serialize in camelCase, matching the style objects of
//! React-Native-like renderers.

use serde::{Deserialize, Serialize};
use style_tokens::{FontWeight, Shadow, ShadowOffset};

// =============================================================================
// Property Value Types
// =============================================================================

/// Dimension value (points or percentage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Fixed point value
    Points(f32),
    /// Percentage of parent, e.g. "100%"
    Percent(String),
}

impl Dimension {
    /// Create a percentage dimension
    pub fn percent(value: f32) -> Self {
        Dimension::Percent(format!("{}%", value))
    }

    /// Full size of the parent
    pub fn full() -> Self {
        Self::percent(100.0)
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Points(value)
    }
}

/// Positioning scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// In normal flow
    Relative,
    /// Out of flow, relative to the parent
    Absolute,
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    /// Row (horizontal)
    Row,
    /// Column (vertical)
    Column,
    /// Row reversed
    RowReverse,
    /// Column reversed
    ColumnReverse,
}

/// Cross-axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// Align to start
    FlexStart,
    /// Align to center
    Center,
    /// Align to end
    FlexEnd,
    /// Stretch to fill
    Stretch,
    /// Baseline alignment
    Baseline,
}

/// Main-axis distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start
    FlexStart,
    /// Center
    Center,
    /// End
    FlexEnd,
    /// Space between
    SpaceBetween,
    /// Space around
    SpaceAround,
    /// Space evenly
    SpaceEvenly,
}

/// Overflow behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Content may overflow
    Visible,
    /// Content is clipped
    Hidden,
    /// Content scrolls
    Scroll,
}

/// Text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Platform default
    Auto,
    /// Left aligned
    Left,
    /// Right aligned
    Right,
    /// Centered
    Center,
    /// Justified
    Justify,
}

/// A single transform step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transform {
    /// Horizontal translation
    TranslateX(f32),
    /// Vertical translation
    TranslateY(f32),
    /// Uniform scale
    Scale(f32),
    /// Rotation, e.g. "45deg"
    Rotate(String),
}

// =============================================================================
// Style Record
// =============================================================================

macro_rules! style_record {
    (
        values { $( $(#[$vdoc:meta])* $vfield:ident: $vty:ty, )* }
        conversions { $( $(#[$cdoc:meta])* $cfield:ident: $cty:ty, )* }
    ) => {
        /// A set of optional style properties
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct StyleRecord {
            $(
                $(#[$vdoc])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $vfield: Option<$vty>,
            )*
            $(
                $(#[$cdoc])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $cfield: Option<$cty>,
            )*
        }

        impl StyleRecord {
            $(
                $(#[$vdoc])*
                pub fn $vfield(mut self, value: $vty) -> Self {
                    self.$vfield = Some(value);
                    self
                }
            )*
            $(
                $(#[$cdoc])*
                pub fn $cfield(mut self, value: impl Into<$cty>) -> Self {
                    self.$cfield = Some(value.into());
                    self
                }
            )*

            /// Overlay `other` onto `self`; properties set in `other` win
            pub fn merge(&mut self, other: &StyleRecord) {
                $(
                    if other.$vfield.is_some() {
                        self.$vfield = other.$vfield.clone();
                    }
                )*
                $(
                    if other.$cfield.is_some() {
                        self.$cfield = other.$cfield.clone();
                    }
                )*
            }

            /// Check if no property is set
            pub fn is_empty(&self) -> bool {
                true $( && self.$vfield.is_none() )* $( && self.$cfield.is_none() )*
            }
        }
    };
}

style_record! {
    values {
        // Layout
        /// Positioning scheme
        position: Position,
        /// Width to height ratio
        aspect_ratio: f32,
        /// Flex factor
        flex: f32,
        /// Flex direction
        flex_direction: FlexDirection,
        /// Flex grow factor
        flex_grow: f32,
        /// Flex shrink factor
        flex_shrink: f32,
        /// Main-axis distribution
        justify_content: JustifyContent,
        /// Cross-axis alignment of children
        align_items: Alignment,
        /// Cross-axis alignment of this element
        align_self: Alignment,
        /// Gap between children
        gap: f32,
        /// Overflow behaviour
        overflow: Overflow,

        // Spacing
        /// Padding on all sides
        padding: f32,
        /// Horizontal padding
        padding_horizontal: f32,
        /// Vertical padding
        padding_vertical: f32,
        /// Top padding
        padding_top: f32,
        /// Right padding
        padding_right: f32,
        /// Bottom padding
        padding_bottom: f32,
        /// Left padding
        padding_left: f32,
        /// Margin on all sides
        margin: f32,
        /// Horizontal margin
        margin_horizontal: f32,
        /// Vertical margin
        margin_vertical: f32,
        /// Top margin
        margin_top: f32,
        /// Bottom margin
        margin_bottom: f32,

        // Border
        /// Border width
        border_width: f32,
        /// Border radius
        border_radius: f32,
        /// Opacity (0.0 - 1.0)
        opacity: f32,

        // Shadow
        /// Shadow offset
        shadow_offset: ShadowOffset,
        /// Shadow opacity
        shadow_opacity: f32,
        /// Shadow blur radius
        shadow_radius: f32,
        /// Android elevation
        elevation: f32,

        // Text
        /// Font size
        font_size: f32,
        /// Font weight
        font_weight: FontWeight,
        /// Letter spacing
        letter_spacing: f32,
        /// Line height
        line_height: f32,
        /// Text alignment
        text_align: TextAlign,

        /// Transform steps, applied in order
        transform: Vec<Transform>,
    }
    conversions {
        /// Top offset
        top: Dimension,
        /// Right offset
        right: Dimension,
        /// Bottom offset
        bottom: Dimension,
        /// Left offset
        left: Dimension,
        /// Width
        width: Dimension,
        /// Height
        height: Dimension,
        /// Minimum width
        min_width: Dimension,
        /// Maximum width
        max_width: Dimension,
        /// Minimum height
        min_height: Dimension,
        /// Maximum height
        max_height: Dimension,
        /// Border color
        border_color: String,
        /// Background color
        background_color: String,
        /// Shadow color
        shadow_color: String,
        /// Text color
        color: String,
    }
}

impl StyleRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every property of a shadow preset
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow_color = Some(shadow.shadow_color);
        self.shadow_offset = Some(shadow.shadow_offset);
        self.shadow_opacity = Some(shadow.shadow_opacity);
        self.shadow_radius = Some(shadow.shadow_radius);
        self.elevation = Some(shadow.elevation);
        self
    }

    /// Stretch to all four edges of the parent
    pub fn absolute_fill(self) -> Self {
        self.position(Position::Absolute)
            .top(0.0_f32)
            .right(0.0_f32)
            .bottom(0.0_f32)
            .left(0.0_f32)
    }

    /// Copy of `self` with `other` overlaid
    pub fn merged(&self, other: &StyleRecord) -> StyleRecord {
        let mut merged = self.clone();
        merged.merge(other);
        merged
    }
}
