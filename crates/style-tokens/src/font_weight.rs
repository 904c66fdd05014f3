//! Font weight lookup

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TokenError};

/// Font weight, serialized as the numeric string renderers expect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FontWeight {
    /// Thin (100)
    #[serde(rename = "100")]
    Thin,
    /// Extra light (200)
    #[serde(rename = "200")]
    ExtraLight,
    /// Light (300)
    #[serde(rename = "300")]
    Light,
    /// Normal/Regular (400)
    #[serde(rename = "400")]
    Normal,
    /// Medium (500)
    #[serde(rename = "500")]
    Medium,
    /// Semi-bold (600)
    #[serde(rename = "600")]
    SemiBold,
    /// Bold (700)
    #[serde(rename = "700")]
    Bold,
    /// Extra bold (800)
    #[serde(rename = "800")]
    ExtraBold,
    /// Black (900)
    #[serde(rename = "900")]
    Black,
}

impl FontWeight {
    /// Look up a weight by its utility name (e.g. "semibold")
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "thin" => Ok(FontWeight::Thin),
            "extralight" => Ok(FontWeight::ExtraLight),
            "light" => Ok(FontWeight::Light),
            "normal" => Ok(FontWeight::Normal),
            "medium" => Ok(FontWeight::Medium),
            "semibold" => Ok(FontWeight::SemiBold),
            "bold" => Ok(FontWeight::Bold),
            "extrabold" => Ok(FontWeight::ExtraBold),
            "black" => Ok(FontWeight::Black),
            _ => Err(TokenError::unknown("font weight", name)),
        }
    }

    /// Numeric weight (100-900)
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
