//! Shadow presets
//!
//! Shadows are described the way mobile renderers take them: an offset, an
//! opacity and a blur radius for iOS, plus an elevation for Android.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};

/// Shadow offset
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadowOffset {
    /// Horizontal offset
    pub width: f32,
    /// Vertical offset
    pub height: f32,
}

/// Shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Shadow color
    pub shadow_color: String,
    /// Shadow offset
    pub shadow_offset: ShadowOffset,
    /// Shadow opacity (0.0 - 1.0)
    pub shadow_opacity: f32,
    /// Blur radius
    pub shadow_radius: f32,
    /// Android elevation
    pub elevation: f32,
}

impl Shadow {
    /// Create a new black shadow
    pub fn new(offset_y: f32, opacity: f32, radius: f32, elevation: f32) -> Self {
        Self {
            shadow_color: "black".to_string(),
            shadow_offset: ShadowOffset {
                width: 0.0,
                height: offset_y,
            },
            shadow_opacity: opacity,
            shadow_radius: radius,
            elevation,
        }
    }

    /// Look up a shadow preset by level name
    pub fn level(name: &str) -> Result<Self> {
        match name {
            "none" => Ok(shadows::none()),
            "sm" => Ok(shadows::sm()),
            "default" => Ok(shadows::default()),
            "md" => Ok(shadows::md()),
            "lg" => Ok(shadows::lg()),
            "xl" => Ok(shadows::xl()),
            "2xl" => Ok(shadows::xxl()),
            _ => Err(TokenError::unknown("shadow", name)),
        }
    }
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// No shadow
    pub fn none() -> Shadow {
        Shadow::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Small shadow
    pub fn sm() -> Shadow {
        Shadow::new(1.0, 0.05, 1.0, 1.0)
    }

    /// Default shadow
    pub fn default() -> Shadow {
        Shadow::new(1.0, 0.1, 3.0, 2.0)
    }

    /// Medium shadow
    pub fn md() -> Shadow {
        Shadow::new(4.0, 0.1, 6.0, 4.0)
    }

    /// Large shadow
    pub fn lg() -> Shadow {
        Shadow::new(10.0, 0.1, 15.0, 8.0)
    }

    /// Extra large shadow
    pub fn xl() -> Shadow {
        Shadow::new(20.0, 0.1, 25.0, 12.0)
    }

    /// 2x large shadow
    pub fn xxl() -> Shadow {
        Shadow::new(25.0, 0.25, 50.0, 16.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_presets_grow() {
        let levels = ["none", "sm", "default", "md", "lg", "xl", "2xl"];
        let presets: Vec<Shadow> = levels.iter().map(|l| Shadow::level(l).unwrap()).collect();
        for pair in presets.windows(2) {
            assert!(pair[0].shadow_radius < pair[1].shadow_radius);
            assert!(pair[0].elevation < pair[1].elevation);
        }
    }

    #[test]
    fn test_shadow_unknown_level() {
        assert!(matches!(
            Shadow::level("huge"),
            Err(TokenError::UnknownKey { scale: "shadow", .. })
        ));
    }

    #[test]
    fn test_shadow_serialization() {
        let json = serde_json::to_value(shadows::lg()).unwrap();
        assert_eq!(json["shadowOffset"]["height"], 10.0);
        assert_eq!(json["shadowColor"], "black");
        assert_eq!(json["elevation"], 8.0);
    }
}
