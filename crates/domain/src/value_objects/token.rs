//! Prototype token presentation for actors.
//!
//! Texture, light and sight have fixed defaults supplied at import time.
//! Bars, display modes, disposition, token name and actor link belong to
//! the new-actor defaults policy (`crate::actor_defaults`) and stay `None`
//! here until that policy runs.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

// ============================================================================
// Disposition / display mode codes
// ============================================================================

/// How a token relates to the party. Serialized as the host's numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum TokenDisposition {
    Secret,
    Hostile,
    Neutral,
    Friendly,
}

impl TokenDisposition {
    pub fn code(self) -> i8 {
        match self {
            Self::Secret => -2,
            Self::Hostile => -1,
            Self::Neutral => 0,
            Self::Friendly => 1,
        }
    }
}

impl TryFrom<i8> for TokenDisposition {
    type Error = DomainError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -2 => Ok(Self::Secret),
            -1 => Ok(Self::Hostile),
            0 => Ok(Self::Neutral),
            1 => Ok(Self::Friendly),
            other => Err(DomainError::parse(format!(
                "Unknown token disposition: {}",
                other
            ))),
        }
    }
}

impl From<TokenDisposition> for i8 {
    fn from(value: TokenDisposition) -> i8 {
        value.code()
    }
}

/// When a token's name or bars are shown. Serialized as the host's numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TokenDisplayMode {
    None,
    Control,
    OwnerHover,
    Hover,
    Owner,
    Always,
}

impl TokenDisplayMode {
    pub fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Control => 10,
            Self::OwnerHover => 20,
            Self::Hover => 30,
            Self::Owner => 40,
            Self::Always => 50,
        }
    }
}

impl TryFrom<u8> for TokenDisplayMode {
    type Error = DomainError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::None),
            10 => Ok(Self::Control),
            20 => Ok(Self::OwnerHover),
            30 => Ok(Self::Hover),
            40 => Ok(Self::Owner),
            50 => Ok(Self::Always),
            other => Err(DomainError::parse(format!(
                "Unknown token display mode: {}",
                other
            ))),
        }
    }
}

impl From<TokenDisplayMode> for u8 {
    fn from(value: TokenDisplayMode) -> u8 {
        value.code()
    }
}

// ============================================================================
// Token sub-records
// ============================================================================

/// A resource bar bound to an actor attribute path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBar {
    pub attribute: String,
}

impl TokenBar {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTexture {
    pub src: String,
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub rotation: f64,
    pub tint: Option<String>,
}

impl TokenTexture {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            scale_x: 1.0,
            scale_y: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            rotation: 0.0,
            tint: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAnimation {
    #[serde(rename = "type")]
    pub animation_type: Option<String>,
    pub speed: u8,
    pub intensity: u8,
    pub reverse: bool,
}

impl Default for TokenAnimation {
    fn default() -> Self {
        Self {
            animation_type: None,
            speed: 5,
            intensity: 5,
            reverse: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDarkness {
    pub min: f64,
    pub max: f64,
}

impl Default for TokenDarkness {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Light emitted by the token. Defaults emit nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenLight {
    pub alpha: f64,
    pub angle: f64,
    pub bright: f64,
    pub color: Option<String>,
    pub coloration: u8,
    pub dim: f64,
    pub attenuation: f64,
    pub luminosity: f64,
    pub saturation: f64,
    pub contrast: f64,
    pub shadows: f64,
    pub animation: TokenAnimation,
    pub darkness: TokenDarkness,
}

impl Default for TokenLight {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            angle: 360.0,
            bright: 0.0,
            color: None,
            coloration: 1,
            dim: 0.0,
            attenuation: 0.5,
            luminosity: 0.5,
            saturation: 0.0,
            contrast: 0.0,
            shadows: 0.0,
            animation: TokenAnimation::default(),
            darkness: TokenDarkness::default(),
        }
    }
}

/// Vision settings. `enabled` is switched on by the defaults policy for characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSight {
    pub enabled: bool,
    pub range: Option<f64>,
    pub angle: f64,
    pub vision_mode: String,
    pub color: Option<String>,
    pub attenuation: f64,
    pub brightness: f64,
    pub saturation: f64,
    pub contrast: f64,
}

impl Default for TokenSight {
    fn default() -> Self {
        Self {
            enabled: false,
            range: None,
            angle: 360.0,
            vision_mode: "basic".to_string(),
            color: None,
            attenuation: 0.1,
            brightness: 0.0,
            saturation: 0.0,
            contrast: 0.0,
        }
    }
}

// ============================================================================
// PrototypeToken
// ============================================================================

/// Template for tokens placed on a scene from this actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrototypeToken {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<TokenDisplayMode>,
    pub actor_link: bool,
    pub texture: TokenTexture,
    pub width: f64,
    pub height: f64,
    pub lock_rotation: bool,
    pub rotation: f64,
    pub alpha: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposition: Option<TokenDisposition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_bars: Option<TokenDisplayMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar1: Option<TokenBar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar2: Option<TokenBar>,
    pub light: TokenLight,
    pub sight: TokenSight,
    pub random_img: bool,
}

impl PrototypeToken {
    /// A one-square token with the given image and no policy fields set.
    pub fn with_image(src: impl Into<String>) -> Self {
        Self {
            name: None,
            display_name: None,
            actor_link: false,
            texture: TokenTexture::new(src),
            width: 1.0,
            height: 1.0,
            lock_rotation: false,
            rotation: 0.0,
            alpha: 1.0,
            disposition: None,
            display_bars: None,
            bar1: None,
            bar2: None,
            light: TokenLight::default(),
            sight: TokenSight::default(),
            random_img: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposition_uses_host_codes() {
        assert_eq!(TokenDisposition::Hostile.code(), -1);
        assert_eq!(TokenDisposition::Neutral.code(), 0);
        assert_eq!(TokenDisposition::try_from(1), Ok(TokenDisposition::Friendly));
        assert!(TokenDisposition::try_from(7).is_err());

        let json = serde_json::to_value(TokenDisposition::Hostile).expect("serialize");
        assert_eq!(json, serde_json::json!(-1));
    }

    #[test]
    fn display_mode_rejects_unknown_code() {
        assert_eq!(TokenDisplayMode::OwnerHover.code(), 20);
        let parsed: Result<TokenDisplayMode, _> = serde_json::from_str("25");
        assert!(parsed.is_err());
        let parsed: TokenDisplayMode = serde_json::from_str("50").expect("valid code");
        assert_eq!(parsed, TokenDisplayMode::Always);
    }

    #[test]
    fn fresh_token_leaves_policy_fields_unset() {
        let token = PrototypeToken::with_image("icons/svg/mystery-man.svg");
        let json = serde_json::to_value(&token).expect("serialize");

        assert_eq!(json["texture"]["src"], "icons/svg/mystery-man.svg");
        assert_eq!(json["texture"]["scaleX"], 1.0);
        assert_eq!(json["sight"]["visionMode"], "basic");
        assert_eq!(json["sight"]["enabled"], false);
        assert_eq!(json["light"]["animation"]["speed"], 5);
        assert_eq!(json["light"]["darkness"]["max"], 1.0);
        for key in ["name", "disposition", "displayName", "displayBars", "bar1", "bar2"] {
            assert!(json.get(key).is_none(), "{key} should be unset");
        }
    }
}
