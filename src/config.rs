//! Render and analysis settings.
//!
//! The shape follows the options object of the JavaScript `qrcode` encoder,
//! so a config saved by a web page can be loaded as-is. Every field has a default:
//! - `errorCorrectionLevel`: empty (Medium when rendering, unknown for estimates)
//! - `margin`: 4 modules
//! - `scale`: 4 pixels per module
//! - `width`: none
//! - `color.dark` / `color.light`: `#000000ff` / `#ffffffff`

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrConfig {
    /// One of `L`, `M`, `Q`, `H`. Kept as text so unknown values survive
    /// loading and degrade where they are used.
    #[serde(default)]
    pub error_correction_level: String,
    #[serde(default = "default_margin")]
    pub margin: u32,
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// Target image width in pixels; overrides `scale` when set.
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub color: ColorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_dark")]
    pub dark: String,
    #[serde(default = "default_light")]
    pub light: String,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            error_correction_level: String::new(),
            margin: default_margin(),
            scale: default_scale(),
            width: None,
            color: ColorConfig::default(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            dark: default_dark(),
            light: default_light(),
        }
    }
}

impl QrConfig {
    /// Config with the given error correction level and defaults elsewhere.
    pub fn with_level(level: &str) -> Self {
        Self {
            error_correction_level: level.to_string(),
            ..Self::default()
        }
    }

    /// Parses a JSON options object, filling in defaults for missing fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn default_margin() -> u32 {
    4
}
fn default_scale() -> u32 {
    4
}
fn default_dark() -> String {
    "#000000ff".to_string()
}
fn default_light() -> String {
    "#ffffffff".to_string()
}
