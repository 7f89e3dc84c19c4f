//! On-disk style configuration.
//!
//! A small JSON document supplied by the host at construction time. A
//! missing file falls back to the defaults so the face renders out of the
//! box; a present-but-malformed file is an error rather than a silent
//! default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::face::FaceStyle;
use crate::paint::Color;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unrecognized color {0:?} (expected #rrggbb or #rrggbbaa)")]
    Color(String),
}

/// Serializable face configuration.
///
/// Recognized options:
/// - `accent_color` — second hand and gradient highlight (default white)
/// - `base_color` — gradient base and hub rings (default near-black)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaceConfig {
    pub accent_color: String,
    pub base_color: String,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            accent_color: "#ffffff".to_string(),
            base_color: "#1a1a1a".to_string(),
        }
    }
}

impl FaceConfig {
    /// Loads the configuration from `path`; a missing file yields the
    /// defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Resolves the hex color fields into a [`FaceStyle`].
    pub fn style(&self) -> Result<FaceStyle, ConfigError> {
        Ok(FaceStyle {
            accent: parse_color(&self.accent_color)?,
            base: parse_color(&self.base_color)?,
        })
    }
}

fn parse_color(s: &str) -> Result<Color, ConfigError> {
    Color::from_hex(s).ok_or_else(|| ConfigError::Color(s.to_string()))
}
