//! TOML theme configuration
//!
//! ```toml
//! [colors]
//! primary = "#18181b"
//! input = "#e4e4e7"
//!
//! [opacity]
//! disabled = 0.4
//!
//! [collapsible]
//! duration_ms = 300
//!
//! [switch]
//! duration_ms = 200
//! track_width = 48
//! ```
//!
//! Colors are `#rrggbb` or `#rrggbbaa`. Anything omitted keeps the built-in value.

use crate::defaults::ComponentDefaults;
use crate::error::ThemeError;
use crate::theme::Theme;
use crate::tokens::{ColorToken, OpacityTokens};
use kinetic_core::Color;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Raw file layout
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeFile {
    colors: BTreeMap<String, String>,
    opacity: OpacityFile,
    #[serde(flatten)]
    defaults: ComponentDefaults,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OpacityFile {
    disabled: Option<f32>,
    enabled: Option<f32>,
}

impl Theme {
    /// Parse a theme from TOML, layering it over the built-in theme
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(source)?;
        let mut theme = Theme::default();

        for (key, value) in &file.colors {
            let token =
                ColorToken::from_key(key).ok_or_else(|| ThemeError::UnknownColor(key.clone()))?;
            let color = Color::parse_hex(value).ok_or_else(|| ThemeError::InvalidColor {
                token: key.clone(),
                value: value.clone(),
            })?;
            theme.colors.set(token, color);
        }

        theme.opacities = resolve_opacity(&file.opacity)?;

        file.defaults.validate()?;
        theme.defaults = file.defaults;

        tracing::debug!(
            colors = file.colors.len(),
            "theme configuration loaded"
        );
        Ok(theme)
    }

    /// Read and parse a theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

fn resolve_opacity(file: &OpacityFile) -> Result<OpacityTokens, ThemeError> {
    let mut opacities = OpacityTokens::default();
    for (field, value, slot) in [
        ("opacity.disabled", file.disabled, &mut opacities.disabled),
        ("opacity.enabled", file.enabled, &mut opacities.enabled),
    ] {
        if let Some(value) = value {
            if !(0.0..=1.0).contains(&value) {
                return Err(ThemeError::InvalidValue {
                    field,
                    reason: format!("opacity must be within 0..=1, got {value}"),
                });
            }
            *slot = value;
        }
    }
    Ok(opacities)
}
