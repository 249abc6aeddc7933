//! Component defaults
//!
//! Values used when a widget option is omitted. Every table and field is
//! optional in configuration files; missing entries keep these defaults.

use serde::{Deserialize, Serialize};

/// Defaults for every widget with configurable timing or metrics
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentDefaults {
    pub collapsible: CollapsibleDefaults,
    pub switch: SwitchDefaults,
    pub input_otp: InputOtpDefaults,
    pub spinner: SpinnerDefaults,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapsibleDefaults {
    pub duration_ms: f32,
    pub min_height: f32,
}

impl Default for CollapsibleDefaults {
    fn default() -> Self {
        Self {
            duration_ms: 400.0,
            min_height: 0.0,
        }
    }
}

/// Switch timing and track/thumb metrics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchDefaults {
    pub duration_ms: f32,
    pub track_width: f32,
    pub thumb_width: f32,
    pub horizontal_padding: f32,
}

impl SwitchDefaults {
    /// Metrics assumed when a resolved style does not report them
    pub const FALLBACK_TRACK_WIDTH: f32 = 52.0;
    pub const FALLBACK_THUMB_WIDTH: f32 = 24.0;
    pub const FALLBACK_PADDING: f32 = 4.0;
}

impl Default for SwitchDefaults {
    fn default() -> Self {
        Self {
            duration_ms: 180.0,
            track_width: 44.0,
            thumb_width: 20.0,
            horizontal_padding: 3.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputOtpDefaults {
    pub max_length: usize,
    /// Glyph shown in filled slots of a secure input
    pub mask: char,
}

impl Default for InputOtpDefaults {
    fn default() -> Self {
        Self {
            max_length: 6,
            mask: '\u{2022}',
        }
    }
}

/// Loop durations for the activity indicators
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinnerDefaults {
    pub spinner_ms: f32,
    pub pulse_ms: f32,
    pub dots_ms: f32,
    pub shimmer_ms: f32,
    /// Skeleton width used when the host does not give a numeric width
    pub shimmer_width: f32,
}

impl Default for SpinnerDefaults {
    fn default() -> Self {
        Self {
            spinner_ms: 800.0,
            pulse_ms: 1500.0,
            dots_ms: 1000.0,
            shimmer_ms: 1500.0,
            shimmer_width: 200.0,
        }
    }
}

impl ComponentDefaults {
    /// Check values that would make widgets misbehave
    pub(crate) fn validate(&self) -> Result<(), crate::ThemeError> {
        let durations = [
            ("collapsible.duration_ms", self.collapsible.duration_ms),
            ("switch.duration_ms", self.switch.duration_ms),
            ("spinner.spinner_ms", self.spinner.spinner_ms),
            ("spinner.pulse_ms", self.spinner.pulse_ms),
            ("spinner.dots_ms", self.spinner.dots_ms),
            ("spinner.shimmer_ms", self.spinner.shimmer_ms),
        ];
        let metrics = [
            ("collapsible.min_height", self.collapsible.min_height),
            ("switch.track_width", self.switch.track_width),
            ("switch.thumb_width", self.switch.thumb_width),
            ("switch.horizontal_padding", self.switch.horizontal_padding),
            ("spinner.shimmer_width", self.spinner.shimmer_width),
        ];

        for (field, value) in durations.into_iter().chain(metrics) {
            if !value.is_finite() || value < 0.0 {
                return Err(crate::ThemeError::InvalidValue {
                    field,
                    reason: format!("expected a non-negative number, got {value}"),
                });
            }
        }

        if self.input_otp.max_length == 0 {
            return Err(crate::ThemeError::InvalidValue {
                field: "input_otp.max_length",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
