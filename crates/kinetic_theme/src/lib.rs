//! Kinetic Theme System
//!
//! Design tokens and component defaults consumed by the Kinetic widgets.
//!
//! # Overview
//!
//! - **Color tokens**: the semantic colors the animated widgets interpolate
//!   between (switch track off/on, borders, muted fills)
//! - **Component defaults**: durations and metrics used when a widget option is
//!   omitted (collapsible 400ms, switch 180ms, ...)
//! - **Configuration**: a TOML document can override any token or default
//!
//! # Quick Start
//!
//! ```rust
//! use kinetic_theme::{ColorToken, Theme, ThemeState};
//!
//! let theme = Theme::from_toml_str(r##"
//!     [colors]
//!     primary = "#2563eb"
//!
//!     [switch]
//!     duration_ms = 240
//! "##).unwrap();
//! assert_eq!(theme.defaults.switch.duration_ms, 240.0);
//! assert_eq!(theme.defaults.collapsible.duration_ms, 400.0);
//!
//! ThemeState::init(theme);
//! let primary = ThemeState::get().color(ColorToken::Primary);
//! assert_eq!(primary.to_hex_string(), "#2563ebff");
//! ```

pub mod config;
pub mod defaults;
pub mod error;
pub mod state;
pub mod theme;
pub mod tokens;

pub use defaults::{
    CollapsibleDefaults, ComponentDefaults, InputOtpDefaults, SpinnerDefaults, SwitchDefaults,
};
pub use error::ThemeError;
pub use state::ThemeState;
pub use theme::Theme;
pub use tokens::*;
