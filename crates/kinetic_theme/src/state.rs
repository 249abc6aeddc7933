//! Global theme state singleton
//!
//! Widgets read their defaults and track colors from here when an option is
//! omitted. The app installs its theme once at startup; reading before that
//! falls back to the built-in theme.

use crate::defaults::ComponentDefaults;
use crate::theme::Theme;
use crate::tokens::{ColorToken, OpacityToken};
use kinetic_core::Color;
use std::sync::{OnceLock, RwLock};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global theme state - read by widgets while they are built
#[derive(Debug)]
pub struct ThemeState {
    theme: RwLock<Theme>,
}

impl ThemeState {
    /// Install the app theme (call once at app startup)
    ///
    /// If the state already exists (initialised earlier or read before init),
    /// the theme is swapped in place.
    pub fn init(theme: Theme) {
        if let Err(state) = THEME_STATE.set(ThemeState {
            theme: RwLock::new(theme.clone()),
        }) {
            drop(state);
            tracing::debug!("ThemeState already initialized, replacing theme");
            Self::get().set_theme(theme);
        }
    }

    /// Install the built-in theme
    pub fn init_default() {
        Self::init(Theme::default());
    }

    /// Get the global theme state, creating it with the built-in theme if needed
    pub fn get() -> &'static ThemeState {
        THEME_STATE.get_or_init(|| {
            tracing::warn!("ThemeState read before init, using the built-in theme");
            ThemeState {
                theme: RwLock::new(Theme::default()),
            }
        })
    }

    /// Try to get the global theme state (returns None if nothing created it yet)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// Replace the active theme
    pub fn set_theme(&self, theme: Theme) {
        *self.theme.write().unwrap_or_else(|e| e.into_inner()) = theme;
    }

    /// Snapshot of the active theme
    pub fn theme(&self) -> Theme {
        self.theme.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn color(&self, token: ColorToken) -> Color {
        self.theme
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .colors
            .get(token)
    }

    pub fn opacity(&self, token: OpacityToken) -> f32 {
        self.theme
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .opacities
            .get(token)
    }

    pub fn defaults(&self) -> ComponentDefaults {
        self.theme
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .defaults
            .clone()
    }
}
