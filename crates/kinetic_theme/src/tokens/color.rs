//! Color tokens for theming

use kinetic_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    Primary,
    PrimaryForeground,
    Secondary,
    Background,
    Foreground,
    Muted,
    MutedForeground,
    Border,
    /// Input outlines and the switch track when off
    Input,
    Ring,
    White,
}

impl ColorToken {
    pub const ALL: [ColorToken; 11] = [
        ColorToken::Primary,
        ColorToken::PrimaryForeground,
        ColorToken::Secondary,
        ColorToken::Background,
        ColorToken::Foreground,
        ColorToken::Muted,
        ColorToken::MutedForeground,
        ColorToken::Border,
        ColorToken::Input,
        ColorToken::Ring,
        ColorToken::White,
    ];

    /// Key used for this token in configuration files
    pub fn key(&self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::PrimaryForeground => "primary_foreground",
            ColorToken::Secondary => "secondary",
            ColorToken::Background => "background",
            ColorToken::Foreground => "foreground",
            ColorToken::Muted => "muted",
            ColorToken::MutedForeground => "muted_foreground",
            ColorToken::Border => "border",
            ColorToken::Input => "input",
            ColorToken::Ring => "ring",
            ColorToken::White => "white",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.key() == key)
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub primary: Color,
    pub primary_foreground: Color,
    pub secondary: Color,
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub muted_foreground: Color,
    pub border: Color,
    pub input: Color,
    pub ring: Color,
    pub white: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryForeground => self.primary_foreground,
            ColorToken::Secondary => self.secondary,
            ColorToken::Background => self.background,
            ColorToken::Foreground => self.foreground,
            ColorToken::Muted => self.muted,
            ColorToken::MutedForeground => self.muted_foreground,
            ColorToken::Border => self.border,
            ColorToken::Input => self.input,
            ColorToken::Ring => self.ring,
            ColorToken::White => self.white,
        }
    }

    /// Replace a color by token key
    pub fn set(&mut self, token: ColorToken, color: Color) {
        let slot = match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::PrimaryForeground => &mut self.primary_foreground,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::Background => &mut self.background,
            ColorToken::Foreground => &mut self.foreground,
            ColorToken::Muted => &mut self.muted,
            ColorToken::MutedForeground => &mut self.muted_foreground,
            ColorToken::Border => &mut self.border,
            ColorToken::Input => &mut self.input,
            ColorToken::Ring => &mut self.ring,
            ColorToken::White => &mut self.white,
        };
        *slot = color;
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        // Neutral light palette
        Self {
            primary: Color::from_hex(0x18181B),
            primary_foreground: Color::from_hex(0xFAFAFA),
            secondary: Color::from_hex(0xF4F4F5),
            background: Color::WHITE,
            foreground: Color::from_hex(0x09090B),
            muted: Color::from_hex(0xF4F4F5),
            muted_foreground: Color::from_hex(0x71717A),
            border: Color::from_hex(0xE4E4E7),
            input: Color::from_hex(0xE4E4E7),
            ring: Color::from_hex(0xD4D4D8),
            white: Color::WHITE,
        }
    }
}
