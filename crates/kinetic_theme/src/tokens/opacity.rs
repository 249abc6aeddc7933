//! Opacity tokens for theming

/// Semantic opacity token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OpacityToken {
    /// Applied to disabled roots (pointer events are ignored as well)
    Disabled,
    Enabled,
}

/// Complete set of opacity tokens
#[derive(Clone, Debug, PartialEq)]
pub struct OpacityTokens {
    pub disabled: f32,
    pub enabled: f32,
}

impl OpacityTokens {
    /// Get opacity value by token key
    pub fn get(&self, token: OpacityToken) -> f32 {
        match token {
            OpacityToken::Disabled => self.disabled,
            OpacityToken::Enabled => self.enabled,
        }
    }

    /// Opacity for a widget root given its `disabled` flag
    pub fn for_disabled(&self, disabled: bool) -> f32 {
        if disabled {
            self.disabled
        } else {
            self.enabled
        }
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self {
            disabled: 0.5,
            enabled: 1.0,
        }
    }
}
