//! Theme definition

use crate::defaults::ComponentDefaults;
use crate::tokens::{ColorTokens, OpacityTokens};

/// Complete theme: tokens plus component defaults
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Theme {
    pub colors: ColorTokens,
    pub opacities: OpacityTokens,
    pub defaults: ComponentDefaults,
}

impl Theme {
    pub fn new(colors: ColorTokens, defaults: ComponentDefaults) -> Self {
        Self {
            colors,
            opacities: OpacityTokens::default(),
            defaults,
        }
    }
}
