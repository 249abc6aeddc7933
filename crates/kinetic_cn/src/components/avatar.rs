//! Avatar component
//!
//! A round image with a text fallback. The fallback shows the initials of the
//! name it is given, sized from the enclosing avatar.

use kinetic_core::{Scope, ScopeStack, VariantSelection};

/// Avatar size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    /// 44px
    #[default]
    Default,
    /// 56px
    Sm,
    /// 72px
    Md,
    /// 96px
    Lg,
    /// 128px
    Xl,
}

impl AvatarSize {
    pub fn diameter(&self) -> f32 {
        match self {
            AvatarSize::Default => 44.0,
            AvatarSize::Sm => 56.0,
            AvatarSize::Md => 72.0,
            AvatarSize::Lg => 96.0,
            AvatarSize::Xl => 128.0,
        }
    }

    /// Font size token for the fallback text
    pub fn fallback_font(&self) -> &'static str {
        match self {
            AvatarSize::Default | AvatarSize::Sm => "xs",
            AvatarSize::Md => "lg",
            AvatarSize::Lg => "2xl",
            AvatarSize::Xl => "5xl",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AvatarSize::Default => "default",
            AvatarSize::Sm => "sm",
            AvatarSize::Md => "md",
            AvatarSize::Lg => "lg",
            AvatarSize::Xl => "xl",
        }
    }
}

/// Initials for an avatar fallback
///
/// Blank names become `"UN"`. Multi-word names use the first letter of the
/// first two words; a single word uses its first two letters.
pub fn short_name(name: &str) -> String {
    let mut words = name.split_whitespace();
    match (words.next(), words.next()) {
        (None, _) => "UN".to_string(),
        (Some(first), Some(second)) => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect(),
        (Some(only), None) => only.chars().take(2).flat_map(char::to_uppercase).collect(),
    }
}

pub struct AvatarScope {
    pub size: AvatarSize,
}

impl Scope for AvatarScope {
    const NAME: &'static str = "Avatar";
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Avatar {
    size: AvatarSize,
}

impl Avatar {
    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    pub fn diameter(&self) -> f32 {
        self.size.diameter()
    }

    pub fn variants(&self) -> VariantSelection {
        VariantSelection::new().named("size", self.size.name())
    }

    pub fn provide<R>(&self, scopes: &mut ScopeStack, f: impl FnOnce(&mut ScopeStack) -> R) -> R {
        scopes.provide(AvatarScope { size: self.size }, f)
    }
}

pub fn avatar() -> Avatar {
    Avatar::default()
}

/// Text shown while the image is missing
#[derive(Clone, Debug)]
pub struct AvatarFallback {
    name: String,
}

impl AvatarFallback {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn text(&self) -> String {
        short_name(&self.name)
    }

    /// Size of the enclosing avatar, or the default size outside one
    pub fn size(&self, scopes: &ScopeStack) -> AvatarSize {
        scopes
            .read_in::<AvatarScope>("AvatarFallback")
            .map(|scope| scope.size)
            .unwrap_or_default()
    }

    pub fn variants(&self, scopes: &ScopeStack) -> VariantSelection {
        VariantSelection::new().named("size", self.size(scopes).name())
    }
}
