//! Kinetic Component Library
//!
//! Headless compound widgets for touch UIs. Each widget owns its state and
//! animations and exposes what a renderer needs per frame: values, animated
//! geometry, and variant selections for an external style resolver.
//!
//! Compound widgets (a root with triggers, items, slots) share state through an
//! explicit [`ScopeStack`](kinetic_core::ScopeStack): the root publishes a
//! snapshot while its subtree is built and every part reads the nearest one.
//!
//! # Example
//!
//! ```rust
//! use kinetic_animation::FrameClock;
//! use kinetic_cn::prelude::*;
//!
//! let clock = FrameClock::shared();
//! let mut scopes = ScopeStack::new();
//!
//! let settings = cn::tabs().default_value("general").build();
//! let notifications = cn::switch(&clock).build();
//!
//! settings.provide(&mut scopes, |scopes| {
//!     TabsTrigger::new("privacy").press(scopes);
//! });
//! notifications.press();
//!
//! assert_eq!(settings.value().as_deref(), Some("privacy"));
//! assert!(notifications.is_checked());
//! ```

pub mod components;

pub use components::*;

/// Widget constructors, used as `cn::switch(&clock)`
pub mod cn {
    pub use crate::components::avatar::avatar;
    pub use crate::components::collapsible::collapsible;
    pub use crate::components::drawer::drawer;
    pub use crate::components::input_otp::input_otp;
    pub use crate::components::select::select;
    pub use crate::components::spinner::{dots, pulse, skeleton, spinner, spinner2};
    pub use crate::components::switch::switch;
    pub use crate::components::tabs::tabs;
}

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::*;

    // Core types
    pub use kinetic_animation::{FrameClock, SharedClock, ThumbGeometry};
    pub use kinetic_core::{Color, Key, LayoutEvent, ScopeStack, UiEvent, VariantSelection};
}
