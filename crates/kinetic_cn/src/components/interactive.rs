//! Focus tracking for text fields
//!
//! Losing focus clears the flag immediately and dismisses the software
//! keyboard on the following frame, after any focus moving to another field
//! has been applied.

use kinetic_core::{UiEvent, VariantSelection};
use std::cell::Cell;

/// Platform keyboard
pub trait KeyboardDismiss {
    fn dismiss(&self);
}

impl<F: Fn()> KeyboardDismiss for F {
    fn dismiss(&self) {
        self()
    }
}

#[derive(Debug, Default)]
pub struct Interactive {
    focused: Cell<bool>,
    dismiss_pending: Cell<bool>,
}

impl Interactive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    pub fn on_focus(&self) {
        self.focused.set(true);
        self.dismiss_pending.set(false);
    }

    pub fn on_blur(&self) {
        self.focused.set(false);
        self.dismiss_pending.set(true);
    }

    pub fn handle_event(&self, event: &UiEvent) -> bool {
        match event {
            UiEvent::Focus => self.on_focus(),
            UiEvent::Blur => self.on_blur(),
            _ => return false,
        }
        true
    }

    /// Run deferred work; call once per frame
    ///
    /// Returns `true` if the keyboard was dismissed.
    pub fn next_frame(&self, keyboard: &dyn KeyboardDismiss) -> bool {
        if self.dismiss_pending.replace(false) {
            tracing::trace!("dismissing keyboard after blur");
            keyboard.dismiss();
            true
        } else {
            false
        }
    }

    pub fn variants(&self) -> VariantSelection {
        VariantSelection::new().flag("focused", self.is_focused())
    }
}
