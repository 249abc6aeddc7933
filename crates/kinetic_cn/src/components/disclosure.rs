//! Open/closed flag for app-owned disclosure UI

use kinetic_core::ControlledValue;

/// Boolean open state that widgets can observe
#[derive(Clone, Debug, Default)]
pub struct Disclosure {
    open: ControlledValue<bool>,
}

impl Disclosure {
    pub fn new(init: bool) -> Self {
        Self {
            open: ControlledValue::new(init),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn set_open(&self, open: bool) {
        self.open.set(open);
    }

    pub fn toggle(&self) {
        self.open.update(|open| !open);
    }

    /// Underlying store, e.g. to run a callback on every change
    pub fn value(&self) -> &ControlledValue<bool> {
        &self.open
    }
}
