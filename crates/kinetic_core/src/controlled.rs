//! Controlled / uncontrolled value store
//!
//! Every widget with a `value` / `default_value` / `on_change` surface keeps its
//! value in a [`ControlledValue`]. The store runs in one of two modes:
//!
//! - **Uncontrolled**: no external value was supplied. `set` writes the internal
//!   value, notifies observers, then calls `on_change` (if any).
//! - **Controlled**: the owner passes the value in on every update via
//!   [`ControlledValue::sync`]. `set` only forwards to `on_change`; the owner
//!   decides whether the value actually changes.
//!
//! The internal value mirrors every external value received, so dropping
//! control keeps the last known value as the new baseline.
//!
//! ```rust
//! use kinetic_core::ControlledValue;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let requested = Rc::new(RefCell::new(Vec::new()));
//! let log = requested.clone();
//!
//! let tab = ControlledValue::controlled("account".to_string(), move |next: String| {
//!     log.borrow_mut().push(next);
//! });
//!
//! tab.set("password".to_string());
//! assert_eq!(tab.get(), "account");          // owner has not accepted it yet
//! assert_eq!(requested.borrow().as_slice(), ["password"]);
//!
//! tab.sync(Some("password".to_string()));    // owner re-renders with the new value
//! assert_eq!(tab.get(), "password");
//! ```

use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Callback invoked with a requested next value
pub type ChangeHandler<T> = Rc<dyn Fn(T)>;

/// Type-erased setter handed to descendants through a broadcast scope
pub type Dispatch<T> = Rc<dyn Fn(T)>;

type Observer<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    external: Option<T>,
    internal: T,
    on_change: Option<ChangeHandler<T>>,
    observers: SmallVec<[Observer<T>; 2]>,
}

impl<T: Clone> Inner<T> {
    fn effective(&self) -> &T {
        self.external.as_ref().unwrap_or(&self.internal)
    }
}

/// Shared handle to a two-mode value
///
/// Cloning the handle shares the same storage.
pub struct ControlledValue<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for ControlledValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ControlledValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ControlledValue")
            .field("external", &inner.external)
            .field("internal", &inner.internal)
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> ControlledValue<T> {
    /// Create an uncontrolled store with an initial value
    pub fn new(initial: T) -> Self {
        Self::from_props(None, initial, None)
    }

    /// Create a controlled store
    pub fn controlled<F: Fn(T) + 'static>(value: T, on_change: F) -> Self {
        let internal = value.clone();
        Self::from_props(Some(value), internal, Some(Rc::new(on_change)))
    }

    /// Create a store from a widget's `value` / `default_value` / `on_change` props
    ///
    /// `value` wins over `default` for the initial internal baseline.
    pub fn from_props(value: Option<T>, default: T, on_change: Option<ChangeHandler<T>>) -> Self {
        let internal = value.clone().unwrap_or(default);
        Self {
            inner: Rc::new(RefCell::new(Inner {
                external: value,
                internal,
                on_change,
                observers: SmallVec::new(),
            })),
        }
    }

    /// Current effective value
    pub fn get(&self) -> T {
        self.inner.borrow().effective().clone()
    }

    /// Read the effective value without cloning
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(self.inner.borrow().effective())
    }

    /// Whether an external owner currently controls the value
    pub fn is_controlled(&self) -> bool {
        self.inner.borrow().external.is_some()
    }

    /// Request a new value
    ///
    /// Controlled: forwards to `on_change` only. Uncontrolled: stores the value,
    /// notifies observers if it changed, then forwards to `on_change`.
    pub fn set(&self, next: T) {
        let (handler, changed) = {
            let mut inner = self.inner.borrow_mut();
            if inner.external.is_some() {
                (inner.on_change.clone(), false)
            } else {
                let changed = inner.internal != next;
                inner.internal = next.clone();
                (inner.on_change.clone(), changed)
            }
        };

        if changed {
            self.notify();
        }
        if let Some(handler) = handler {
            handler(next);
        }
    }

    /// Request a value derived from the current effective value
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = self.with(f);
        self.set(next);
    }

    /// Apply the owner's `value` prop for this update cycle
    ///
    /// `Some` puts the store under control (mirroring the value internally);
    /// `None` releases control and keeps the last known value.
    pub fn sync(&self, external: Option<T>) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.effective().clone();
            match external {
                Some(value) => {
                    if inner.external.is_none() {
                        tracing::trace!("controlled value switched to controlled mode");
                    }
                    inner.internal = value.clone();
                    inner.external = Some(value);
                }
                None => {
                    if let Some(last) = inner.external.take() {
                        tracing::trace!("controlled value released, keeping last known value");
                        inner.internal = last;
                    }
                }
            }
            *inner.effective() != before
        };

        if changed {
            self.notify();
        }
    }

    /// Replace the change callback
    pub fn set_on_change(&self, on_change: Option<ChangeHandler<T>>) {
        self.inner.borrow_mut().on_change = on_change;
    }

    /// Register an observer called with the new effective value after it changes
    pub fn subscribe<F: Fn(&T) + 'static>(&self, observer: F) {
        self.inner.borrow_mut().observers.push(Rc::new(observer));
    }

    /// A setter that can be published to descendants
    ///
    /// The dispatcher does not keep the store alive; dispatching after the
    /// store is dropped is a no-op.
    pub fn dispatcher(&self) -> Dispatch<T> {
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Rc::new(move |next: T| match weak.upgrade() {
            Some(inner) => ControlledValue { inner }.set(next),
            None => tracing::trace!("dispatch after store was dropped"),
        })
    }

    fn notify(&self) {
        // Observers may read or set the store, so no borrow is held while they run.
        let (observers, value) = {
            let inner = self.inner.borrow();
            (inner.observers.clone(), inner.effective().clone())
        };
        for observer in observers.iter() {
            observer(&value);
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for ControlledValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
