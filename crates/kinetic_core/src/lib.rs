//! Kinetic Core Runtime
//!
//! This crate provides the coordination primitives shared by every Kinetic
//! compound widget:
//!
//! - **Controlled values**: a value store that is either owned by the widget
//!   or mirrored from an external owner
//! - **Scoped broadcast**: an explicit scope stack that lets a widget root
//!   publish a snapshot to its descendants
//! - **Events**: the platform input events the widgets consume
//! - **Style boundary**: variant selections handed to an external resolver
//!
//! # Example
//!
//! ```rust
//! use kinetic_core::{ControlledValue, Scope, ScopeStack};
//! use std::rc::Rc;
//!
//! struct CounterScope {
//!     value: i32,
//! }
//!
//! impl Scope for CounterScope {
//!     const NAME: &'static str = "Counter";
//! }
//!
//! let count = ControlledValue::new(1);
//! count.set(5);
//!
//! let mut scopes = ScopeStack::new();
//! scopes.provide(CounterScope { value: count.get() }, |scopes| {
//!     let scope: Rc<CounterScope> = scopes.read().unwrap();
//!     assert_eq!(scope.value, 5);
//! });
//! assert!(scopes.read::<CounterScope>().is_none());
//! ```

pub mod color;
pub mod controlled;
pub mod events;
pub mod scope;
pub mod style;

pub use color::Color;
pub use controlled::{ChangeHandler, ControlledValue, Dispatch};
pub use events::{Key, LayoutEvent, UiEvent};
pub use scope::{ProviderHandle, Scope, ScopeStack};
pub use style::{ResolveStyles, SlotStyles, VariantSelection, VariantValue};
