//! Scoped broadcast channels
//!
//! A compound widget root publishes an immutable snapshot (its *scope*) for the
//! subtree it renders; descendants read the nearest enclosing scope of a given
//! type. The stack is an explicit value threaded through the tree by `&mut`
//! reference, keyed by the scope's `TypeId`, so two widget kinds can never read
//! each other's scope and a nested widget of the same kind shadows the outer
//! one only while its subtree is being built.
//!
//! ```rust
//! use kinetic_core::{Scope, ScopeStack};
//!
//! struct Depth(u32);
//! impl Scope for Depth {
//!     const NAME: &'static str = "Depth";
//! }
//!
//! let mut scopes = ScopeStack::new();
//! scopes.provide(Depth(1), |scopes| {
//!     scopes.provide(Depth(2), |scopes| {
//!         assert_eq!(scopes.read::<Depth>().unwrap().0, 2);
//!     });
//!     assert_eq!(scopes.read::<Depth>().unwrap().0, 1);
//! });
//! ```

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::any::{Any, TypeId};
use std::marker::PhantomData;
use std::rc::Rc;

/// Marker for types that can be published on a [`ScopeStack`]
pub trait Scope: 'static {
    /// Widget name used in diagnostics
    const NAME: &'static str;
}

/// Proof of a publish; hand it back to [`ScopeStack::retract`] when the
/// subtree is done
#[must_use = "a published scope stays visible until it is retracted"]
#[derive(Debug)]
pub struct ProviderHandle<S> {
    depth: usize,
    _scope: PhantomData<fn() -> S>,
}

/// Stack of published scopes, one lane per scope type
#[derive(Default)]
pub struct ScopeStack {
    lanes: FxHashMap<TypeId, SmallVec<[Rc<dyn Any>; 2]>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a scope for the subtree built until the handle is retracted
    pub fn publish<S: Scope>(&mut self, scope: S) -> ProviderHandle<S> {
        let lane = self.lanes.entry(TypeId::of::<S>()).or_default();
        let depth = lane.len();
        lane.push(Rc::new(scope));
        tracing::trace!(scope = S::NAME, depth, "scope published");
        ProviderHandle {
            depth,
            _scope: PhantomData,
        }
    }

    /// Remove a published scope (and anything of the same type published after it)
    ///
    /// Retracting twice is a no-op.
    pub fn retract<S: Scope>(&mut self, handle: ProviderHandle<S>) {
        if let Some(lane) = self.lanes.get_mut(&TypeId::of::<S>()) {
            if lane.len() > handle.depth + 1 {
                tracing::warn!(
                    scope = S::NAME,
                    "retracting a scope that still has nested providers open"
                );
            }
            lane.truncate(handle.depth);
            if lane.is_empty() {
                self.lanes.remove(&TypeId::of::<S>());
            }
        }
    }

    /// Publish `scope`, build the subtree with `f`, then retract
    pub fn provide<S: Scope, R>(&mut self, scope: S, f: impl FnOnce(&mut ScopeStack) -> R) -> R {
        let handle = self.publish(scope);
        let result = f(self);
        self.retract(handle);
        result
    }

    /// Nearest enclosing scope of type `S`, or `None` outside any provider
    ///
    /// Every read under the same publish returns the same snapshot.
    pub fn read<S: Scope>(&self) -> Option<Rc<S>> {
        let lane = self.lanes.get(&TypeId::of::<S>())?;
        let top = Rc::clone(lane.last()?);
        top.downcast::<S>().ok()
    }

    /// Like [`ScopeStack::read`], logging a warning naming `consumer` when
    /// there is no provider
    pub fn read_in<S: Scope>(&self, consumer: &'static str) -> Option<Rc<S>> {
        let scope = self.read::<S>();
        if scope.is_none() {
            tracing::warn!(
                scope = S::NAME,
                consumer,
                "{} used outside of its {} provider",
                consumer,
                S::NAME
            );
        }
        scope
    }

    /// Number of nested providers of type `S` currently open
    pub fn depth<S: Scope>(&self) -> usize {
        self.lanes
            .get(&TypeId::of::<S>())
            .map(|lane| lane.len())
            .unwrap_or(0)
    }
}

impl std::fmt::Debug for ScopeStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeStack")
            .field("lanes", &self.lanes.len())
            .finish()
    }
}
