//! Style resolution boundary
//!
//! Widgets describe *which* variants apply to them (`active = true`,
//! `size = "lg"`) and hand that selection to an external resolver. The
//! resolver returns one opaque style object per slot; nothing in Kinetic
//! looks inside those objects.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Value chosen for one variant axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariantValue {
    Flag(bool),
    Named(&'static str),
}

/// Variant axis -> chosen value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantSelection {
    entries: SmallVec<[(&'static str, VariantValue); 4]>,
}

impl VariantSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a boolean variant (`disabled`, `active`, `focused`, ...)
    pub fn flag(self, axis: &'static str, value: bool) -> Self {
        self.with(axis, VariantValue::Flag(value))
    }

    /// Set an enumerated variant (`size = "lg"`)
    pub fn named(self, axis: &'static str, value: &'static str) -> Self {
        self.with(axis, VariantValue::Named(value))
    }

    fn with(mut self, axis: &'static str, value: VariantValue) -> Self {
        match self.entries.iter_mut().find(|(name, _)| *name == axis) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((axis, value)),
        }
        self
    }

    pub fn get(&self, axis: &str) -> Option<VariantValue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == axis)
            .map(|(_, value)| *value)
    }

    /// Boolean variant, `false` when unset
    pub fn is_set(&self, axis: &str) -> bool {
        matches!(self.get(axis), Some(VariantValue::Flag(true)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, VariantValue)> + '_ {
        self.entries.iter().copied()
    }
}

/// Slot name -> resolved style object
#[derive(Clone, Debug)]
pub struct SlotStyles<S> {
    slots: FxHashMap<&'static str, S>,
}

impl<S> Default for SlotStyles<S> {
    fn default() -> Self {
        Self {
            slots: FxHashMap::default(),
        }
    }
}

impl<S> SlotStyles<S> {
    pub fn insert(&mut self, slot: &'static str, style: S) {
        self.slots.insert(slot, style);
    }

    pub fn get(&self, slot: &str) -> Option<&S> {
        self.slots.get(slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<S> FromIterator<(&'static str, S)> for SlotStyles<S> {
    fn from_iter<I: IntoIterator<Item = (&'static str, S)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

/// External variant/style engine
pub trait ResolveStyles {
    /// Opaque style object
    type Style;

    fn resolve(&self, selection: &VariantSelection) -> SlotStyles<Self::Style>;
}

impl<S, F> ResolveStyles for F
where
    F: Fn(&VariantSelection) -> SlotStyles<S>,
{
    type Style = S;

    fn resolve(&self, selection: &VariantSelection) -> SlotStyles<S> {
        self(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_overwrites_axis() {
        let selection = VariantSelection::new()
            .flag("active", false)
            .named("size", "sm")
            .flag("active", true);

        assert_eq!(selection.iter().count(), 2);
        assert!(selection.is_set("active"));
        assert_eq!(selection.get("size"), Some(VariantValue::Named("sm")));
        assert!(!selection.is_set("disabled"));
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |selection: &VariantSelection| -> SlotStyles<f32> {
            let opacity = if selection.is_set("disabled") { 0.5 } else { 1.0 };
            [("root", opacity)].into_iter().collect()
        };

        let styles = resolver.resolve(&VariantSelection::new().flag("disabled", true));
        assert_eq!(styles.get("root"), Some(&0.5));
        assert!(styles.get("thumb").is_none());
    }
}
