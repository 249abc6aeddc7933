//! Select component
//!
//! Items publish nothing themselves; they read the selected value from the
//! enclosing [`Select`] and report it back when pressed.

use kinetic_core::{ControlledValue, Dispatch, Scope, ScopeStack, UiEvent, VariantSelection};
use std::rc::Rc;

pub struct SelectScope {
    pub value: Option<String>,
    pub select: Dispatch<String>,
}

impl Scope for SelectScope {
    const NAME: &'static str = "Select";
}

pub struct Select {
    value: ControlledValue<Option<String>>,
}

impl Select {
    pub fn value(&self) -> Option<String> {
        self.value.get()
    }

    pub fn sync_value(&self, value: Option<String>) {
        self.value.sync(value.map(Some));
    }

    pub fn scope(&self) -> SelectScope {
        let dispatch = self.value.dispatcher();
        SelectScope {
            value: self.value.get(),
            select: Rc::new(move |next: String| dispatch(Some(next))),
        }
    }

    pub fn provide<R>(&self, scopes: &mut ScopeStack, f: impl FnOnce(&mut ScopeStack) -> R) -> R {
        scopes.provide(self.scope(), f)
    }
}

#[derive(Default)]
pub struct SelectBuilder {
    value: Option<String>,
    default_value: Option<String>,
    on_change: Option<Rc<dyn Fn(String)>>,
}

impl SelectBuilder {
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn on_change<F: Fn(String) + 'static>(mut self, f: F) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn build(self) -> Select {
        let on_change = self.on_change.map(|f| {
            Rc::new(move |next: Option<String>| {
                if let Some(next) = next {
                    f(next);
                }
            }) as Rc<dyn Fn(Option<String>)>
        });
        Select {
            value: ControlledValue::from_props(self.value.map(Some), self.default_value, on_change),
        }
    }
}

pub fn select() -> SelectBuilder {
    SelectBuilder::default()
}

pub struct SelectItem {
    value: String,
}

impl SelectItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn is_active(&self, scopes: &ScopeStack) -> bool {
        scopes
            .read_in::<SelectScope>("SelectItem")
            .is_some_and(|scope| scope.value.as_deref() == Some(self.value.as_str()))
    }

    /// Whether the check indicator is drawn
    pub fn shows_indicator(&self, scopes: &ScopeStack) -> bool {
        self.is_active(scopes)
    }

    /// Report this item's value, even when it is already selected
    pub fn press(&self, scopes: &ScopeStack) -> bool {
        match scopes.read_in::<SelectScope>("SelectItem") {
            Some(scope) => {
                (scope.select)(self.value.clone());
                true
            }
            None => false,
        }
    }

    pub fn handle_event(&self, scopes: &ScopeStack, event: &UiEvent) -> bool {
        match event {
            UiEvent::Press => self.press(scopes),
            _ => false,
        }
    }

    pub fn variants(&self, scopes: &ScopeStack) -> VariantSelection {
        VariantSelection::new().flag("active", self.is_active(scopes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_item_press_selects() {
        let root = select().build();
        let mut scopes = ScopeStack::new();
        root.provide(&mut scopes, |scopes| {
            assert!(!SelectItem::new("apple").is_active(scopes));
            assert!(SelectItem::new("apple").press(scopes));
        });
        assert_eq!(root.value().as_deref(), Some("apple"));

        root.provide(&mut scopes, |scopes| {
            assert!(SelectItem::new("apple").shows_indicator(scopes));
            assert!(!SelectItem::new("pear").variants(scopes).is_set("active"));
        });
    }

    #[test]
    fn test_reselect_still_reports() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let root = select()
            .default_value("apple")
            .on_change(move |_| counter.set(counter.get() + 1))
            .build();

        let mut scopes = ScopeStack::new();
        root.provide(&mut scopes, |scopes| {
            SelectItem::new("apple").handle_event(scopes, &UiEvent::Press);
        });
        assert_eq!(calls.get(), 1);
    }
}
