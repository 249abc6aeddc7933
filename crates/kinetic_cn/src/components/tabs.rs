//! Tabs component
//!
//! A root holding the selected tab value, triggers that select a value, and
//! content panels shown only for their value.

use kinetic_core::{ControlledValue, Dispatch, Scope, ScopeStack, UiEvent, VariantSelection};
use std::rc::Rc;

/// How a content panel should be rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentVisibility {
    Visible,
    /// Mounted but not displayed, so its state survives
    Hidden,
    Unmounted,
}

/// Snapshot published by [`Tabs`]
pub struct TabsScope {
    pub value: Option<String>,
    pub select: Dispatch<String>,
}

impl TabsScope {
    pub fn is_selected(&self, value: &str) -> bool {
        self.value.as_deref() == Some(value)
    }
}

impl Scope for TabsScope {
    const NAME: &'static str = "Tabs";
}

pub struct Tabs {
    value: ControlledValue<Option<String>>,
}

impl Tabs {
    pub fn value(&self) -> Option<String> {
        self.value.get()
    }

    pub fn select(&self, value: impl Into<String>) {
        self.value.set(Some(value.into()));
    }

    pub fn sync_value(&self, value: Option<String>) {
        // An absent prop releases control; the selection itself never resets to None.
        self.value.sync(value.map(Some));
    }

    pub fn scope(&self) -> TabsScope {
        let dispatch = self.value.dispatcher();
        TabsScope {
            value: self.value.get(),
            select: Rc::new(move |next: String| dispatch(Some(next))),
        }
    }

    pub fn provide<R>(&self, scopes: &mut ScopeStack, f: impl FnOnce(&mut ScopeStack) -> R) -> R {
        scopes.provide(self.scope(), f)
    }
}

#[derive(Default)]
pub struct TabsBuilder {
    value: Option<String>,
    default_value: Option<String>,
    on_change: Option<Rc<dyn Fn(String)>>,
}

impl TabsBuilder {
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

    pub fn build(self) -> Tabs {
        let on_change = self.on_change.map(|f| {
            Rc::new(move |next: Option<String>| {
                if let Some(next) = next {
                    f(next);
                }
            }) as Rc<dyn Fn(Option<String>)>
        });
        Tabs {
            value: ControlledValue::from_props(self.value.map(Some), self.default_value, on_change),
        }
    }
}

pub fn tabs() -> TabsBuilder {
    TabsBuilder::default()
}

/// Selects its value when pressed
pub struct TabsTrigger {
    value: String,
    disabled: bool,
}

impl TabsTrigger {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_active(&self, scopes: &ScopeStack) -> bool {
        scopes
            .read_in::<TabsScope>("TabsTrigger")
            .is_some_and(|scope| scope.is_selected(&self.value))
    }

    /// Select this trigger's value; already-selected and disabled triggers do nothing
    pub fn press(&self, scopes: &ScopeStack) -> bool {
        let Some(scope) = scopes.read_in::<TabsScope>("TabsTrigger") else {
            return false;
        };
        if self.disabled || scope.is_selected(&self.value) {
            return false;
        }
        (scope.select)(self.value.clone());
        true
    }

    pub fn handle_event(&self, scopes: &ScopeStack, event: &UiEvent) -> bool {
        match event {
            UiEvent::Press => self.press(scopes),
            _ => false,
        }
    }

    pub fn variants(&self, scopes: &ScopeStack) -> VariantSelection {
        VariantSelection::new()
            .flag("active", self.is_active(scopes))
            .flag("disabled", self.disabled)
    }
}

/// Panel rendered for one tab value
pub struct TabsContent {
    value: String,
    keep_mounted: bool,
}

impl TabsContent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            keep_mounted: true,
        }
    }

    /// Keep the panel mounted while another tab is selected (default `true`)
    pub fn keep_mounted(mut self, keep_mounted: bool) -> Self {
        self.keep_mounted = keep_mounted;
        self
    }

    pub fn visibility(&self, scopes: &ScopeStack) -> ContentVisibility {
        let selected = scopes
            .read_in::<TabsScope>("TabsContent")
            .is_some_and(|scope| scope.is_selected(&self.value));
        match (selected, self.keep_mounted) {
            (true, _) => ContentVisibility::Visible,
            (false, true) => ContentVisibility::Hidden,
            (false, false) => ContentVisibility::Unmounted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_trigger_selects_and_content_follows() {
        let root = tabs().default_value("account").build();
        let mut scopes = ScopeStack::new();

        root.provide(&mut scopes, |scopes| {
            assert!(TabsTrigger::new("account").is_active(scopes));
            assert!(!TabsTrigger::new("account").press(scopes));
            assert!(TabsTrigger::new("password").press(scopes));
        });
        assert_eq!(root.value().as_deref(), Some("password"));

        root.provide(&mut scopes, |scopes| {
            assert_eq!(TabsContent::new("password").visibility(scopes), ContentVisibility::Visible);
            assert_eq!(TabsContent::new("account").visibility(scopes), ContentVisibility::Hidden);
            assert_eq!(
                TabsContent::new("account").keep_mounted(false).visibility(scopes),
                ContentVisibility::Unmounted
            );
        });
    }

    #[test]
    fn test_disabled_trigger() {
        let root = tabs().default_value("a").build();
        let mut scopes = ScopeStack::new();
        root.provide(&mut scopes, |scopes| {
            let trigger = TabsTrigger::new("b").disabled(true);
            assert!(!trigger.handle_event(scopes, &UiEvent::Press));
            assert!(trigger.variants(scopes).is_set("disabled"));
        });
        assert_eq!(root.value().as_deref(), Some("a"));
    }

    #[test]
    fn test_controlled_tabs_report_requests() {
        let requested = Rc::new(RefCell::new(Vec::new()));
        let log = requested.clone();
        let root = tabs()
            .value("a")
            .on_change(move |next| log.borrow_mut().push(next))
            .build();

        root.select("b");
        assert_eq!(root.value().as_deref(), Some("a"));
        assert_eq!(requested.borrow().as_slice(), ["b"]);

        root.sync_value(Some("b".to_string()));
        assert_eq!(root.value().as_deref(), Some("b"));
    }

    #[test]
    fn test_no_selection_shows_nothing() {
        let root = tabs().build();
        let mut scopes = ScopeStack::new();
        root.provide(&mut scopes, |scopes| {
            assert_eq!(TabsContent::new("a").visibility(scopes), ContentVisibility::Hidden);
        });
    }
}
