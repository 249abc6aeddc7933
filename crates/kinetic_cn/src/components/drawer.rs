//! Drawer component for bottom sheets
//!
//! The drawer itself is a platform sheet; this module only decides how that
//! sheet is configured. A `full_screen` drawer is pinned at 100% height with
//! every drag gesture disabled and an explicit close button. A regular drawer
//! sizes to its content and can be dragged closed.

use kinetic_core::{Scope, ScopeStack, UiEvent};
use std::fmt;
use std::rc::Rc;

/// Opacity of the dimmed backdrop behind an open drawer
pub const BACKDROP_OPACITY: f32 = 0.5;

/// Platform sheet the drawer presents
pub trait SheetHandle {
    fn present(&self);
    fn close(&self);
}

/// Backdrop behaviour
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropOptions {
    pub opacity: f32,
    /// Snap index at which the backdrop is fully shown
    pub appears_on_index: i32,
    /// Snap index at which the backdrop is gone (-1 is closed)
    pub disappears_on_index: i32,
}

impl Default for BackdropOptions {
    fn default() -> Self {
        Self {
            opacity: BACKDROP_OPACITY,
            appears_on_index: 0,
            disappears_on_index: -1,
        }
    }
}

/// Sheet configuration derived from the drawer mode
#[derive(Clone, Debug, PartialEq)]
pub struct SheetOptions {
    pub enable_dismiss_on_close: bool,
    pub enable_over_drag: bool,
    pub enable_dynamic_sizing: bool,
    pub enable_pan_down_to_close: bool,
    pub enable_handle_panning_gesture: bool,
    pub enable_content_panning_gesture: bool,
    /// `None` lets the sheet size itself
    pub snap_points: Option<Vec<&'static str>>,
    pub backdrop: BackdropOptions,
    pub show_close_button: bool,
    pub show_handle_indicator: bool,
    /// Pad the content below the top safe area inset
    pub pad_top_inset: bool,
}

impl SheetOptions {
    pub fn for_mode(full_screen: bool, as_child: bool) -> Self {
        let draggable = !full_screen;
        Self {
            enable_dismiss_on_close: true,
            enable_over_drag: draggable,
            enable_dynamic_sizing: draggable,
            enable_pan_down_to_close: draggable,
            enable_handle_panning_gesture: draggable,
            enable_content_panning_gesture: draggable,
            snap_points: full_screen.then(|| vec!["100%"]),
            backdrop: BackdropOptions::default(),
            show_close_button: full_screen && !as_child,
            show_handle_indicator: draggable,
            pad_top_inset: full_screen,
        }
    }
}

pub struct DrawerScope {
    pub full_screen: bool,
    pub sheet: Option<Rc<dyn SheetHandle>>,
}

impl Scope for DrawerScope {
    const NAME: &'static str = "Drawer";
}

/// Drawer root
#[derive(Clone, Default)]
pub struct Drawer {
    full_screen: bool,
    sheet: Option<Rc<dyn SheetHandle>>,
}

impl fmt::Debug for Drawer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawer")
            .field("full_screen", &self.full_screen)
            .field("has_sheet", &self.sheet.is_some())
            .finish()
    }
}

impl Drawer {
    pub fn full_screen(mut self, full_screen: bool) -> Self {
        self.full_screen = full_screen;
        self
    }

    pub fn sheet(mut self, sheet: impl SheetHandle + 'static) -> Self {
        self.sheet = Some(Rc::new(sheet));
        self
    }

    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    /// Present the sheet; returns `false` when no sheet is attached
    pub fn present(&self) -> bool {
        match &self.sheet {
            Some(sheet) => {
                tracing::debug!(full_screen = self.full_screen, "presenting drawer");
                sheet.present();
                true
            }
            None => false,
        }
    }

    pub fn close(&self) -> bool {
        match &self.sheet {
            Some(sheet) => {
                sheet.close();
                true
            }
            None => false,
        }
    }

    pub fn scope(&self) -> DrawerScope {
        DrawerScope {
            full_screen: self.full_screen,
            sheet: self.sheet.clone(),
        }
    }

    pub fn provide<R>(&self, scopes: &mut ScopeStack, f: impl FnOnce(&mut ScopeStack) -> R) -> R {
        scopes.provide(self.scope(), f)
    }
}

pub fn drawer() -> Drawer {
    Drawer::default()
}

/// Sheet body of the enclosing drawer
#[derive(Clone, Copy, Debug, Default)]
pub struct DrawerContent {
    as_child: bool,
}

impl DrawerContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render children directly, without the header and padded body
    pub fn as_child(mut self, as_child: bool) -> Self {
        self.as_child = as_child;
        self
    }

    /// Sheet options; outside a drawer the regular (non full screen) mode applies
    pub fn options(&self, scopes: &ScopeStack) -> SheetOptions {
        let full_screen = scopes
            .read_in::<DrawerScope>("DrawerContent")
            .is_some_and(|scope| scope.full_screen);
        SheetOptions::for_mode(full_screen, self.as_child)
    }

    /// Close button handler
    pub fn close(&self, scopes: &ScopeStack) -> bool {
        match scopes
            .read_in::<DrawerScope>("DrawerContent")
            .and_then(|scope| scope.sheet.clone())
        {
            Some(sheet) => {
                sheet.close();
                true
            }
            None => false,
        }
    }

    pub fn handle_event(&self, scopes: &ScopeStack, event: &UiEvent) -> bool {
        match event {
            UiEvent::Press if self.options(scopes).show_close_button => self.close(scopes),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct RecordingSheet {
        presented: Cell<u32>,
        closed: Cell<u32>,
    }

    impl SheetHandle for Rc<RecordingSheet> {
        fn present(&self) {
            self.presented.set(self.presented.get() + 1);
        }

        fn close(&self) {
            self.closed.set(self.closed.get() + 1);
        }
    }

    #[test]
    fn test_regular_drawer_is_draggable() {
        let options = SheetOptions::for_mode(false, false);
        assert!(options.enable_pan_down_to_close);
        assert!(options.enable_dynamic_sizing);
        assert!(options.snap_points.is_none());
        assert!(!options.show_close_button);
        assert_eq!(options.backdrop.opacity, 0.5);
    }

    #[test]
    fn test_full_screen_drawer_is_pinned() {
        let options = SheetOptions::for_mode(true, false);
        assert!(!options.enable_over_drag);
        assert!(!options.enable_content_panning_gesture);
        assert_eq!(options.snap_points, Some(vec!["100%"]));
        assert!(options.show_close_button);
        assert!(options.pad_top_inset);

        assert!(!SheetOptions::for_mode(true, true).show_close_button);
    }

    #[test]
    fn test_content_closes_through_scope() {
        let sheet = Rc::new(RecordingSheet::default());
        let root = drawer().full_screen(true).sheet(Rc::clone(&sheet));

        assert!(root.present());
        let mut scopes = ScopeStack::new();
        root.provide(&mut scopes, |scopes| {
            let content = DrawerContent::new();
            assert!(content.options(scopes).show_close_button);
            assert!(content.handle_event(scopes, &UiEvent::Press));
        });

        assert_eq!(sheet.presented.get(), 1);
        assert_eq!(sheet.closed.get(), 1);
    }

    #[test]
    fn test_without_sheet() {
        let root = drawer();
        assert!(!root.present());
        assert!(!root.close());
        assert!(!DrawerContent::new().close(&ScopeStack::new()));
    }
}
