//! Collapsible component for expandable content
//!
//! A root that owns one open/closed value, any number of triggers that toggle
//! it, and a content panel whose height animates between `min_height` and the
//! measured content height.
//!
//! The panel height is driven by a [`PanelController`], a four-phase state
//! machine:
//!
//! ```text
//! Collapsed --expand--> Expanding --complete--> Expanded
//! Expanded --collapse--> Collapsing --complete--> Collapsed
//! ```
//!
//! Toggling mid-animation reverses from the current animated height.
//!
//! # Example
//!
//! ```rust
//! use kinetic_animation::FrameClock;
//! use kinetic_cn::prelude::*;
//!
//! let clock = FrameClock::shared();
//! let faq = cn::collapsible(&clock).duration(400.0).build();
//! let mut scopes = ScopeStack::new();
//!
//! faq.provide(&mut scopes, |scopes| {
//!     CollapsibleContent::new().on_layout(scopes, LayoutEvent::height(120.0));
//!     CollapsibleTrigger::new().press(scopes);
//! });
//!
//! for _ in 0..30 {
//!     clock.borrow_mut().tick(16.0);
//! }
//! assert_eq!(faq.panel_frame().height, 120.0);
//! ```

use kinetic_animation::{Animator, SharedClock};
use kinetic_core::{ChangeHandler, ControlledValue, LayoutEvent, Scope, ScopeStack, UiEvent};
use kinetic_theme::ThemeState;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Panel phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

/// Input to the panel state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEvent {
    Expand,
    Collapse,
    AnimationComplete,
}

impl PanelPhase {
    /// Transition table; unmatched events leave the phase unchanged
    pub fn on(self, event: PanelEvent) -> PanelPhase {
        use PanelEvent::*;
        use PanelPhase::*;
        match (self, event) {
            (Collapsed | Collapsing, Expand) => Expanding,
            (Expanded | Expanding, Collapse) => Collapsing,
            (Expanding, AnimationComplete) => Expanded,
            (Collapsing, AnimationComplete) => Collapsed,
            (phase, _) => phase,
        }
    }

    /// Whether the panel is open or opening
    pub fn is_open(self) -> bool {
        matches!(self, PanelPhase::Expanding | PanelPhase::Expanded)
    }

    pub fn is_animating(self) -> bool {
        matches!(self, PanelPhase::Expanding | PanelPhase::Collapsing)
    }
}

/// Height and phase of the panel for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelFrame {
    pub height: f32,
    pub phase: PanelPhase,
}

/// Drives the panel height between `min_height` and the measured content height
#[derive(Debug)]
pub struct PanelController {
    height: Animator,
    phase: PanelPhase,
    measured_height: f32,
    min_height: f32,
    duration_ms: f32,
}

impl PanelController {
    pub fn new(clock: &SharedClock, expanded: bool, min_height: f32, duration_ms: f32) -> Self {
        let min_height = sanitize(min_height);
        Self {
            // Nothing has been measured yet, so either way the panel rests at min height.
            height: Animator::new(clock, min_height),
            phase: if expanded {
                PanelPhase::Expanded
            } else {
                PanelPhase::Collapsed
            },
            measured_height: 0.0,
            min_height,
            duration_ms: sanitize(duration_ms),
        }
    }

    /// Current phase, already settled if the height animation has finished
    pub fn phase(&self) -> PanelPhase {
        if self.phase.is_animating() && !self.height.is_animating() {
            self.phase.on(PanelEvent::AnimationComplete)
        } else {
            self.phase
        }
    }

    pub fn measured_height(&self) -> f32 {
        self.measured_height
    }

    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Height the panel is animating toward in its current phase
    pub fn target_height(&self) -> f32 {
        if self.phase.is_open() {
            self.measured_height.max(self.min_height)
        } else {
            self.min_height
        }
    }

    /// Current animated height
    pub fn height(&self) -> f32 {
        self.height.value()
    }

    pub fn expand(&mut self) {
        self.send(PanelEvent::Expand);
    }

    pub fn collapse(&mut self) {
        self.send(PanelEvent::Collapse);
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        if expanded {
            self.expand();
        } else {
            self.collapse();
        }
    }

    pub fn toggle(&mut self) {
        self.set_expanded(!self.phase.is_open());
    }

    /// Accept a content layout measurement
    ///
    /// Zero, negative, and repeated measurements are ignored so transient layout
    /// passes never animate the panel shut. Returns `true` if accepted.
    pub fn measure(&mut self, height: f32) -> bool {
        if !(height > 0.0) || !height.is_finite() || height == self.measured_height {
            tracing::trace!(height, stored = self.measured_height, "ignoring panel measurement");
            return false;
        }

        tracing::debug!(from = self.measured_height, to = height, "panel content measured");
        self.measured_height = height;
        if self.phase.is_open() {
            self.retarget();
        }
        true
    }

    /// Change the floor; the panel animates to the new target height
    pub fn set_min_height(&mut self, min_height: f32) {
        let min_height = sanitize(min_height);
        if min_height != self.min_height {
            tracing::debug!(from = self.min_height, to = min_height, "panel min height changed");
            self.min_height = min_height;
            self.retarget();
        }
    }

    /// Change the duration used by the next transition
    pub fn set_duration(&mut self, duration_ms: f32) {
        self.duration_ms = sanitize(duration_ms);
    }

    /// Settle a finished animation and report the frame
    pub fn frame(&mut self) -> PanelFrame {
        if self.phase.is_animating() && !self.height.is_animating() {
            self.send(PanelEvent::AnimationComplete);
        }
        PanelFrame {
            height: self.height.value(),
            phase: self.phase,
        }
    }

    fn send(&mut self, event: PanelEvent) {
        let next = self.phase.on(event);
        if next == self.phase {
            return;
        }
        tracing::debug!(from = ?self.phase, to = ?next, ?event, "panel transition");
        self.phase = next;

        if matches!(event, PanelEvent::Expand | PanelEvent::Collapse) {
            self.retarget();
            // Zero duration, or already resting at the target.
            if !self.height.is_animating() {
                self.send(PanelEvent::AnimationComplete);
            }
        }
    }

    fn retarget(&mut self) {
        let target = self.target_height();
        self.height.drive(target, self.duration_ms);
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Snapshot published by a [`Collapsible`] to its subtree
pub struct CollapsibleScope {
    pub expanded: bool,
    pub duration_ms: f32,
    pub min_height: f32,
    toggle: Rc<dyn Fn()>,
    panel: Rc<RefCell<PanelController>>,
}

impl CollapsibleScope {
    /// Toggle the shared open state
    pub fn toggle(&self) {
        (self.toggle)();
    }
}

impl Scope for CollapsibleScope {
    const NAME: &'static str = "Collapsible";
}

/// Collapsible root
pub struct Collapsible {
    value: ControlledValue<bool>,
    panel: Rc<RefCell<PanelController>>,
    duration_ms: f32,
    min_height: f32,
}

impl Collapsible {
    pub fn is_expanded(&self) -> bool {
        self.value.get()
    }

    /// Toggle the open state (forwarded to `on_change` when controlled)
    pub fn toggle(&self) {
        self.value.update(|open| !open);
    }

    /// Apply the owner's `value` prop for this update
    pub fn sync_value(&self, value: Option<bool>) {
        self.value.sync(value);
    }

    /// Current panel frame
    pub fn panel_frame(&self) -> PanelFrame {
        self.panel.borrow_mut().frame()
    }

    pub fn phase(&self) -> PanelPhase {
        self.panel.borrow().phase()
    }

    /// Apply the owner's `min_height` prop; the panel re-animates to it
    pub fn set_min_height(&mut self, min_height: f32) {
        self.panel.borrow_mut().set_min_height(min_height);
        self.min_height = self.panel.borrow().min_height();
    }

    /// Apply the owner's `duration` prop to later transitions
    pub fn set_duration(&mut self, duration_ms: f32) {
        self.panel.borrow_mut().set_duration(duration_ms);
        self.duration_ms = self.panel.borrow().duration_ms();
    }

    pub fn scope(&self) -> CollapsibleScope {
        let value = self.value.clone();
        CollapsibleScope {
            expanded: self.value.get(),
            duration_ms: self.duration_ms,
            min_height: self.min_height,
            toggle: Rc::new(move || value.update(|open| !open)),
            panel: Rc::clone(&self.panel),
        }
    }

    /// Publish this collapsible's scope while `f` builds its subtree
    pub fn provide<R>(&self, scopes: &mut ScopeStack, f: impl FnOnce(&mut ScopeStack) -> R) -> R {
        scopes.provide(self.scope(), f)
    }
}

/// Builder for [`Collapsible`]
pub struct CollapsibleBuilder {
    clock: SharedClock,
    value: Option<bool>,
    default_value: bool,
    on_change: Option<ChangeHandler<bool>>,
    duration_ms: Option<f32>,
    min_height: Option<f32>,
}

impl CollapsibleBuilder {
    pub fn new(clock: &SharedClock) -> Self {
        Self {
            clock: Rc::clone(clock),
            value: None,
            default_value: false,
            on_change: None,
            duration_ms: None,
            min_height: None,
        }
    }

    /// Control the open state externally
    pub fn value(mut self, open: bool) -> Self {
        self.value = Some(open);
        self
    }

    pub fn default_value(mut self, open: bool) -> Self {
        self.default_value = open;
        self
    }

    pub fn on_change<F: Fn(bool) + 'static>(mut self, f: F) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn min_height(mut self, min_height: f32) -> Self {
        self.min_height = Some(min_height);
        self
    }

    pub fn build(self) -> Collapsible {
        let defaults = ThemeState::get().defaults().collapsible;
        let duration_ms = self.duration_ms.unwrap_or(defaults.duration_ms);
        let min_height = self.min_height.unwrap_or(defaults.min_height);

        let value = ControlledValue::from_props(self.value, self.default_value, self.on_change);
        let panel = Rc::new(RefCell::new(PanelController::new(
            &self.clock,
            value.get(),
            min_height,
            duration_ms,
        )));

        let weak: Weak<RefCell<PanelController>> = Rc::downgrade(&panel);
        value.subscribe(move |open| {
            if let Some(panel) = weak.upgrade() {
                panel.borrow_mut().set_expanded(*open);
            }
        });

        Collapsible {
            value,
            panel,
            duration_ms,
            min_height,
        }
    }
}

/// Create a collapsible
pub fn collapsible(clock: &SharedClock) -> CollapsibleBuilder {
    CollapsibleBuilder::new(clock)
}

/// Any pressable that toggles the enclosing collapsible
#[derive(Default)]
pub struct CollapsibleTrigger {
    on_press: Option<Box<dyn Fn()>>,
}

impl CollapsibleTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra press callback, run before the toggle
    pub fn on_press<F: Fn() + 'static>(mut self, f: F) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    /// Returns `true` if a collapsible was toggled
    pub fn press(&self, scopes: &ScopeStack) -> bool {
        if let Some(on_press) = &self.on_press {
            on_press();
        }
        match scopes.read_in::<CollapsibleScope>("CollapsibleTrigger") {
            Some(scope) => {
                scope.toggle();
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
}

/// Measured content of the enclosing collapsible
#[derive(Clone, Copy, Debug, Default)]
pub struct CollapsibleContent;

impl CollapsibleContent {
    pub fn new() -> Self {
        Self
    }

    /// Forward a layout measurement; returns `true` if the panel accepted it
    pub fn on_layout(&self, scopes: &ScopeStack, layout: LayoutEvent) -> bool {
        match scopes.read_in::<CollapsibleScope>("CollapsibleContent") {
            Some(scope) => scope.panel.borrow_mut().measure(layout.height),
            None => false,
        }
    }

    /// Current panel frame, or `None` outside a collapsible
    pub fn frame(&self, scopes: &ScopeStack) -> Option<PanelFrame> {
        scopes
            .read_in::<CollapsibleScope>("CollapsibleContent")
            .map(|scope| scope.panel.borrow_mut().frame())
    }

    pub fn handle_event(&self, scopes: &ScopeStack, event: &UiEvent) -> bool {
        match event {
            UiEvent::Layout(layout) => self.on_layout(scopes, *layout),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_animation::FrameClock;
    use std::cell::Cell;

    fn run(clock: &SharedClock, frames: usize) {
        for _ in 0..frames {
            clock.borrow_mut().tick(16.0);
        }
    }

    #[test]
    fn test_transition_table() {
        use PanelEvent::*;
        use PanelPhase::*;
        assert_eq!(Collapsed.on(Expand), Expanding);
        assert_eq!(Expanding.on(AnimationComplete), Expanded);
        assert_eq!(Expanded.on(Collapse), Collapsing);
        assert_eq!(Collapsing.on(AnimationComplete), Collapsed);
        assert_eq!(Expanding.on(Collapse), Collapsing);
        assert_eq!(Collapsing.on(Expand), Expanding);
        assert_eq!(Expanded.on(Expand), Expanded);
        assert_eq!(Collapsed.on(AnimationComplete), Collapsed);
    }

    #[test]
    fn test_expand_then_complete() {
        let clock = FrameClock::shared();
        let mut panel = PanelController::new(&clock, false, 0.0, 400.0);
        assert!(panel.measure(120.0));

        panel.expand();
        assert_eq!(panel.phase(), PanelPhase::Expanding);
        assert_eq!(panel.target_height(), 120.0);

        run(&clock, 30);
        let frame = panel.frame();
        assert_eq!(frame.phase, PanelPhase::Expanded);
        assert_eq!(frame.height, 120.0);
    }

    #[test]
    fn test_reverse_mid_flight_starts_from_current_height() {
        let clock = FrameClock::shared();
        let mut panel = PanelController::new(&clock, false, 0.0, 400.0);
        panel.measure(120.0);
        panel.expand();
        run(&clock, 10);

        let in_flight = panel.height();
        assert!(in_flight > 0.0 && in_flight < 120.0);

        panel.collapse();
        assert_eq!(panel.phase(), PanelPhase::Collapsing);
        assert_eq!(panel.target_height(), 0.0);
        assert_eq!(panel.height(), in_flight);

        clock.borrow_mut().tick(16.0);
        assert!(panel.height() <= in_flight);
    }

    #[test]
    fn test_min_height_floor() {
        let clock = FrameClock::shared();
        let mut panel = PanelController::new(&clock, false, 40.0, 0.0);
        assert_eq!(panel.height(), 40.0);

        panel.measure(20.0);
        panel.expand();
        assert_eq!(panel.target_height(), 40.0);
        // Already resting at the target: completes immediately.
        assert_eq!(panel.phase(), PanelPhase::Expanded);
    }

    #[test]
    fn test_zero_and_duplicate_measurements_are_ignored() {
        let clock = FrameClock::shared();
        let mut panel = PanelController::new(&clock, true, 0.0, 400.0);

        assert!(!panel.measure(0.0));
        assert!(!panel.measure(-5.0));
        assert!(!panel.measure(f32::NAN));
        assert!(panel.measure(80.0));
        run(&clock, 30);
        panel.frame();

        assert!(!panel.measure(80.0));
        assert!(!clock.borrow().has_active_animations());
        assert_eq!(panel.height(), 80.0);
    }

    #[test]
    fn test_remeasure_while_open_retargets() {
        let clock = FrameClock::shared();
        let mut panel = PanelController::new(&clock, true, 0.0, 100.0);
        panel.measure(50.0);
        run(&clock, 10);
        assert_eq!(panel.height(), 50.0);

        panel.measure(90.0);
        run(&clock, 10);
        assert_eq!(panel.height(), 90.0);
        assert_eq!(panel.frame().phase, PanelPhase::Expanded);
    }

    #[test]
    fn test_phase_settles_without_a_frame_call() {
        let clock = FrameClock::shared();
        let mut panel = PanelController::new(&clock, false, 0.0, 400.0);
        panel.measure(120.0);
        panel.expand();
        run(&clock, 10);
        assert_eq!(panel.phase(), PanelPhase::Expanding);

        run(&clock, 40);
        assert_eq!(panel.phase(), PanelPhase::Expanded);
        assert_eq!(panel.target_height(), 120.0);

        // Collapsing from the settled state still works.
        panel.toggle();
        assert_eq!(panel.phase(), PanelPhase::Collapsing);
        run(&clock, 40);
        assert_eq!(panel.phase(), PanelPhase::Collapsed);
        assert_eq!(panel.frame().height, 0.0);
    }

    #[test]
    fn test_root_phase_tracks_the_clock() {
        let clock = FrameClock::shared();
        let root = collapsible(&clock).duration(200.0).build();
        let mut scopes = ScopeStack::new();
        root.provide(&mut scopes, |scopes| {
            CollapsibleContent::new().on_layout(scopes, LayoutEvent::height(64.0));
        });

        root.toggle();
        assert_eq!(root.phase(), PanelPhase::Expanding);
        run(&clock, 20);
        assert_eq!(root.phase(), PanelPhase::Expanded);
    }

    #[test]
    fn test_min_height_change_while_expanded_retargets() {
        let clock = FrameClock::shared();
        let mut root = collapsible(&clock).default_value(true).duration(100.0).build();
        let mut scopes = ScopeStack::new();
        root.provide(&mut scopes, |scopes| {
            CollapsibleContent::new().on_layout(scopes, LayoutEvent::height(50.0));
        });
        run(&clock, 10);
        assert_eq!(root.panel_frame().height, 50.0);

        root.set_min_height(80.0);
        assert!(clock.borrow().has_active_animations());
        assert_eq!(root.panel.borrow().target_height(), 80.0);
        assert_eq!(root.scope().min_height, 80.0);

        run(&clock, 10);
        let frame = root.panel_frame();
        assert_eq!(frame.height, 80.0);
        assert_eq!(frame.phase, PanelPhase::Expanded);

        // Lowering it again returns to the measured height.
        root.set_min_height(-1.0);
        assert_eq!(root.scope().min_height, 0.0);
        run(&clock, 10);
        assert_eq!(root.panel_frame().height, 50.0);
    }

    #[test]
    fn test_duration_change_applies_to_next_toggle() {
        let clock = FrameClock::shared();
        let mut root = collapsible(&clock).duration(400.0).build();
        let mut scopes = ScopeStack::new();
        root.provide(&mut scopes, |scopes| {
            CollapsibleContent::new().on_layout(scopes, LayoutEvent::height(30.0));
        });

        root.set_duration(0.0);
        assert_eq!(root.scope().duration_ms, 0.0);
        root.toggle();
        assert_eq!(root.phase(), PanelPhase::Expanded);
        assert_eq!(root.panel_frame().height, 30.0);
    }

    #[test]
    fn test_triggers_share_one_value() {
        let clock = FrameClock::shared();
        let root = collapsible(&clock).duration(0.0).build();
        let mut scopes = ScopeStack::new();
        let presses = Rc::new(Cell::new(0));

        root.provide(&mut scopes, |scopes| {
            let counter = presses.clone();
            let first = CollapsibleTrigger::new().on_press(move || counter.set(counter.get() + 1));
            let second = CollapsibleTrigger::new();

            assert!(first.press(scopes));
            assert!(second.handle_event(scopes, &UiEvent::Press));
            assert!(first.press(scopes));
        });

        assert_eq!(presses.get(), 2);
        assert!(root.is_expanded());
        assert!(root.phase().is_open());
    }

    #[test]
    fn test_controlled_collapsible_waits_for_owner() {
        let clock = FrameClock::shared();
        let requested = Rc::new(Cell::new(None));
        let sink = requested.clone();
        let root = collapsible(&clock)
            .value(false)
            .on_change(move |open| sink.set(Some(open)))
            .build();

        root.toggle();
        assert_eq!(requested.get(), Some(true));
        assert!(!root.is_expanded());
        assert_eq!(root.phase(), PanelPhase::Collapsed);

        root.sync_value(Some(true));
        assert!(root.is_expanded());
        assert!(root.phase().is_open());
    }

    #[test]
    fn test_parts_outside_provider_degrade() {
        let scopes = ScopeStack::new();
        assert!(!CollapsibleTrigger::new().press(&scopes));
        assert!(!CollapsibleContent::new().on_layout(&scopes, LayoutEvent::height(10.0)));
        assert!(CollapsibleContent::new().frame(&scopes).is_none());
    }
}
