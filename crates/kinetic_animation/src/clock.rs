//! Frame clock
//!
//! The clock owns every registered animation and steps them once per frame.
//! Widgets keep lightweight handles ([`Animator`], [`LoopHandle`]) that read
//! values and set targets; they never write values directly.
//!
//! Everything runs on the UI thread, so the clock is shared as
//! `Rc<RefCell<FrameClock>>`. The host calls [`FrameClock::tick`] once per
//! rendered frame and then reads the animated values.

use crate::easing::Easing;
use crate::looping::LoopAnimation;
use crate::timing::TimingAnimation;
use slotmap::{new_key_type, SlotMap};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

new_key_type! {
    pub struct TimingId;
    pub struct LoopId;
}

/// Clock shared between the host's frame loop and widget handles
pub type SharedClock = Rc<RefCell<FrameClock>>;

/// Per-frame clock that ticks all active animations
#[derive(Debug, Default)]
pub struct FrameClock {
    timings: SlotMap<TimingId, TimingAnimation>,
    loops: SlotMap<LoopId, LoopAnimation>,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new clock wrapped for sharing
    pub fn shared() -> SharedClock {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn add_timing(&mut self, animation: TimingAnimation) -> TimingId {
        self.timings.insert(animation)
    }

    pub fn timing(&self, id: TimingId) -> Option<&TimingAnimation> {
        self.timings.get(id)
    }

    pub fn timing_mut(&mut self, id: TimingId) -> Option<&mut TimingAnimation> {
        self.timings.get_mut(id)
    }

    pub fn remove_timing(&mut self, id: TimingId) -> Option<TimingAnimation> {
        self.timings.remove(id)
    }

    pub fn add_loop(&mut self, animation: LoopAnimation) -> LoopId {
        self.loops.insert(animation)
    }

    pub fn looping(&self, id: LoopId) -> Option<&LoopAnimation> {
        self.loops.get(id)
    }

    pub fn looping_mut(&mut self, id: LoopId) -> Option<&mut LoopAnimation> {
        self.loops.get_mut(id)
    }

    pub fn remove_loop(&mut self, id: LoopId) -> Option<LoopAnimation> {
        self.loops.remove(id)
    }

    /// Advance every active animation by `dt_ms`
    pub fn tick(&mut self, dt_ms: f32) {
        self.frame += 1;
        for (_, timing) in self.timings.iter_mut() {
            timing.step(dt_ms);
        }
        for (_, looping) in self.loops.iter_mut() {
            looping.tick(dt_ms);
        }
    }

    /// Check if any animation still needs frames
    pub fn has_active_animations(&self) -> bool {
        self.active_count() > 0
    }

    /// Number of animations that will change on the next tick
    pub fn active_count(&self) -> usize {
        self.timings.values().filter(|t| t.is_running()).count()
            + self.loops.values().filter(|l| l.is_playing()).count()
    }

    /// Number of registered animations, settled or not
    pub fn len(&self) -> usize {
        self.timings.len() + self.loops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

/// Handle to a timing animation registered on a clock
///
/// Dropping the handle unregisters the animation. If the clock is dropped
/// first, the handle keeps reporting the last value it observed.
#[derive(Debug)]
pub struct Animator {
    clock: Weak<RefCell<FrameClock>>,
    id: TimingId,
    last: Cell<f32>,
}

impl Animator {
    /// Register a settled animation resting at `initial`
    pub fn new(clock: &SharedClock, initial: f32) -> Self {
        Self::with_easing(clock, initial, Easing::default())
    }

    pub fn with_easing(clock: &SharedClock, initial: f32, easing: Easing) -> Self {
        let id = clock
            .borrow_mut()
            .add_timing(TimingAnimation::new(initial).with_easing(easing));
        Self {
            clock: Rc::downgrade(clock),
            id,
            last: Cell::new(initial),
        }
    }

    /// Retarget toward `target` over `duration_ms`, starting from the current value
    ///
    /// Returns `true` when a new interpolation started.
    pub fn drive(&self, target: f32, duration_ms: f32) -> bool {
        let Some(clock) = self.clock.upgrade() else {
            return false;
        };
        let mut clock = clock.borrow_mut();
        match clock.timing_mut(self.id) {
            Some(timing) => {
                let started = timing.drive(target, duration_ms);
                self.last.set(timing.value());
                started
            }
            None => false,
        }
    }

    /// Current animated value
    pub fn value(&self) -> f32 {
        if let Some(clock) = self.clock.upgrade() {
            if let Some(timing) = clock.borrow().timing(self.id) {
                self.last.set(timing.value());
            }
        }
        self.last.get()
    }

    /// Value the animation is heading to
    pub fn target(&self) -> f32 {
        self.clock
            .upgrade()
            .and_then(|clock| clock.borrow().timing(self.id).map(|t| t.target()))
            .unwrap_or_else(|| self.last.get())
    }

    pub fn is_animating(&self) -> bool {
        self.clock
            .upgrade()
            .and_then(|clock| clock.borrow().timing(self.id).map(|t| t.is_running()))
            .unwrap_or(false)
    }

    /// Stop the interpolation where it is; idempotent
    pub fn detach(&self) {
        if let Some(clock) = self.clock.upgrade() {
            if let Some(timing) = clock.borrow_mut().timing_mut(self.id) {
                timing.stop();
                self.last.set(timing.value());
            }
        }
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            match clock.try_borrow_mut() {
                Ok(mut clock) => {
                    clock.remove_timing(self.id);
                }
                Err(_) => tracing::warn!("frame clock busy while dropping animator"),
            }
        }
    }
}

/// Handle to a loop registered on a clock
#[derive(Debug)]
pub struct LoopHandle {
    clock: Weak<RefCell<FrameClock>>,
    id: LoopId,
}

impl LoopHandle {
    /// Register `animation` and start it
    pub fn start(clock: &SharedClock, mut animation: LoopAnimation) -> Self {
        animation.start();
        let id = clock.borrow_mut().add_loop(animation);
        Self {
            clock: Rc::downgrade(clock),
            id,
        }
    }

    pub fn value(&self) -> f32 {
        self.clock
            .upgrade()
            .and_then(|clock| clock.borrow().looping(self.id).map(|l| l.value()))
            .unwrap_or(0.0)
    }

    pub fn is_playing(&self) -> bool {
        self.clock
            .upgrade()
            .and_then(|clock| clock.borrow().looping(self.id).map(|l| l.is_playing()))
            .unwrap_or(false)
    }

    /// Detach from the clock's tick; idempotent
    pub fn stop(&self) {
        if let Some(clock) = self.clock.upgrade() {
            if let Some(looping) = clock.borrow_mut().looping_mut(self.id) {
                looping.stop();
            }
        }
    }

    /// Restart from the beginning of the loop
    pub fn restart(&self) {
        if let Some(clock) = self.clock.upgrade() {
            if let Some(looping) = clock.borrow_mut().looping_mut(self.id) {
                looping.start();
            }
        }
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            match clock.try_borrow_mut() {
                Ok(mut clock) => {
                    clock.remove_loop(self.id);
                }
                Err(_) => tracing::warn!("frame clock busy while dropping loop"),
            }
        }
    }
}
