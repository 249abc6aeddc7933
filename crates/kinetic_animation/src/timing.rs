//! Duration-based animation toward a target value
//!
//! A [`TimingAnimation`] holds at most one interpolation. Driving it toward a
//! new target restarts the interpolation from wherever the value is right now,
//! so reversing halfway through never snaps.

use crate::easing::Easing;

/// Eased interpolation from the current value to a target
#[derive(Clone, Debug)]
pub struct TimingAnimation {
    value: f32,
    from: f32,
    to: f32,
    elapsed_ms: f32,
    duration_ms: f32,
    easing: Easing,
    running: bool,
}

impl TimingAnimation {
    /// A settled animation resting at `initial`
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            from: initial,
            to: initial,
            elapsed_ms: 0.0,
            duration_ms: 0.0,
            easing: Easing::default(),
            running: false,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Start interpolating toward `target` over `duration_ms`
    ///
    /// Returns `true` when a new interpolation was started. Driving toward the
    /// target already being approached (or rested at) changes nothing. A zero
    /// or negative duration lands on the target immediately.
    pub fn drive(&mut self, target: f32, duration_ms: f32) -> bool {
        if !target.is_finite() {
            tracing::warn!(target, "ignoring non-finite animation target");
            return false;
        }
        if target == self.to && (self.running || self.value == target) {
            return false;
        }

        self.from = self.value;
        self.to = target;
        self.elapsed_ms = 0.0;
        self.duration_ms = duration_ms.max(0.0);

        if self.duration_ms == 0.0 || self.from == self.to {
            self.value = target;
            self.running = false;
        } else {
            self.running = true;
        }
        tracing::trace!(
            from = self.from,
            to = self.to,
            duration_ms = self.duration_ms,
            "timing animation started"
        );
        true
    }

    /// Advance by `dt_ms`
    pub fn step(&mut self, dt_ms: f32) {
        if !self.running {
            return;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        let t = (self.elapsed_ms / self.duration_ms).min(1.0);
        if t >= 1.0 {
            self.value = self.to;
            self.running = false;
        } else {
            self.value = self.from + (self.to - self.from) * self.easing.apply(t);
        }
    }

    /// Freeze at the current value
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.to = self.value;
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Largest change a single step of `dt_ms` can produce in the current interpolation
    pub fn max_step(&self, dt_ms: f32) -> f32 {
        if self.duration_ms == 0.0 {
            return (self.to - self.from).abs();
        }
        (self.to - self.from).abs() * self.easing.max_slope() * dt_ms / self.duration_ms
    }
}

impl Default for TimingAnimation {
    fn default() -> Self {
        Self::new(0.0)
    }
}
