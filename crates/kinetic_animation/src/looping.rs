//! Repeating animations
//!
//! A loop is a start value followed by a sequence of timed segments, optionally
//! delayed, repeated a fixed number of times or forever. Spinners rotate with a
//! single linear segment; pulses and dots chain a grow and a shrink segment.

use crate::easing::Easing;
use smallvec::SmallVec;

/// One leg of a loop: move to `to` over `duration_ms`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopSegment {
    pub to: f32,
    pub duration_ms: f32,
    pub easing: Easing,
}

/// A sequence of segments played on repeat
#[derive(Clone, Debug)]
pub struct LoopAnimation {
    start: f32,
    segments: SmallVec<[LoopSegment; 2]>,
    delay_ms: f32,
    /// `None` repeats until stopped
    iterations: Option<u32>,
    elapsed_ms: f32,
    playing: bool,
}

impl LoopAnimation {
    pub fn new(start: f32) -> Self {
        Self {
            start,
            segments: SmallVec::new(),
            delay_ms: 0.0,
            iterations: None,
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    /// Append a segment
    pub fn then(mut self, to: f32, duration_ms: f32, easing: Easing) -> Self {
        self.segments.push(LoopSegment {
            to,
            duration_ms: duration_ms.max(0.0),
            easing,
        });
        self
    }

    /// Hold the start value for `delay_ms` before the first cycle
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    /// Play `count` cycles, then rest on the final value
    pub fn iterations(mut self, count: u32) -> Self {
        self.iterations = Some(count);
        self
    }

    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    /// Stop advancing; the value stays where it is
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Length of one cycle in milliseconds
    pub fn cycle_ms(&self) -> f32 {
        self.segments.iter().map(|s| s.duration_ms).sum()
    }

    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.elapsed_ms += dt_ms.max(0.0);

        if let Some(count) = self.iterations {
            let total = self.delay_ms + self.cycle_ms() * count as f32;
            if self.elapsed_ms >= total {
                self.elapsed_ms = total;
                self.playing = false;
            }
        }
    }

    /// Value at the current position of the loop
    pub fn value(&self) -> f32 {
        let cycle = self.cycle_ms();
        let local = self.elapsed_ms - self.delay_ms;
        if local <= 0.0 || cycle <= 0.0 {
            return self.start;
        }

        if let Some(count) = self.iterations {
            if local >= cycle * count as f32 {
                return self.segments.last().map_or(self.start, |s| s.to);
            }
        }

        let mut position = local % cycle;
        let mut from = self.start;
        for segment in &self.segments {
            if position < segment.duration_ms {
                let t = position / segment.duration_ms;
                return from + (segment.to - from) * segment.easing.apply(t);
            }
            position -= segment.duration_ms;
            from = segment.to;
        }
        from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps_each_cycle() {
        let mut spin = LoopAnimation::new(0.0).then(360.0, 800.0, Easing::Linear);
        spin.start();

        spin.tick(200.0);
        assert!((spin.value() - 90.0).abs() < 1e-3);

        spin.tick(800.0);
        assert!((spin.value() - 90.0).abs() < 1e-3);
        assert!(spin.is_playing());
    }

    #[test]
    fn test_sequence_returns_to_start() {
        let mut pulse = LoopAnimation::new(0.4)
            .then(0.8, 750.0, Easing::Ease)
            .then(0.4, 750.0, Easing::Ease);
        pulse.start();

        pulse.tick(750.0);
        assert!((pulse.value() - 0.8).abs() < 1e-3);

        pulse.tick(749.0);
        assert!((pulse.value() - 0.4).abs() < 0.01);
    }

    #[test]
    fn test_delay_holds_start_value() {
        let mut dot = LoopAnimation::new(1.0)
            .then(1.4, 500.0, Easing::Ease)
            .then(1.0, 500.0, Easing::Ease)
            .delay(333.0);
        dot.start();

        dot.tick(300.0);
        assert_eq!(dot.value(), 1.0);

        dot.tick(300.0);
        assert!(dot.value() > 1.0);
    }

    #[test]
    fn test_finite_iterations_rest_on_final_value() {
        let mut anim = LoopAnimation::new(0.0)
            .then(10.0, 100.0, Easing::Linear)
            .iterations(2);
        anim.start();

        anim.tick(150.0);
        assert!(anim.is_playing());
        anim.tick(100.0);
        assert!(!anim.is_playing());
        assert_eq!(anim.value(), 10.0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut anim = LoopAnimation::new(0.0).then(1.0, 100.0, Easing::Linear);
        anim.start();
        anim.tick(50.0);
        anim.stop();
        anim.stop();
        let frozen = anim.value();
        anim.tick(25.0);
        assert_eq!(anim.value(), frozen);
    }

    #[test]
    fn test_empty_loop_rests_at_start() {
        let mut anim = LoopAnimation::new(2.0);
        anim.start();
        anim.tick(100.0);
        assert_eq!(anim.value(), 2.0);
        assert_eq!(anim.cycle_ms(), 0.0);
    }
}
