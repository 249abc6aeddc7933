//! Activity indicators
//!
//! Spinners, the pulse, the bouncing dots and the skeleton shimmer are all
//! endless loops registered on the frame clock. Each indicator starts when it
//! is built and stops when it is dropped.

use kinetic_animation::{Easing, LoopAnimation, LoopHandle, SharedClock};
use kinetic_theme::ThemeState;

/// Spinner artwork
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerStyle {
    /// Single open arc
    #[default]
    Arc,
    /// Two opposing arcs
    Dual,
}

/// Continuously rotating spinner
#[derive(Debug)]
pub struct Spinner {
    style: SpinnerStyle,
    rotation: LoopHandle,
}

impl Spinner {
    pub fn new(clock: &SharedClock, style: SpinnerStyle, duration_ms: Option<f32>) -> Self {
        let duration_ms =
            duration_ms.unwrap_or_else(|| ThemeState::get().defaults().spinner.spinner_ms);
        Self {
            style,
            rotation: LoopHandle::start(clock, rotation(duration_ms)),
        }
    }

    pub fn style(&self) -> SpinnerStyle {
        self.style
    }

    /// Rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation.value()
    }

    pub fn is_spinning(&self) -> bool {
        self.rotation.is_playing()
    }

    pub fn stop(&self) {
        self.rotation.stop();
    }
}

fn rotation(duration_ms: f32) -> LoopAnimation {
    LoopAnimation::new(0.0).then(360.0, duration_ms, Easing::Linear)
}

fn bounce(rest: f32, peak: f32, duration_ms: f32) -> LoopAnimation {
    LoopAnimation::new(rest)
        .then(peak, duration_ms / 2.0, Easing::Ease)
        .then(rest, duration_ms / 2.0, Easing::Ease)
}

pub fn spinner(clock: &SharedClock) -> Spinner {
    Spinner::new(clock, SpinnerStyle::Arc, None)
}

pub fn spinner2(clock: &SharedClock) -> Spinner {
    Spinner::new(clock, SpinnerStyle::Dual, None)
}

/// Rotating square that breathes between 0.4 and 0.8 scale
#[derive(Debug)]
pub struct Pulse {
    rotation: LoopHandle,
    scale: LoopHandle,
}

impl Pulse {
    pub const MIN_SCALE: f32 = 0.4;
    pub const MAX_SCALE: f32 = 0.8;

    pub fn new(clock: &SharedClock, duration_ms: Option<f32>) -> Self {
        let duration_ms =
            duration_ms.unwrap_or_else(|| ThemeState::get().defaults().spinner.pulse_ms);
        Self {
            rotation: LoopHandle::start(clock, rotation(duration_ms)),
            scale: LoopHandle::start(
                clock,
                bounce(Self::MIN_SCALE, Self::MAX_SCALE, duration_ms),
            ),
        }
    }

    pub fn rotation(&self) -> f32 {
        self.rotation.value()
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn stop(&self) {
        self.rotation.stop();
        self.scale.stop();
    }
}

pub fn pulse(clock: &SharedClock) -> Pulse {
    Pulse::new(clock, None)
}

/// Three dots that grow in turn
#[derive(Debug)]
pub struct DotsSpinner {
    dots: [LoopHandle; 3],
}

impl DotsSpinner {
    pub const PEAK_SCALE: f32 = 1.4;

    pub fn new(clock: &SharedClock, duration_ms: Option<f32>) -> Self {
        let duration_ms =
            duration_ms.unwrap_or_else(|| ThemeState::get().defaults().spinner.dots_ms);
        let dot = |index: usize| {
            LoopHandle::start(
                clock,
                bounce(1.0, Self::PEAK_SCALE, duration_ms).delay(index as f32 * duration_ms / 3.0),
            )
        };
        Self {
            dots: [dot(0), dot(1), dot(2)],
        }
    }

    pub fn scales(&self) -> [f32; 3] {
        [
            self.dots[0].value(),
            self.dots[1].value(),
            self.dots[2].value(),
        ]
    }

    pub fn stop(&self) {
        for dot in &self.dots {
            dot.stop();
        }
    }
}

pub fn dots(clock: &SharedClock) -> DotsSpinner {
    DotsSpinner::new(clock, None)
}

/// Placeholder block with a sweeping highlight
#[derive(Debug)]
pub struct Skeleton {
    width: f32,
    shimmer: LoopHandle,
}

impl Skeleton {
    /// Highlight band width as a fraction of the skeleton width
    pub const BAND: f32 = 0.6;

    /// `width` is the skeleton's numeric width, if it has one
    pub fn new(clock: &SharedClock, width: Option<f32>) -> Self {
        let defaults = ThemeState::get().defaults().spinner;
        let width = width
            .filter(|w| w.is_finite() && *w >= 0.0)
            .unwrap_or(defaults.shimmer_width);
        let band = width * Self::BAND;
        Self {
            width,
            shimmer: LoopHandle::start(
                clock,
                LoopAnimation::new(-band).then(width + band, defaults.shimmer_ms, Easing::EaseInOutQuad),
            ),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn band_width(&self) -> f32 {
        self.width * Self::BAND
    }

    /// Horizontal offset of the highlight band
    pub fn shimmer_offset(&self) -> f32 {
        self.shimmer.value()
    }

    pub fn stop(&self) {
        self.shimmer.stop();
    }
}

pub fn skeleton(clock: &SharedClock, width: Option<f32>) -> Skeleton {
    Skeleton::new(clock, width)
}
