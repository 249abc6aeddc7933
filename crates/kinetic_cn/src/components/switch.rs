//! Switch component for on/off toggles
//!
//! The thumb slides across the track as an animated progress value moves
//! between 0 (off) and 1 (on). The thumb offset is `progress * travel`, where
//! travel is the free space left in the track once the thumb and padding are
//! accounted for.
//!
//! # Example
//!
//! ```rust
//! use kinetic_animation::FrameClock;
//! use kinetic_cn::prelude::*;
//!
//! let clock = FrameClock::shared();
//! let wifi = cn::switch(&clock)
//!     .metrics(Some(44.0), Some(20.0), Some(3.0))
//!     .build();
//!
//! wifi.press();
//! for _ in 0..20 {
//!     clock.borrow_mut().tick(16.0);
//! }
//! assert!(wifi.is_checked());
//! assert_eq!(wifi.frame().thumb_offset, 18.0);
//! ```

use kinetic_animation::{Animator, SharedClock, ThumbGeometry};
use kinetic_core::{ChangeHandler, Color, ControlledValue, UiEvent, VariantSelection};
use kinetic_theme::{ColorToken, OpacityToken, SwitchDefaults, ThemeState};
use std::cell::Cell;
use std::rc::Rc;

/// Everything needed to draw a switch for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchFrame {
    pub checked: bool,
    /// Animated 0..=1 progress toward "on"
    pub progress: f32,
    pub thumb_offset: f32,
    pub track_color: Color,
    pub opacity: f32,
}

/// Boolean toggle with an animated thumb
pub struct Switch {
    value: ControlledValue<bool>,
    progress: Rc<Animator>,
    duration_ms: Rc<Cell<f32>>,
    geometry: ThumbGeometry,
    disabled: bool,
    off_color: Color,
    on_color: Color,
}

impl Switch {
    pub fn is_checked(&self) -> bool {
        self.value.get()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Flip the value; returns `false` if the switch is disabled
    pub fn press(&self) -> bool {
        if self.disabled {
            tracing::trace!("press ignored on disabled switch");
            return false;
        }
        self.value.update(|checked| !checked);
        true
    }

    pub fn handle_event(&self, event: &UiEvent) -> bool {
        match event {
            UiEvent::Press => self.press(),
            _ => false,
        }
    }

    /// Apply the owner's `value` prop for this update
    pub fn sync_value(&self, value: Option<bool>) {
        self.value.sync(value);
    }

    pub fn set_duration(&self, duration_ms: f32) {
        self.duration_ms.set(duration_ms.max(0.0));
    }

    /// Replace the measured track metrics
    pub fn set_geometry(&mut self, geometry: ThumbGeometry) {
        self.geometry = geometry;
    }

    pub fn geometry(&self) -> ThumbGeometry {
        self.geometry
    }

    pub fn travel(&self) -> f32 {
        self.geometry.travel()
    }

    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    pub fn thumb_offset(&self) -> f32 {
        self.progress() * self.travel()
    }

    pub fn track_color(&self) -> Color {
        Color::lerp(&self.off_color, &self.on_color, self.progress())
    }

    pub fn frame(&self) -> SwitchFrame {
        let progress = self.progress();
        let theme = ThemeState::get();
        SwitchFrame {
            checked: self.is_checked(),
            progress,
            thumb_offset: progress * self.travel(),
            track_color: Color::lerp(&self.off_color, &self.on_color, progress),
            opacity: if self.disabled {
                theme.opacity(OpacityToken::Disabled)
            } else {
                theme.opacity(OpacityToken::Enabled)
            },
        }
    }

    pub fn variants(&self) -> VariantSelection {
        VariantSelection::new()
            .flag("checked", self.is_checked())
            .flag("disabled", self.disabled)
    }
}

/// Builder for [`Switch`]
pub struct SwitchBuilder {
    clock: SharedClock,
    value: Option<bool>,
    default_value: bool,
    on_change: Option<ChangeHandler<bool>>,
    disabled: bool,
    duration_ms: Option<f32>,
    geometry: Option<ThumbGeometry>,
    off_color: Option<Color>,
    on_color: Option<Color>,
}

impl SwitchBuilder {
    pub fn new(clock: &SharedClock) -> Self {
        Self {
            clock: Rc::clone(clock),
            value: None,
            default_value: false,
            on_change: None,
            disabled: false,
            duration_ms: None,
            geometry: None,
            off_color: None,
            on_color: None,
        }
    }

    pub fn value(mut self, checked: bool) -> Self {
        self.value = Some(checked);
        self
    }

    pub fn default_value(mut self, checked: bool) -> Self {
        self.default_value = checked;
        self
    }

    pub fn on_change<F: Fn(bool) + 'static>(mut self, f: F) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn geometry(mut self, geometry: ThumbGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Track metrics read from resolved styles
    ///
    /// Any metric the styles leave out uses the stock fallback (52 / 24 / 4).
    pub fn metrics(
        mut self,
        track_width: Option<f32>,
        thumb_width: Option<f32>,
        horizontal_padding: Option<f32>,
    ) -> Self {
        self.geometry = Some(ThumbGeometry::new(
            track_width.unwrap_or(SwitchDefaults::FALLBACK_TRACK_WIDTH),
            thumb_width.unwrap_or(SwitchDefaults::FALLBACK_THUMB_WIDTH),
            horizontal_padding.unwrap_or(SwitchDefaults::FALLBACK_PADDING),
        ));
        self
    }

    /// Track colors for off and on
    pub fn track_colors(mut self, off: Color, on: Color) -> Self {
        self.off_color = Some(off);
        self.on_color = Some(on);
        self
    }

    pub fn build(self) -> Switch {
        let theme = ThemeState::get();
        let defaults = theme.defaults().switch;

        let value = ControlledValue::from_props(self.value, self.default_value, self.on_change);
        let duration_ms = Rc::new(Cell::new(
            self.duration_ms.unwrap_or(defaults.duration_ms).max(0.0),
        ));
        let progress = Rc::new(Animator::new(
            &self.clock,
            if value.get() { 1.0 } else { 0.0 },
        ));

        let weak = Rc::downgrade(&progress);
        let duration = Rc::clone(&duration_ms);
        value.subscribe(move |checked| {
            if let Some(progress) = weak.upgrade() {
                progress.drive(if *checked { 1.0 } else { 0.0 }, duration.get());
            }
        });

        Switch {
            value,
            progress,
            duration_ms,
            geometry: self.geometry.unwrap_or_else(|| {
                ThumbGeometry::new(
                    defaults.track_width,
                    defaults.thumb_width,
                    defaults.horizontal_padding,
                )
            }),
            disabled: self.disabled,
            off_color: self
                .off_color
                .unwrap_or_else(|| theme.color(ColorToken::Input)),
            on_color: self
                .on_color
                .unwrap_or_else(|| theme.color(ColorToken::Primary)),
        }
    }
}

/// Create a switch
pub fn switch(clock: &SharedClock) -> SwitchBuilder {
    SwitchBuilder::new(clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_animation::FrameClock;

    fn settle(clock: &SharedClock) {
        for _ in 0..30 {
            clock.borrow_mut().tick(16.0);
        }
    }

    #[test]
    fn test_initial_progress_matches_value() {
        let clock = FrameClock::shared();
        let on = switch(&clock).default_value(true).build();
        let off = switch(&clock).build();

        assert_eq!(on.progress(), 1.0);
        assert_eq!(off.progress(), 0.0);
        assert!(!clock.borrow().has_active_animations());
    }

    #[test]
    fn test_press_animates_thumb_across_travel() {
        let clock = FrameClock::shared();
        let toggle = switch(&clock)
            .geometry(ThumbGeometry::new(52.0, 24.0, 4.0))
            .duration(180.0)
            .build();

        assert!(toggle.press());
        assert!(toggle.is_checked());
        clock.borrow_mut().tick(90.0);
        let mid = toggle.thumb_offset();
        assert!(mid > 0.0 && mid < 20.0);

        settle(&clock);
        assert_eq!(toggle.thumb_offset(), 20.0);
        assert_eq!(toggle.frame().progress, 1.0);
    }

    #[test]
    fn test_missing_metrics_use_fallbacks() {
        let clock = FrameClock::shared();
        let toggle = switch(&clock).metrics(None, None, None).build();
        assert_eq!(toggle.travel(), 20.0);

        let narrow = switch(&clock).metrics(Some(20.0), None, None).build();
        assert_eq!(narrow.travel(), 0.0);
    }

    #[test]
    fn test_disabled_ignores_press() {
        let clock = FrameClock::shared();
        let toggle = switch(&clock).disabled(true).build();

        assert!(!toggle.press());
        assert!(!toggle.handle_event(&UiEvent::Press));
        assert!(!toggle.is_checked());
        assert!(toggle.variants().is_set("disabled"));
        assert_eq!(toggle.frame().opacity, 0.5);
    }

    #[test]
    fn test_track_color_follows_progress() {
        let clock = FrameClock::shared();
        let toggle = switch(&clock)
            .track_colors(Color::BLACK, Color::WHITE)
            .duration(0.0)
            .build();

        assert_eq!(toggle.track_color(), Color::BLACK);
        toggle.press();
        assert_eq!(toggle.track_color(), Color::WHITE);
    }

    #[test]
    fn test_rapid_toggling_stays_continuous() {
        let clock = FrameClock::shared();
        let toggle = switch(&clock)
            .geometry(ThumbGeometry::new(52.0, 24.0, 4.0))
            .track_colors(Color::BLACK, Color::WHITE)
            .duration(200.0)
            .build();

        let sample = |toggle: &Switch| {
            let color = toggle.track_color();
            (toggle.progress(), toggle.thumb_offset(), [color.r, color.g, color.b])
        };
        let mut samples = vec![sample(&toggle)];

        toggle.press();
        for frame in 0..40 {
            // Reverse twice while the thumb is still travelling.
            if frame == 5 || frame == 9 {
                let before = sample(&toggle);
                toggle.press();
                assert_eq!(sample(&toggle), before);
            }
            clock.borrow_mut().tick(16.0);
            samples.push(sample(&toggle));
        }

        for (progress, offset, channels) in &samples {
            assert!((0.0..=1.0).contains(progress));
            assert!((0.0..=20.0).contains(offset));
            assert!(channels.iter().all(|c| (0.0..=1.0).contains(c)));
        }
        for pair in samples.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!((b.0 - a.0).abs() <= 0.2);
            assert!((b.1 - a.1).abs() <= 4.0);
            assert!(a.2.iter().zip(&b.2).all(|(x, y)| (y - x).abs() <= 0.2));
        }

        // Three presses leave it checked and settled.
        assert!(toggle.is_checked());
        assert_eq!(toggle.progress(), 1.0);
    }

    #[test]
    fn test_controlled_switch_animates_on_sync_only() {
        let clock = FrameClock::shared();
        let toggle = switch(&clock).value(false).duration(0.0).build();

        toggle.press();
        assert_eq!(toggle.progress(), 0.0);

        toggle.sync_value(Some(true));
        assert_eq!(toggle.progress(), 1.0);
    }
}
