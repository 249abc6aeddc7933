//! Easing functions for animations
//!
//! The built-in curves map `0.0..=1.0` onto `0.0..=1.0` and are monotonic, so
//! an interpolation using them never leaves the segment between its endpoints.
//! A custom [`Easing::CubicBezier`] whose control points leave `0.0..=1.0` on
//! the y axis overshoots.

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// React Native's `Easing.ease`, `cubic-bezier(0.42, 0, 1, 1)`
    /// (CSS `ease` is a different curve)
    Ease,
    EaseInQuad,
    EaseOutQuad,
    /// Default curve for timing animations
    #[default]
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    /// `cubic-bezier(x1, y1, x2, y2)`; may overshoot when `y1`/`y2` leave `0..=1`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value; input is clamped to `0.0..=1.0`
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match *self {
            Easing::Linear => t,
            Easing::Ease => cubic_bezier(t, 0.42, 0.0, 1.0, 1.0),
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }

    /// Upper bound of the curve's slope, used to bound per-frame steps
    pub fn max_slope(&self) -> f32 {
        match self {
            Easing::Linear => 1.0,
            Easing::EaseInQuad | Easing::EaseOutQuad | Easing::EaseInOutQuad => 2.0,
            Easing::EaseInCubic | Easing::EaseOutCubic | Easing::EaseInOutCubic => 3.0,
            // Bezier slopes depend on the control points; sample them.
            Easing::Ease | Easing::CubicBezier(..) => {
                let steps = 200;
                (0..steps)
                    .map(|i| {
                        let a = i as f32 / steps as f32;
                        let b = (i + 1) as f32 / steps as f32;
                        (self.apply(b) - self.apply(a)) * steps as f32
                    })
                    .fold(0.0_f32, |acc, s| acc.max(s.abs()))
            }
        }
    }
}

/// Cubic bezier easing: solve `x(p) = t` for `p`, return `y(p)`.
///
/// Newton-Raphson first, bisection when the slope flattens. Computed in f64.
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = x;
    for _ in 0..8 {
        let err = sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return sample(p, y1, y2) as f32;
        }
        let slope = slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p = (p - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = x;
    for _ in 0..30 {
        let val = sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    sample(p, y1, y2) as f32
}

/// B(p) = 3(1-p)^2 p c1 + 3(1-p) p^2 c2 + p^3
#[inline]
fn sample(p: f64, c1: f64, c2: f64) -> f64 {
    let a = 1.0 - 3.0 * c2 + 3.0 * c1;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    ((a * p + b) * p + c) * p
}

#[inline]
fn slope(p: f64, c1: f64, c2: f64) -> f64 {
    let a = 1.0 - 3.0 * c2 + 3.0 * c1;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    (3.0 * a * p + 2.0 * b) * p + c
}
