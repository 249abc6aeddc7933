//! Kinetic Animation System
//!
//! Timing curves, repeating animations, and the frame clock that drives them.
//!
//! # Features
//!
//! - **Timing animations**: eased interpolation toward a target over a fixed duration
//! - **Retargeting**: a new target starts from the in-flight value, never from zero
//! - **Loops**: repeating sequences for spinners, pulses, and shimmer
//! - **Frame clock**: one shared clock steps every registered animation per frame
//! - **Travel geometry**: thumb travel for toggle tracks
//!
//! # Example
//!
//! ```rust
//! use kinetic_animation::{Animator, FrameClock};
//!
//! let clock = FrameClock::shared();
//! let progress = Animator::new(&clock, 0.0);
//!
//! progress.drive(1.0, 180.0);
//! for _ in 0..12 {
//!     clock.borrow_mut().tick(16.0);
//! }
//! assert_eq!(progress.value(), 1.0);
//! ```

pub mod clock;
pub mod easing;
pub mod looping;
pub mod timing;
pub mod travel;

pub use clock::{Animator, FrameClock, LoopHandle, LoopId, SharedClock, TimingId};
pub use easing::Easing;
pub use looping::{LoopAnimation, LoopSegment};
pub use timing::TimingAnimation;
pub use travel::{compute_travel, ThumbGeometry};
