//! Motus Tween Engine
//!
//! Closed-form interpolation between two values over time, driven either by a
//! virtual clock or by explicit per-frame deltas.
//!
//! # Features
//!
//! - **Easing Styles**: constant, linear, quadratic, sinusoidal, circular,
//!   and uniform-random sampling
//! - **Period Modes**: one-shot clamp, ping-pong, and wrap-around repetition
//! - **Two Drive Modes**: [`Tween`] samples a pausable [`VirtualClock`]
//!   whenever asked; [`SteppedTween`] accumulates caller-supplied deltas
//!
//! [`VirtualClock`]: motus_core::VirtualClock
//!
//! # Example
//!
//! ```rust
//! use motus_tween::{Period, SteppedTween, Style};
//!
//! let mut radius = SteppedTween::new(0.0, 100.0, 2.0)
//!     .with_style(Style::Linear)
//!     .with_period(Period::Single);
//!
//! assert_eq!(radius.advance(1.0), 50.0);
//! assert_eq!(radius.advance(1.0), 100.0);
//! // Past the end a one-shot tween clamps to the finish value
//! assert_eq!(radius.advance(1.0), 100.0);
//! ```

pub mod easing;
pub mod period;
pub mod stepped;
pub mod tween;

mod sample;

pub use easing::Style;
pub use period::Period;
pub use stepped::SteppedTween;
pub use tween::Tween;
