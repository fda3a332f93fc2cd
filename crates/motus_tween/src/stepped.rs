//! Delta-driven tweens
//!
//! A [`SteppedTween`] carries no clock. The caller feeds it elapsed-time
//! deltas once per step and reads the fresh value back from the same call,
//! which suits fixed-timestep loops where one owner advances everything.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::trace;

use crate::easing::Style;
use crate::period::Period;
use crate::sample::sample;

/// A push-based tween: advance it explicitly, get the sampled value back.
///
/// Same easing and period math as [`Tween`](crate::Tween) over an internal
/// elapsed-seconds accumulator. [`advance`](Self::advance) returns the sample
/// by value; the caller assigns it wherever it belongs.
#[derive(Clone, Debug)]
pub struct SteppedTween {
    start: f64,
    finish: f64,
    /// Seconds from start value to finish value
    duration: f64,
    style: Style,
    period: Period,
    /// Accumulated virtual seconds fed in via `advance`
    elapsed: f64,
    rng: SmallRng,
}

impl SteppedTween {
    /// Create a linear one-shot tween at zero elapsed time.
    pub fn new(start: f64, finish: f64, duration_secs: f64) -> Self {
        Self {
            start,
            finish,
            duration: duration_secs,
            style: Style::default(),
            period: Period::default(),
            elapsed: 0.0,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Builder: set the easing style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Builder: set the period mode
    pub fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Builder: seed the RNG behind [`Style::Random`] deterministically
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Set the easing style (mutating)
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Set the period mode (mutating)
    pub fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    /// Set the duration in seconds (mutating)
    pub fn set_duration(&mut self, duration_secs: f64) {
        self.duration = duration_secs;
    }

    /// Place the accumulator at an arbitrary elapsed reading
    pub fn set_elapsed(&mut self, secs: f64) {
        self.elapsed = secs;
    }

    /// Reseed the RNG behind [`Style::Random`] (mutating)
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Current easing style
    pub fn style(&self) -> Style {
        self.style
    }

    /// Current period mode
    pub fn period(&self) -> Period {
        self.period
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Accumulated elapsed seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance the accumulator by `dt` seconds and return the fresh sample.
    ///
    /// Negative deltas rewind; the period modes stay well-defined either way.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed += dt;
        self.value()
    }

    /// Sample at the current accumulator without advancing it.
    pub fn value(&mut self) -> f64 {
        sample(
            self.style,
            self.period,
            self.start,
            self.finish,
            self.duration,
            self.elapsed,
            &mut self.rng,
        )
    }

    /// Zero the accumulator.
    pub fn reset(&mut self) {
        trace!(style = ?self.style, period = ?self.period, "SteppedTween::reset");
        self.elapsed = 0.0;
    }
}
