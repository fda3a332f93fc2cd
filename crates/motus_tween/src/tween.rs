//! Clock-driven tweens
//!
//! A [`Tween`] owns a [`VirtualClock`] and computes its value on demand from
//! whatever the clock currently reads. There is no per-frame bookkeeping:
//! pause, rate changes, and rebasing all happen on the clock, and the value
//! follows.

use motus_core::VirtualClock;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::trace;

use crate::easing::Style;
use crate::period::Period;
use crate::sample::sample;

/// A pull-based tween: sample it whenever the current value is needed.
///
/// Time advances implicitly through the embedded clock, so two calls to
/// [`value`](Self::value) in a row generally see different elapsed times.
/// For explicit frame-stepped control use
/// [`SteppedTween`](crate::SteppedTween) instead.
#[derive(Clone, Debug)]
pub struct Tween {
    clock: VirtualClock,
    start: f64,
    finish: f64,
    /// Seconds from start value to finish value
    duration: f64,
    style: Style,
    period: Period,
    rng: SmallRng,
}

impl Tween {
    /// Create a linear one-shot tween with its clock already running.
    pub fn new(start: f64, finish: f64, duration_secs: f64) -> Self {
        Self {
            clock: VirtualClock::new(),
            start,
            finish,
            duration: duration_secs,
            style: Style::default(),
            period: Period::default(),
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

    // =========================================================================
    // Mutating setters (for post-construction configuration)
    // =========================================================================

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

    /// Rebase the clock to an arbitrary elapsed reading
    pub fn set_elapsed(&mut self, secs: f64) {
        self.clock.set_elapsed(secs);
    }

    /// Set the clock's rate multiplier (2.0 plays twice as fast, 0.0 freezes)
    pub fn set_time_scale(&mut self, scale: f64) {
        self.clock.set_rate(scale);
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

    /// Current elapsed reading of the embedded clock, in seconds
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Current clock rate multiplier
    pub fn time_scale(&self) -> f64 {
        self.clock.rate()
    }

    /// Stop the clock; the value holds until [`resume`](Self::resume)
    pub fn pause(&mut self) {
        self.clock.pause();
    }

    /// Let the clock run again from where it stopped
    pub fn resume(&mut self) {
        self.clock.resume();
    }

    /// Sample the tween at the clock's current elapsed time.
    ///
    /// Takes `&mut self` because [`Style::Random`] draws a fresh value from
    /// the engine-owned RNG on every call; the closed-form styles leave the
    /// RNG untouched.
    pub fn value(&mut self) -> f64 {
        sample(
            self.style,
            self.period,
            self.start,
            self.finish,
            self.duration,
            self.clock.elapsed(),
            &mut self.rng,
        )
    }

    /// Rewind to zero elapsed time, preserving the running/paused state.
    pub fn reset(&mut self) {
        trace!(style = ?self.style, period = ?self.period, "Tween::reset");
        let keep_paused = !self.clock.is_running();
        self.clock.restart(keep_paused);
    }
}
