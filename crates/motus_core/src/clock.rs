//! Virtual clocks
//!
//! A [`VirtualClock`] measures elapsed time the way an animation wants it
//! measured: it can be paused without losing what it already counted, run
//! faster or slower than wall time (including backwards, with a negative
//! rate), and be rebased to an arbitrary reading. All readings are `f64`
//! seconds; sub-millisecond precision comes for free from
//! [`Instant::elapsed`].

use std::time::Instant;

use tracing::debug;

/// A pausable, rate-scalable elapsed-time source.
///
/// The clock accumulates virtual time in segments: whenever the rate changes
/// or the clock pauses, the running segment is folded into an accumulator and
/// the wall-time reference point is rebased. Already-accumulated time is
/// therefore never retroactively rescaled by a rate change.
#[derive(Clone, Debug)]
pub struct VirtualClock {
    /// Wall-time reference point of the current running segment
    origin: Instant,
    /// Virtual seconds folded in from completed segments
    accumulated: f64,
    /// Multiplier applied to wall time in the current segment
    rate: f64,
    running: bool,
}

impl VirtualClock {
    /// Create a clock that is already running at rate 1.0.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            accumulated: 0.0,
            rate: 1.0,
            running: true,
        }
    }

    /// Create a clock that starts paused at zero elapsed time.
    pub fn new_paused() -> Self {
        Self {
            running: false,
            ..Self::new()
        }
    }

    /// Current reading in virtual seconds.
    ///
    /// While running this is the accumulator plus the rate-scaled wall time
    /// of the open segment; while paused it is the accumulator alone.
    pub fn elapsed(&self) -> f64 {
        if self.running {
            self.accumulated + self.origin.elapsed().as_secs_f64() * self.rate
        } else {
            self.accumulated
        }
    }

    /// Current rate multiplier.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Whether the clock is currently accumulating time.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Set the rate multiplier applied to future wall time.
    ///
    /// The open segment is folded at the old rate first, so the change never
    /// rescales time the clock has already counted. Zero and negative rates
    /// are valid; a negative rate makes `elapsed` run backwards.
    pub fn set_rate(&mut self, rate: f64) {
        self.fold_segment();
        self.rate = rate;
    }

    /// Multiply the current rate by `factor`.
    pub fn scale_rate(&mut self, factor: f64) {
        self.fold_segment();
        self.rate *= factor;
    }

    /// Stop accumulating time. No-op if already paused.
    pub fn pause(&mut self) {
        if self.running {
            self.accumulated = self.elapsed();
            self.running = false;
        }
    }

    /// Continue accumulating time from now. No-op if already running.
    pub fn resume(&mut self) {
        if !self.running {
            self.origin = Instant::now();
            self.running = true;
        }
    }

    /// Rebase the reading to `secs`, keeping the running state.
    ///
    /// A running clock continues accumulating from the new base immediately.
    pub fn set_elapsed(&mut self, secs: f64) {
        self.accumulated = secs;
        self.origin = Instant::now();
    }

    /// Zero the clock and return the reading it had just before.
    ///
    /// The rate is kept. `pause_after` decides whether the clock comes out of
    /// the restart paused or running.
    pub fn restart(&mut self, pause_after: bool) -> f64 {
        let before = self.elapsed();
        debug!(before, pause_after, "VirtualClock::restart");
        self.accumulated = 0.0;
        self.origin = Instant::now();
        self.running = !pause_after;
        before
    }

    /// Fold the open running segment into the accumulator and rebase the
    /// reference point. No-op while paused.
    fn fold_segment(&mut self) {
        if self.running {
            self.accumulated = self.elapsed();
            self.origin = Instant::now();
        }
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_clock_holds_its_reading() {
        let mut clock = VirtualClock::new_paused();
        assert_eq!(clock.elapsed(), 0.0);

        clock.set_elapsed(2.5);
        assert_eq!(clock.elapsed(), 2.5);
        // Still paused, still 2.5 no matter how much wall time passes
        assert_eq!(clock.elapsed(), 2.5);
        assert!(!clock.is_running());
    }

    #[test]
    fn pause_is_idempotent() {
        let mut clock = VirtualClock::new_paused();
        clock.set_elapsed(1.0);
        clock.pause();
        clock.pause();
        assert_eq!(clock.elapsed(), 1.0);
    }

    #[test]
    fn zero_rate_freezes_a_running_clock() {
        let mut clock = VirtualClock::new();
        clock.set_rate(0.0);
        clock.set_elapsed(3.0);
        // Running, but wall time contributes nothing at rate 0
        assert!(clock.is_running());
        assert_eq!(clock.elapsed(), 3.0);
    }

    #[test]
    fn rate_change_does_not_rescale_accumulated_time() {
        let mut clock = VirtualClock::new_paused();
        clock.set_elapsed(4.0);
        clock.set_rate(100.0);
        // The 4 seconds were earned at the old rate and must survive as-is
        assert_eq!(clock.elapsed(), 4.0);

        clock.scale_rate(0.0);
        assert_eq!(clock.rate(), 0.0);
        clock.resume();
        assert_eq!(clock.elapsed(), 4.0);
    }

    #[test]
    fn restart_returns_the_prior_reading() {
        let mut clock = VirtualClock::new_paused();
        clock.set_elapsed(7.25);

        let before = clock.restart(true);
        assert_eq!(before, 7.25);
        assert_eq!(clock.elapsed(), 0.0);
        assert!(!clock.is_running());

        clock.set_elapsed(1.0);
        let before = clock.restart(false);
        assert_eq!(before, 1.0);
        assert!(clock.is_running());
    }

    #[test]
    fn resume_does_not_count_the_paused_gap() {
        let mut clock = VirtualClock::new();
        clock.pause();
        let at_pause = clock.elapsed();

        // Any wall time spent here must not show up in the reading
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert_eq!(clock.elapsed(), at_pause);

        clock.resume();
        let resumed = clock.elapsed();
        assert!(resumed >= at_pause);
        assert!(resumed - at_pause < 0.5, "resume must not replay the gap");
    }

    #[test]
    fn negative_rate_runs_backwards() {
        let mut clock = VirtualClock::new_paused();
        clock.set_elapsed(10.0);
        clock.set_rate(-1.0);
        clock.resume();
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert!(clock.elapsed() < 10.0);
    }
}
