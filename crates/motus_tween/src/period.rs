//! Period modes for tweens

/// Playback period for a tween
///
/// Decides what happens once elapsed time runs past the duration: clamp to
/// the endpoints, ping-pong between them, or wrap back to the start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    /// Play once; clamp to the endpoints outside `[0, duration]`
    #[default]
    Single,
    /// Ping-pong: forward over one duration, mirrored back over the next
    BackAndForth,
    /// Wrap: restart from the beginning every duration
    WrapAround,
}

impl Period {
    /// Leg-adjusted progress fraction (0.0 to 1.0) for `elapsed` seconds over
    /// a positive `duration`.
    ///
    /// The periodic modes fold elapsed time with a mathematical modulus, so
    /// negative elapsed (a clock running backwards) stays on the same cycle
    /// rather than producing negative fractions. On the return leg of
    /// `BackAndForth` the fraction runs from 1.0 back down to 0.0, which
    /// mirrors whatever easing shape is applied on top.
    pub fn progress(&self, elapsed: f64, duration: f64) -> f64 {
        match self {
            Period::Single => (elapsed / duration).clamp(0.0, 1.0),
            Period::BackAndForth => {
                let t = elapsed.rem_euclid(2.0 * duration);
                if t >= duration {
                    1.0 - (t - duration) / duration
                } else {
                    t / duration
                }
            }
            Period::WrapAround => elapsed.rem_euclid(duration) / duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_clamps() {
        assert_eq!(Period::Single.progress(-1.0, 2.0), 0.0);
        assert_eq!(Period::Single.progress(0.0, 2.0), 0.0);
        assert_eq!(Period::Single.progress(1.0, 2.0), 0.5);
        assert_eq!(Period::Single.progress(2.0, 2.0), 1.0);
        assert_eq!(Period::Single.progress(5.0, 2.0), 1.0);
    }

    #[test]
    fn test_wrap_around_is_periodic() {
        assert_eq!(Period::WrapAround.progress(4.0, 4.0), 0.0);
        assert_eq!(Period::WrapAround.progress(6.0, 4.0), 0.5);
        assert_eq!(
            Period::WrapAround.progress(1.0, 4.0),
            Period::WrapAround.progress(9.0, 4.0)
        );
    }

    #[test]
    fn test_back_and_forth_mirrors() {
        let d = 2.0;
        for x in [0.0, 0.25, 0.5, 1.0, 1.75] {
            assert_eq!(
                Period::BackAndForth.progress(d + x, d),
                Period::BackAndForth.progress(d - x, d),
                "mirror at x = {x}"
            );
        }
        // Full cycle lands back at the start
        assert_eq!(Period::BackAndForth.progress(2.0 * d, d), 0.0);
    }

    #[test]
    fn test_negative_elapsed_stays_on_cycle() {
        // -1s into a 4s wrap is the same as 3s in
        assert_eq!(Period::WrapAround.progress(-1.0, 4.0), 0.75);
        // -0.5s into a 2s ping-pong is 3.5s into the 4s cycle: late return leg
        let p = Period::BackAndForth.progress(-0.5, 2.0);
        assert!((p - 0.25).abs() < 1e-12);
    }
}
