//! Shared evaluation core for both tween flavors
//!
//! The clock-driven and delta-driven engines differ only in where elapsed
//! time comes from; the mapping from elapsed time to a value lives here so
//! the formulas exist exactly once.

use rand::Rng;

use crate::easing::Style;
use crate::period::Period;

/// Map elapsed virtual seconds to an interpolated value.
///
/// Total for every input: a non-positive duration short-circuits to the
/// endpoints instead of dividing by zero, and the period transform keeps the
/// progress fraction inside `[0, 1]` for any elapsed value, negative
/// included.
pub(crate) fn sample<R: Rng>(
    style: Style,
    period: Period,
    start: f64,
    finish: f64,
    duration: f64,
    elapsed: f64,
    rng: &mut R,
) -> f64 {
    match style {
        Style::Constant => return start,
        Style::Random => return draw(start, finish, rng),
        _ => {}
    }

    if duration <= 0.0 {
        return if elapsed > 0.0 { finish } else { start };
    }

    let p = period.progress(elapsed, duration);
    start + (finish - start) * style.shape(p)
}

/// Uniform draw in `[min(start, finish), max(start, finish))`.
fn draw<R: Rng>(start: f64, finish: f64, rng: &mut R) -> f64 {
    let (lo, hi) = if start <= finish {
        (start, finish)
    } else {
        (finish, start)
    };
    // gen_range rejects an empty range
    if lo == hi {
        return lo;
    }
    rng.gen_range(lo..hi)
}
