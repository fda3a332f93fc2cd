//! Easing styles for tweens

/// Easing style type
///
/// The shape of the function mapping a progress fraction to an interpolation
/// weight. `Random` is the odd one out: it has no closed form and ignores
/// progress entirely; the engines draw it from their own RNG every sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    /// Always the start value, regardless of progress
    Constant,
    #[default]
    Linear,
    /// Ease-in: p squared
    Quadratic,
    /// Half-cosine ease-in-out
    Sinusoidal,
    /// Upper half-circle: rises to the finish at the midpoint and returns to
    /// the start value at both ends
    Circular,
    /// Uniform draw in `[min(start, finish), max(start, finish))` per sample
    Random,
}

impl Style {
    /// Interpolation weight for a progress fraction (0.0 to 1.0).
    ///
    /// `Random` returns 0.0 here; it is intercepted by the sampler before the
    /// weight is ever used.
    pub fn shape(&self, p: f64) -> f64 {
        match self {
            Style::Constant => 0.0,
            Style::Linear => p,
            Style::Quadratic => p * p,
            Style::Sinusoidal => 0.5 - 0.5 * (std::f64::consts::PI * p).cos(),
            // The inner term can dip a hair below zero from rounding
            Style::Circular => (1.0 - (1.0 - 2.0 * p).powi(2)).max(0.0).sqrt(),
            Style::Random => 0.0,
        }
    }
}
