//! Fitness transform and acceptance probability.
//!
//! The search compares tours in transformed "fitness" space (higher is
//! better) rather than on raw distance. The default transform sharpens
//! sensitivity to small distance improvements near the optimum, where raw
//! edge lengths barely move.

/// Maps tour length to a goodness score, larger meaning better.
///
/// Implementations must be monotonic non-increasing in distance so that a
/// shorter tour never scores below a longer one. A blanket impl covers
/// plain closures:
///
/// ```
/// use tsp_anneal::sa::FitnessFn;
///
/// let weight = |d: f64| (100.0 / d).powi(2);
/// assert!(weight.score(30.0) > weight.score(40.0));
/// ```
pub trait FitnessFn {
    /// Scores a tour of the given total distance.
    fn score(&self, distance: f64) -> f64;
}

impl<F: Fn(f64) -> f64> FitnessFn for F {
    fn score(&self, distance: f64) -> f64 {
        self(distance)
    }
}

/// The default fitness transform: `(scale / distance)^2`.
///
/// Squaring amplifies the payoff of small improvements once tours get
/// short. `scale` is a free parameter of the configuration, not a
/// hardcoded constant. An infinite distance (a tour traversing coincident
/// points) scores 0, the worst possible fitness.
#[derive(Debug, Clone, Copy)]
pub struct InverseSquare {
    /// Numerator of the inverse transform.
    pub scale: f64,
}

impl InverseSquare {
    /// Creates the transform with the given scale.
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl Default for InverseSquare {
    fn default() -> Self {
        Self { scale: 100.0 }
    }
}

impl FitnessFn for InverseSquare {
    fn score(&self, distance: f64) -> f64 {
        (self.scale / distance).powi(2)
    }
}

/// Probability of replacing the current tour with a candidate.
///
/// Computes `clamp(exp(-(h_current - h_candidate) / temperature), 0, 1)`.
/// A candidate at least as fit as the current tour makes the exponent
/// non-negative, so the probability saturates at 1; a worse candidate
/// decays exponentially with the fitness gap, scaled inversely by
/// temperature.
pub fn acceptance_probability(h_current: f64, h_candidate: f64, temperature: f64) -> f64 {
    (-(h_current - h_candidate) / temperature).exp().clamp(0.0, 1.0)
}
