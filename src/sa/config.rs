//! Annealing configuration.

use crate::error::SolverError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a Simulated Annealing run.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(5.0)
///     .with_iterations(200)
///     .with_seed(42);
/// assert_eq!(config.iterations, 200);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values tolerate worse candidates longer.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied every iteration:
    /// `T_{k+1} = factor * T_k`.
    ///
    /// The default 0.75 is aggressive: by iteration ~40 the temperature is
    /// near zero and worsening moves are almost never accepted.
    pub cooling_factor: f64,

    /// Number of proposal iterations to run. Exactly this many candidates
    /// are evaluated; 0 is legal and returns the initial tour untouched.
    pub iterations: usize,

    /// Random seed for reproducibility. `None` draws fresh entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 5.0,
            cooling_factor: 0.75,
            iterations: 1000,
            seed: None,
        }
    }
}

impl SaConfig {
    /// Sets the initial temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the geometric cooling factor.
    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    /// Sets the iteration budget.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.initial_temperature > 0.0) {
            return Err(SolverError::InvalidTemperature(self.initial_temperature));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(SolverError::InvalidCoolingFactor(self.cooling_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 5.0).abs() < 1e-12);
        assert!((config.cooling_factor - 0.75).abs() < 1e-12);
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_non_positive_temperature() {
        let config = SaConfig::default().with_initial_temperature(0.0);
        assert_eq!(config.validate(), Err(SolverError::InvalidTemperature(0.0)));
    }

    #[test]
    fn test_validate_nan_temperature() {
        let config = SaConfig::default().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_cooling_factor_bounds() {
        for bad in [0.0, 1.0, 1.5, -0.2] {
            let config = SaConfig::default().with_cooling_factor(bad);
            assert_eq!(
                config.validate(),
                Err(SolverError::InvalidCoolingFactor(bad))
            );
        }
    }

    #[test]
    fn test_zero_iterations_is_valid() {
        assert!(SaConfig::default().with_iterations(0).validate().is_ok());
    }
}
