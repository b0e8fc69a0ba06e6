//! SA execution loop.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use super::fitness::{acceptance_probability, FitnessFn};
use crate::error::SolverError;
use crate::point::Point;
use crate::tour::Tour;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best tour found.
    pub best: Tour,

    /// Total distance of the candidate proposed at each iteration, in
    /// chronological order. One entry per iteration.
    ///
    /// Rejected candidates are recorded too: this is a trace of what the
    /// search proposed, not of the accepted state.
    pub trace: Vec<f64>,

    /// Number of iterations whose candidate replaced the current tour.
    pub accepted_moves: usize,

    /// Temperature when the iteration budget ran out.
    pub final_temperature: f64,
}

/// Executes the Simulated Annealing search over a point set.
pub struct SaRunner;

impl SaRunner {
    /// Runs the annealing loop and returns the best tour found plus the
    /// proposal trace.
    ///
    /// The input order is shuffled before the first tour is built, so the
    /// search inherits no bias from the caller's ordering. Exactly
    /// `config.iterations` candidates are proposed; there is no early
    /// termination. Runs with the same points, fitness, config, and seed
    /// produce bit-identical results.
    ///
    /// # Errors
    ///
    /// Fails fast with [`SolverError`] when fewer than two points are
    /// supplied or the config is invalid; no partial results are returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_anneal::point::Point;
    /// use tsp_anneal::sa::{InverseSquare, SaConfig, SaRunner};
    ///
    /// let points = vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(0.0, 1.0),
    /// ];
    /// let config = SaConfig::default().with_iterations(200).with_seed(42);
    /// let result = SaRunner::run(&points, &InverseSquare::default(), &config).unwrap();
    ///
    /// assert!(result.best.total_distance() <= 4.05);
    /// assert_eq!(result.trace.len(), 200);
    /// ```
    pub fn run<F: FitnessFn>(
        points: &[Point],
        fitness: &F,
        config: &SaConfig,
    ) -> Result<SaResult, SolverError> {
        config.validate()?;
        if points.len() < 2 {
            return Err(SolverError::TooFewPoints(points.len()));
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut shuffled = points.to_vec();
        shuffled.shuffle(&mut rng);

        let n = shuffled.len();
        let mut current = Tour::new(shuffled);
        let mut best = current.clone();
        let mut temperature = config.initial_temperature;
        let mut trace = Vec::with_capacity(config.iterations);
        let mut accepted_moves = 0usize;

        for _ in 0..config.iterations {
            // Indices are drawn with replacement; i == j is a legal no-op
            // proposal.
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            let candidate = current.with_swapped(i, j);
            let candidate_distance = candidate.total_distance();

            let h_cur = fitness.score(current.total_distance());
            let h_prop = fitness.score(candidate_distance);
            let p = acceptance_probability(h_cur, h_prop, temperature);

            if rng.random_range(0.0..1.0) < p {
                current = candidate;
                accepted_moves += 1;
            }

            temperature *= config.cooling_factor;

            // The candidate's distance goes into the trace whether or not
            // it was accepted.
            trace.push(candidate_distance);

            if fitness.score(best.total_distance()) < fitness.score(current.total_distance()) {
                best = current.clone();
            }
        }

        Ok(SaResult {
            best,
            trace,
            accepted_moves,
            final_temperature: temperature,
        })
    }
}
