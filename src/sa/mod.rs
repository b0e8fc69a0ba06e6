//! Simulated Annealing (SA) over tours.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Each iteration derives a candidate tour by swapping
//! two positions, accepts it with a temperature-scaled probability computed
//! in fitness space, and cools the temperature geometrically. Worsening
//! moves are accepted early on, letting the search escape local optima.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod fitness;
mod runner;

pub use config::SaConfig;
pub use fitness::{acceptance_probability, FitnessFn, InverseSquare};
pub use runner::{SaResult, SaRunner};
