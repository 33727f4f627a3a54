//! Simulated-annealing search for the CVRP.
//!
//! A single-solution trajectory metaheuristic: randomized first-fit
//! construction builds a feasible starting solution, then the annealer
//! repeatedly perturbs it with capacity-respecting swaps, accepting
//! worsening moves with a probability that decreases over time
//! (temperature) to escape local optima.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod annealer;
mod config;
mod construction;
mod neighbor;

pub use annealer::{AnnealStats, Annealer, Phase};
pub use config::{AnnealConfig, ConfigError, CoolingSchedule};
pub use construction::{build_initial, Construction};
pub use neighbor::swap_neighbor;
