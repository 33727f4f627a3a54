//! Capacitated vehicle routing via simulated annealing.
//!
//! Solves the CVRP: given a depot, a set of demand points, and a fixed
//! fleet of capacity-limited vehicles, assign points to vehicles and
//! order each route to minimize total Euclidean travel distance.
//!
//! The solver is a heuristic, not an exact method: the contract is the
//! best feasible solution found within the iteration budget.
//!
//! # Components
//!
//! - [`model`]: demand points, vehicles with load tracking, and
//!   fixed-fleet solutions with the total-distance objective.
//! - [`sa`]: the search itself — randomized first-fit construction
//!   ([`build_initial`]), the capacity-respecting swap neighborhood
//!   ([`swap_neighbor`]), and the re-entrant [`Annealer`] driving the
//!   Metropolis acceptance loop under a cooling schedule.
//!
//! # Example
//!
//! ```
//! use cvrp_anneal::{build_initial, AnnealConfig, Annealer, Point};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let depot = Point::depot(0.0, 0.0);
//! let points = vec![
//!     Point::new(3.0, 0.0, 4),
//!     Point::new(3.0, 4.0, 4),
//!     Point::new(-2.0, 1.0, 5),
//! ];
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let built = build_initial(&points, 2, 10, &mut rng);
//! assert!(built.unassigned.is_empty());
//! let initial_cost = built.solution.total_distance(&depot);
//!
//! let config = AnnealConfig::default()
//!     .with_seed(7)
//!     .with_iterations_per_call(2_000);
//! let mut annealer = Annealer::new(built.solution, depot, config).unwrap();
//! let best = annealer.run();
//! assert!(best.total_distance(&depot) <= initial_cost);
//! ```
//!
//! # Determinism
//!
//! All randomness (construction shuffle, neighbor draws, acceptance
//! draws) flows through injected or seeded RNGs, so a fixed seed makes a
//! whole solve reproducible.

pub mod model;
pub mod sa;

pub use model::{Point, Solution, Vehicle};
pub use sa::{
    build_initial, swap_neighbor, AnnealConfig, AnnealStats, Annealer, ConfigError, Construction,
    CoolingSchedule, Phase,
};
