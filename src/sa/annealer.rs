//! Annealing loop and solver state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::{AnnealConfig, ConfigError};
use super::neighbor::swap_neighbor;
use crate::model::{Point, Solution};

/// Best cost is sampled into the history every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Where the solver is in its lifecycle.
///
/// A handle is born `Ready`: construction already seeded the state with an
/// initial solution, so an uninitialized handle cannot exist. Each
/// [`Annealer::run`] call passes through `Running` and parks at
/// `Converged`; running again from `Converged` resumes annealing from the
/// existing current/best state rather than rebuilding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Seeded with the initial solution, no annealing performed yet.
    Ready,
    /// An annealing cycle is executing.
    Running,
    /// The last cycle finished its iteration budget (or was cancelled).
    Converged,
}

/// Counters accumulated across [`Annealer::run`] calls.
#[derive(Debug, Clone)]
pub struct AnnealStats {
    /// Total neighbor evaluations so far.
    pub iterations: usize,
    /// Accepted moves, improvements included.
    pub accepted_moves: usize,
    /// Strictly improving moves.
    pub improving_moves: usize,
    /// Temperature at the end of the last cycle.
    pub final_temperature: f64,
    /// Whether the last cycle was cancelled externally.
    pub cancelled: bool,
    /// Best cost sampled at regular intervals, seeded with the initial
    /// cost. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Simulated-annealing scheduler for one CVRP instance.
///
/// Owns the solver state for the duration of a solve: the current
/// solution and cost, the best solution and cost, the temperature, and
/// the RNG. Solutions are deep-copied into `best` on improvement, so no
/// aliasing exists between current and best, and a finished cycle only
/// ever exposes fully-formed solutions.
///
/// `best_cost` is non-increasing across any sequence of `run` calls;
/// `current_cost` may move uphill to escape local minima.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::{build_initial, AnnealConfig, Annealer, Point};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let depot = Point::depot(0.0, 0.0);
/// let points = vec![
///     Point::new(4.0, 0.0, 3),
///     Point::new(0.0, 4.0, 3),
///     Point::new(-4.0, 0.0, 3),
///     Point::new(0.0, -4.0, 3),
/// ];
/// let mut rng = StdRng::seed_from_u64(42);
/// let built = build_initial(&points, 2, 10, &mut rng);
/// let initial_cost = built.solution.total_distance(&depot);
///
/// let config = AnnealConfig::default().with_seed(42).with_iterations_per_call(2_000);
/// let mut annealer = Annealer::new(built.solution, depot, config).unwrap();
/// let best = annealer.run();
/// assert!(best.total_distance(&depot) <= initial_cost);
/// ```
pub struct Annealer {
    depot: Point,
    config: AnnealConfig,
    rng: StdRng,
    phase: Phase,
    temperature: f64,
    current: Solution,
    current_cost: f64,
    best: Solution,
    best_cost: f64,
    stats: AnnealStats,
}

impl Annealer {
    /// Creates a scheduler seeded with `initial` as both the current and
    /// the best solution.
    pub fn new(initial: Solution, depot: Point, config: AnnealConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let current_cost = initial.total_distance(&depot);
        let best = initial.clone();
        let temperature = config.initial_temperature;
        let stats = AnnealStats {
            iterations: 0,
            accepted_moves: 0,
            improving_moves: 0,
            final_temperature: temperature,
            cancelled: false,
            cost_history: vec![current_cost],
        };

        Ok(Self {
            depot,
            config,
            rng,
            phase: Phase::Ready,
            temperature,
            current: initial,
            current_cost,
            best,
            best_cost: current_cost,
            stats,
        })
    }

    /// Runs one annealing cycle of `iterations_per_call` Metropolis steps
    /// and returns the best solution found so far.
    ///
    /// Safe to call repeatedly: each call continues annealing from the
    /// converged state instead of restarting.
    pub fn run(&mut self) -> &Solution {
        self.run_with_cancel(None)
    }

    /// Runs one annealing cycle with an optional cancellation token
    /// checked at each iteration boundary.
    ///
    /// Cancellation ends the cycle early but still leaves a fully-formed
    /// best solution; [`AnnealStats::cancelled`] records that it happened.
    pub fn run_with_cancel(&mut self, cancel: Option<Arc<AtomicBool>>) -> &Solution {
        self.phase = Phase::Running;
        self.stats.cancelled = false;
        debug!(
            cost = self.current_cost,
            best = self.best_cost,
            temperature = self.temperature,
            "annealing cycle started"
        );

        for _ in 0..self.config.iterations_per_call {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    self.stats.cancelled = true;
                    break;
                }
            }

            self.temperature = self
                .config
                .cooling
                .next(self.temperature)
                .max(self.config.min_temperature);

            let candidate = swap_neighbor(&self.current, &mut self.rng);
            let candidate_cost = candidate.total_distance(&self.depot);
            let delta = candidate_cost - self.current_cost;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                self.stats.improving_moves += 1;
                true
            } else {
                self.rng.random_range(0.0..1.0) < (-delta / self.temperature).exp()
            };

            if accept {
                self.current = candidate;
                self.current_cost = candidate_cost;
                self.stats.accepted_moves += 1;

                if self.current_cost < self.best_cost {
                    self.best = self.current.clone();
                    self.best_cost = self.current_cost;
                    debug!(best = self.best_cost, "new best solution");
                }
            }

            self.stats.iterations += 1;
            if self.stats.iterations.is_multiple_of(HISTORY_INTERVAL) {
                self.stats.cost_history.push(self.best_cost);
            }
        }

        self.stats.final_temperature = self.temperature;
        self.phase = Phase::Converged;
        debug!(
            best = self.best_cost,
            temperature = self.temperature,
            "annealing cycle finished"
        );
        &self.best
    }

    /// The best solution found so far.
    pub fn best(&self) -> &Solution {
        &self.best
    }

    /// Cost of the best solution.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Cost of the current (possibly uphill) solution.
    pub fn current_cost(&self) -> f64 {
        self.current_cost
    }

    /// The current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// The lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Counters accumulated across all cycles.
    pub fn stats(&self) -> &AnnealStats {
        &self.stats
    }
}
