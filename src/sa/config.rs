//! Solver configuration and cooling schedules.

use thiserror::Error;

/// Cooling schedule for temperature reduction.
///
/// Both schedules are strictly decreasing recurrences in the temperature
/// and are well-defined at every iteration index, including the first.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// Most widely used. Typical `alpha`: 0.95–0.99.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T. Has a convergence proof.
    ///
    /// Reference: Lundy & Mees (1986)
    LundyMees {
        /// Cooling parameter. Typically `(T_0 - T_min) / (max_iter * T_0 * T_min)`.
        beta: f64,
    },
}

impl CoolingSchedule {
    /// Applies one cooling step to `temperature`.
    pub fn next(&self, temperature: f64) -> f64 {
        match *self {
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

/// Invalid [`AnnealConfig`] parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `initial_temperature` was zero or negative.
    #[error("initial_temperature must be positive, got {0}")]
    NonPositiveTemperature(f64),

    /// `min_temperature` was zero or negative.
    #[error("min_temperature must be positive, got {0}")]
    NonPositiveMinTemperature(f64),

    /// `min_temperature` did not leave room below `initial_temperature`.
    #[error("min_temperature {min} must be less than initial_temperature {initial}")]
    MinAboveInitial {
        /// The configured minimum temperature.
        min: f64,
        /// The configured initial temperature.
        initial: f64,
    },

    /// Geometric cooling factor outside (0, 1).
    #[error("geometric alpha must be in (0, 1), got {0}")]
    InvalidAlpha(f64),

    /// Lundy-Mees parameter was zero or negative.
    #[error("lundy-mees beta must be positive, got {0}")]
    InvalidBeta(f64),

    /// `iterations_per_call` was zero.
    #[error("iterations_per_call must be at least 1")]
    ZeroIterations,
}

/// Configuration for the annealing solver.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::{AnnealConfig, CoolingSchedule};
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.98 })
///     .with_iterations_per_call(20_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Temperature floor. The schedule is clamped here so the acceptance
    /// probability `exp(-delta / T)` stays defined for the whole run.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Number of Metropolis steps executed by each solve call. The budget
    /// is the sole termination condition; there is no early exit.
    pub iterations_per_call: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 1e-6,
            cooling: CoolingSchedule::default(),
            iterations_per_call: 10_000,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_iterations_per_call(mut self, n: usize) -> Self {
        self.iterations_per_call = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_temperature <= 0.0 {
            return Err(ConfigError::NonPositiveTemperature(self.initial_temperature));
        }
        if self.min_temperature <= 0.0 {
            return Err(ConfigError::NonPositiveMinTemperature(self.min_temperature));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(ConfigError::MinAboveInitial {
                min: self.min_temperature,
                initial: self.initial_temperature,
            });
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if alpha <= 0.0 || alpha >= 1.0 {
                    return Err(ConfigError::InvalidAlpha(alpha));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if beta <= 0.0 {
                    return Err(ConfigError::InvalidBeta(beta));
                }
            }
        }
        if self.iterations_per_call == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}
