//! Fleet-wide solution and total-distance objective.

use super::{Point, Vehicle};

/// A fixed-size fleet of vehicles covering (a subset of) the demand points.
///
/// The fleet size is set at construction and never changes. Every demand
/// point appears in at most one vehicle's route. `Clone` deep-copies every
/// route, so stored snapshots never alias live state.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::{Point, Solution};
///
/// let depot = Point::depot(0.0, 0.0);
/// let sol = Solution::new(3, 50);
/// assert_eq!(sol.fleet_size(), 3);
/// assert_eq!(sol.total_distance(&depot), 0.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    vehicles: Vec<Vehicle>,
}

impl Solution {
    /// Creates a solution of `fleet_size` empty vehicles with uniform
    /// capacity.
    pub fn new(fleet_size: usize, capacity: i32) -> Self {
        Self {
            vehicles: (0..fleet_size).map(|_| Vehicle::new(capacity)).collect(),
        }
    }

    /// The fleet, in stable slot order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Mutable fleet access. The slice form keeps the fleet size fixed.
    pub(crate) fn vehicles_mut(&mut self) -> &mut [Vehicle] {
        &mut self.vehicles
    }

    /// Number of vehicle slots.
    pub fn fleet_size(&self) -> usize {
        self.vehicles.len()
    }

    /// Total number of stops across the fleet.
    pub fn num_stops(&self) -> usize {
        self.vehicles.iter().map(|v| v.route().len()).sum()
    }

    /// Total travel distance over all closed tours. This is the objective
    /// minimized by the solver, reused for initial-solution scoring and
    /// for every candidate evaluation.
    pub fn total_distance(&self, depot: &Point) -> f64 {
        self.vehicles.iter().map(|v| v.route_cost(depot)).sum()
    }
}
