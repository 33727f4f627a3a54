//! Cross-vehicle swap neighborhood.

use rand::Rng;

use crate::model::Solution;

/// Produces a neighbor of `solution` by swapping one stop between two
/// randomly chosen vehicles.
///
/// Two vehicle slots are drawn uniformly with replacement, then one route
/// position in each. The swap is committed only when both recomputed loads
/// stay within capacity, checked against the pre-swap loads. If either
/// route is empty, or the capacity check fails, the clone is returned
/// unchanged — a legal no-op neighbor, not an error. A feasible input
/// therefore always yields a feasible output.
///
/// A single localized swap keeps each annealing step O(1) relative to
/// solution size; the full-route rescans stay in the cost evaluation.
pub fn swap_neighbor<R: Rng>(solution: &Solution, rng: &mut R) -> Solution {
    let mut neighbor = solution.clone();
    let fleet = neighbor.fleet_size();
    if fleet == 0 {
        return neighbor;
    }

    let vi = rng.random_range(0..fleet);
    let vj = rng.random_range(0..fleet);
    if neighbor.vehicles()[vi].is_empty() || neighbor.vehicles()[vj].is_empty() {
        return neighbor;
    }

    let pi = rng.random_range(0..neighbor.vehicles()[vi].route().len());
    let pj = rng.random_range(0..neighbor.vehicles()[vj].route().len());
    let a = neighbor.vehicles()[vi].route()[pi];
    let b = neighbor.vehicles()[vj].route()[pj];

    if neighbor.vehicles()[vi].can_replace(pi, &b) && neighbor.vehicles()[vj].can_replace(pj, &a) {
        neighbor.vehicles_mut()[vi].replace_at(pi, b);
        neighbor.vehicles_mut()[vj].replace_at(pj, a);
    }
    neighbor
}
