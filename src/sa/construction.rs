//! Randomized first-fit construction of the initial solution.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Point, Solution};

/// Outcome of initial construction: the starting solution plus any points
/// no vehicle could take.
///
/// Unplaceable points are a documented limitation of greedy first-fit, not
/// an error. They are returned here so callers can inspect them instead of
/// discovering silent data loss later.
#[derive(Debug, Clone)]
pub struct Construction {
    /// The feasible starting solution.
    pub solution: Solution,
    /// Points left out because no vehicle could accept them.
    pub unassigned: Vec<Point>,
}

/// Builds a feasible starting solution by randomized first-fit packing.
///
/// The points are shuffled uniformly, then each is appended to the first
/// vehicle (in slot order) with room for it. The shuffle is the sole
/// source of initial-solution variability, so construction is
/// deterministic for a fixed RNG.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::{build_initial, Point};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let points = vec![
///     Point::new(1.0, 0.0, 4),
///     Point::new(0.0, 2.0, 4),
///     Point::new(-3.0, 1.0, 5),
/// ];
/// let mut rng = StdRng::seed_from_u64(7);
/// let built = build_initial(&points, 2, 10, &mut rng);
/// assert!(built.unassigned.is_empty());
/// assert_eq!(built.solution.num_stops(), 3);
/// ```
pub fn build_initial<R: Rng>(
    points: &[Point],
    fleet_size: usize,
    capacity: i32,
    rng: &mut R,
) -> Construction {
    let mut order: Vec<Point> = points.to_vec();
    order.shuffle(rng);

    let mut solution = Solution::new(fleet_size, capacity);
    let mut unassigned = Vec::new();

    for p in order {
        match solution.vehicles().iter().position(|v| v.can_accept(&p)) {
            Some(slot) => solution.vehicles_mut()[slot].append(p),
            None => unassigned.push(p),
        }
    }

    Construction {
        solution,
        unassigned,
    }
}
