//! Property tests for the solver's structural invariants.
//!
//! Random instances and seeds drive the properties the solver promises:
//! capacity and load bookkeeping, point coverage without duplication,
//! feasibility closure of the neighbor operator, and monotone best cost
//! across solve calls.

use cvrp_anneal::{build_initial, swap_neighbor, AnnealConfig, Annealer, Point, Solution};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn arb_point() -> impl Strategy<Value = Point> {
    (-100.0f64..100.0, -100.0f64..100.0, 0i32..=20)
        .prop_map(|(x, y, demand)| Point::new(x, y, demand))
}

fn arb_instance() -> impl Strategy<Value = (Vec<Point>, usize, i32)> {
    (
        proptest::collection::vec(arb_point(), 0..40),
        1usize..6,
        10i32..60,
    )
}

/// Exact-value key for multiset comparison of points.
fn point_key(p: &Point) -> (u64, u64, i32) {
    (p.x.to_bits(), p.y.to_bits(), p.demand)
}

fn sorted_keys<'a, I: Iterator<Item = &'a Point>>(points: I) -> Vec<(u64, u64, i32)> {
    let mut keys: Vec<_> = points.map(point_key).collect();
    keys.sort_unstable();
    keys
}

fn solution_keys(solution: &Solution) -> Vec<(u64, u64, i32)> {
    sorted_keys(solution.vehicles().iter().flat_map(|v| v.route()))
}

fn assert_loads_consistent(solution: &Solution) {
    for v in solution.vehicles() {
        let demand_sum: i32 = v.route().iter().map(|p| p.demand).sum();
        assert_eq!(v.load(), demand_sum, "load must equal route demand sum");
        assert!(v.load() <= v.capacity(), "load must stay within capacity");
    }
}

proptest! {
    #[test]
    fn construction_respects_capacity_and_covers_points(
        (points, fleet, capacity) in arb_instance(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let built = build_initial(&points, fleet, capacity, &mut rng);

        assert_loads_consistent(&built.solution);

        // Every input point lands in exactly one route or in the
        // unassigned list; nothing is duplicated or lost.
        let mut placed = solution_keys(&built.solution);
        placed.extend(built.unassigned.iter().map(point_key));
        placed.sort_unstable();
        prop_assert_eq!(placed, sorted_keys(points.iter()));
    }

    #[test]
    fn neighbor_is_feasibility_closed(
        (points, fleet, capacity) in arb_instance(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let built = build_initial(&points, fleet, capacity, &mut rng);
        let before = solution_keys(&built.solution);

        let mut current = built.solution;
        for _ in 0..50 {
            current = swap_neighbor(&current, &mut rng);
            assert_loads_consistent(&current);
        }
        prop_assert_eq!(solution_keys(&current), before);
    }

    #[test]
    fn best_cost_is_monotone_across_runs(
        (points, fleet, capacity) in arb_instance(),
        seed in any::<u64>(),
    ) {
        let depot = Point::depot(0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(seed);
        let built = build_initial(&points, fleet, capacity, &mut rng);
        let initial_cost = built.solution.total_distance(&depot);

        let config = AnnealConfig::default()
            .with_seed(seed)
            .with_iterations_per_call(200);
        let mut annealer = Annealer::new(built.solution, depot, config).unwrap();

        let mut previous = initial_cost;
        for _ in 0..3 {
            annealer.run();
            prop_assert!(annealer.best_cost() <= previous);
            previous = annealer.best_cost();
        }

        assert_loads_consistent(annealer.best());
    }
}
