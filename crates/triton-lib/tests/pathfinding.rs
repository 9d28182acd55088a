mod common;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use common::GalaxyBuilder;
use triton_lib::{
    find_path, find_path_in, plan_route, Error, Galaxy, GraphMode, LiveRange, Neighbourhood,
    PathOptions, RouteRequest, StarId, TravelGraph,
};

/// Propulsion 1 (0.5 raw units). The only way from 1 to 4 is through the
/// rival's star 3.
fn foreign_wall() -> Galaxy {
    GalaxyBuilder::new(1)
        .own(1, "0", "0")
        .own(2, "0.5", "0")
        .foreign(3, "1.0", "0")
        .own(4, "1.5", "0")
        .build()
}

/// Goal 3 is reachable either straight through the rival's star 2 or via a
/// friendly detour 4 -> 5.
fn detour() -> Galaxy {
    GalaxyBuilder::new(1)
        .own(1, "0", "0")
        .foreign(2, "0.5", "0")
        .own(3, "1.0", "0")
        .own(4, "0.25", "0.4")
        .own(5, "0.75", "0.4")
        .build()
}

#[test]
fn same_start_and_goal_is_an_empty_route() {
    let galaxy = foreign_wall();
    assert!(find_path(&galaxy, 2, 2, &PathOptions::default())
        .unwrap()
        .is_empty());
    assert!(find_path(&galaxy, 2, 2, &PathOptions::crossing(2.0))
        .unwrap()
        .is_empty());
}

#[test]
fn same_start_and_goal_needs_no_viewing_player() {
    let mut galaxy = foreign_wall();
    galaxy.viewer = 77;

    assert!(find_path(&galaxy, 2, 2, &PathOptions::default())
        .unwrap()
        .is_empty());
    assert!(plan_route(&galaxy, &RouteRequest::new(2, 2))
        .unwrap()
        .is_empty());
    assert!(matches!(
        find_path(&galaxy, 2, 99, &PathOptions::default()),
        Err(Error::StarNotFound { id: 99 })
    ));
    assert!(matches!(
        find_path(&galaxy, 1, 2, &PathOptions::default()),
        Err(Error::PlayerNotFound { id: 77 })
    ));
}

#[test]
fn neighbouring_goal_is_a_single_step() {
    let galaxy = foreign_wall();
    let route = find_path(&galaxy, 1, 2, &PathOptions::default()).unwrap();
    assert_eq!(route, vec![2]);
}

#[test]
fn foreign_territory_blocks_route_by_default() {
    let galaxy = foreign_wall();
    let route = find_path(&galaxy, 1, 4, &PathOptions::default()).unwrap();
    assert!(route.is_empty(), "no route without crossing star 3");
}

#[test]
fn crossing_foreign_territory_when_allowed() {
    let galaxy = foreign_wall();
    let route = find_path(&galaxy, 1, 4, &PathOptions::crossing(2.0)).unwrap();
    assert_eq!(route, vec![2, 3, 4], "route excludes start and includes goal");
}

#[test]
fn foreign_goal_is_unreachable_without_crossing() {
    let galaxy = foreign_wall();
    assert!(find_path(&galaxy, 2, 3, &PathOptions::default())
        .unwrap()
        .is_empty());
    assert_eq!(
        find_path(&galaxy, 2, 3, &PathOptions::crossing(5.0)).unwrap(),
        vec![3]
    );
}

#[test]
fn foreign_weight_steers_route_around_rival() {
    let galaxy = detour();

    let cheap = find_path(&galaxy, 1, 3, &PathOptions::crossing(1.0)).unwrap();
    assert_eq!(cheap, vec![2, 3]);

    let expensive = find_path(&galaxy, 1, 3, &PathOptions::crossing(3.0)).unwrap();
    assert_eq!(expensive, vec![4, 5, 3]);

    let forbidden = find_path(&galaxy, 1, 3, &PathOptions::default()).unwrap();
    assert_eq!(forbidden, vec![4, 5, 3]);
}

/// The only way from 1 to 3 is through unclaimed star 2.
fn unclaimed_gap() -> Galaxy {
    GalaxyBuilder::new(1)
        .own(1, "0", "0")
        .unowned(2, "0.5", "0")
        .own(3, "1.0", "0")
        .build()
}

#[test]
fn unowned_stars_block_default_routes() {
    let galaxy = unclaimed_gap();
    assert!(find_path(&galaxy, 1, 3, &PathOptions::default())
        .unwrap()
        .is_empty());
    assert_eq!(
        find_path(&galaxy, 1, 3, &PathOptions::crossing(2.0)).unwrap(),
        vec![2, 3]
    );
}

#[test]
fn unowned_stars_are_neutral_when_configured() {
    let galaxy = unclaimed_gap();
    let neutral = PathOptions {
        unowned_is_foreign: false,
        ..PathOptions::default()
    };
    assert_eq!(find_path(&galaxy, 1, 3, &neutral).unwrap(), vec![2, 3]);
}

#[test]
fn crossing_unowned_star_pays_foreign_weight() {
    // Unclaimed 2 is the short way; the owned detour 4 -> 5 wins once the
    // unclaimed hop is weighted.
    let galaxy = GalaxyBuilder::new(1)
        .own(1, "0", "0")
        .unowned(2, "0.5", "0")
        .own(3, "1.0", "0")
        .own(4, "0.25", "0.4")
        .own(5, "0.75", "0.4")
        .build();

    assert_eq!(
        find_path(&galaxy, 1, 3, &PathOptions::crossing(3.0)).unwrap(),
        vec![4, 5, 3]
    );
    let plan = plan_route(
        &galaxy,
        &RouteRequest::new(1, 3).with_options(PathOptions::crossing(1.0)),
    )
    .unwrap();
    assert_eq!(plan.steps, vec![2, 3]);
    assert_eq!(plan.foreign_hops, 1);
}

/// Stars 2 and 3 mirror each other across the x axis, so both have the same
/// `f`. Whichever was discovered first (lower id) must be expanded first.
fn mirrored(upper: StarId, lower: StarId) -> Galaxy {
    GalaxyBuilder::new(2)
        .own(1, "0", "0")
        .own(upper, "0.4", "0.3")
        .own(lower, "0.4", "-0.3")
        .own(4, "0.8", "0")
        .build()
}

#[test]
fn equal_cost_candidates_break_ties_by_discovery_order() {
    for (upper, lower) in [(2, 3), (3, 2)] {
        let galaxy = mirrored(upper, lower);
        let first = find_path(&galaxy, 1, 4, &PathOptions::default()).unwrap();
        assert_eq!(first, vec![2, 4], "upper={upper} lower={lower}");

        for _ in 0..10 {
            assert_eq!(
                find_path(&galaxy, 1, 4, &PathOptions::default()).unwrap(),
                first
            );
        }
    }
}

/// Fixed edges, independent of travel range.
struct FixedEdges(BTreeMap<StarId, Vec<StarId>>);

impl Neighbourhood for FixedEdges {
    fn neighbours(&self, star: StarId) -> triton_lib::Result<Vec<StarId>> {
        Ok(self.0.get(&star).cloned().unwrap_or_default())
    }
}

#[test]
fn open_star_is_reparented_when_a_cheaper_edge_appears() {
    let galaxy = GalaxyBuilder::new(0)
        .own(1, "0", "0")
        .own(2, "1", "0")
        .own(3, "0", "2")
        .own(4, "1", "3")
        .own(5, "1", "4")
        .build();
    let edges = FixedEdges(BTreeMap::from([
        (1, vec![2, 3]),
        (2, vec![4]),
        (3, vec![4]),
        (4, vec![5]),
    ]));

    // 2 and 3 tie on f = 5; 2 is expanded first and opens 4 at g = 4.
    // Expanding 3 then lowers 4 to g = 1 + sqrt(2) + 1.
    let route = find_path_in(&galaxy, &edges, 1, 5, &PathOptions::default()).unwrap();
    assert_eq!(route, vec![3, 4, 5]);
}

#[test]
fn cached_graph_gives_identical_routes() {
    let galaxy = detour();
    let graph = TravelGraph::build(&galaxy).unwrap();
    let live = LiveRange::new(&galaxy).unwrap();

    for options in [
        PathOptions::default(),
        PathOptions::crossing(1.0),
        PathOptions::crossing(3.0),
    ] {
        for &start in galaxy.stars.keys() {
            for &goal in galaxy.stars.keys() {
                assert_eq!(
                    find_path_in(&galaxy, &graph, start, goal, &options).unwrap(),
                    find_path_in(&galaxy, &live, start, goal, &options).unwrap(),
                    "{start} -> {goal} with {options:?}"
                );
            }
        }
    }
}

#[test]
fn unknown_endpoints_are_errors() {
    let galaxy = foreign_wall();
    assert!(matches!(
        find_path(&galaxy, 99, 1, &PathOptions::default()),
        Err(Error::StarNotFound { id: 99 })
    ));
    assert!(matches!(
        find_path(&galaxy, 1, 98, &PathOptions::default()),
        Err(Error::StarNotFound { id: 98 })
    ));
}

#[test]
fn invalid_foreign_weight_is_rejected() {
    let galaxy = foreign_wall();
    let error = find_path(&galaxy, 1, 4, &PathOptions::crossing(f64::INFINITY))
        .expect_err("infinite weight");
    assert!(matches!(error, Error::InvalidForeignWeight { .. }));
}

#[test]
fn route_plan_summarises_foreign_hops_and_distance() {
    let galaxy = foreign_wall();
    let request = RouteRequest::new(1, 4).with_options(PathOptions::crossing(2.0));
    let plan = plan_route(&galaxy, &request).unwrap();

    assert_eq!(plan.steps, vec![2, 3, 4]);
    assert_eq!(plan.hop_count(), 3);
    assert_eq!(plan.foreign_hops, 1);
    assert_eq!(plan.distance, 1.5);
    assert_eq!(plan.light_years(), 12.0);

    let cached = plan_route(&galaxy, &request.clone().with_graph(GraphMode::Cached)).unwrap();
    assert_eq!(cached, plan);

    let reused = request.with_travel_graph(TravelGraph::build(&galaxy).unwrap());
    assert_eq!(plan_route(&galaxy, &reused).unwrap(), plan);
}

#[test]
fn blocked_route_plan_is_empty_not_an_error() {
    let galaxy = foreign_wall();
    let plan = plan_route(&galaxy, &RouteRequest::new(1, 4)).unwrap();
    assert!(plan.is_empty());
    assert_eq!(plan.distance, 0.0);
}

#[test]
fn shared_snapshot_supports_concurrent_searches() {
    let galaxy = Arc::new(detour());
    let expected = find_path(&galaxy, 1, 3, &PathOptions::default()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let galaxy = Arc::clone(&galaxy);
            thread::spawn(move || find_path(&galaxy, 1, 3, &PathOptions::default()).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("search thread"), expected);
    }
}
