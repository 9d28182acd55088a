//! Route planning on top of the path search.
//!
//! [`plan_route`] runs [`find_path`](crate::path::find_path) or
//! [`find_path_in`](crate::path::find_path_in) over a cached graph and
//! annotates the result with distances and the number of hops that land on
//! foreign stars.
//!
//! # Example
//!
//! ```no_run
//! use triton_lib::{load_galaxy, plan_route, RouteRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let galaxy = load_galaxy(std::path::Path::new("snapshot.json"))?;
//! let plan = plan_route(&galaxy, &RouteRequest::new(12, 40))?;
//! println!("{} hops, {:.1} ly", plan.hop_count(), plan.light_years());
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::graph::TravelGraph;
use crate::path::{find_path, find_path_in, PathOptions};
use crate::snapshot::{to_light_years, Galaxy, StarId};

/// How travel edges are obtained during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphMode {
    /// Range queries run as stars are expanded.
    #[default]
    Live,
    /// All edges are computed before the search starts.
    Cached,
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            GraphMode::Live => "live",
            GraphMode::Cached => "cached",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: StarId,
    pub goal: StarId,
    pub options: PathOptions,
    pub graph: GraphMode,
    /// Pre-built graph reused by [`GraphMode::Cached`] requests.
    /// If `None`, one is built for this request.
    pub travel_graph: Option<TravelGraph>,
}

impl RouteRequest {
    /// Route through friendly and unowned space only.
    pub fn new(start: StarId, goal: StarId) -> Self {
        Self {
            start,
            goal,
            options: PathOptions::default(),
            graph: GraphMode::default(),
            travel_graph: None,
        }
    }

    pub fn with_options(mut self, options: PathOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_graph(mut self, graph: GraphMode) -> Self {
        self.graph = graph;
        self
    }

    /// Attach a graph built earlier for the same snapshot.
    pub fn with_travel_graph(mut self, graph: TravelGraph) -> Self {
        self.graph = GraphMode::Cached;
        self.travel_graph = Some(graph);
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: StarId,
    pub goal: StarId,
    /// Stars visited after `start`, ending with `goal`. Empty when no route exists.
    pub steps: Vec<StarId>,
    /// Unweighted travel distance in raw coordinate units.
    pub distance: f64,
    pub foreign_hops: usize,
}

impl RoutePlan {
    /// Number of jumps in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len()
    }

    pub fn light_years(&self) -> f64 {
        to_light_years(self.distance)
    }

    /// No route was found, or start and goal coincide.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Compute a route and summarise it.
pub fn plan_route(galaxy: &Galaxy, request: &RouteRequest) -> Result<RoutePlan> {
    let steps = match request.graph {
        GraphMode::Live => find_path(galaxy, request.start, request.goal, &request.options)?,
        GraphMode::Cached => {
            let built;
            let graph = match &request.travel_graph {
                Some(graph) => graph,
                None => {
                    built = TravelGraph::build(galaxy)?;
                    &built
                }
            };
            find_path_in(galaxy, graph, request.start, request.goal, &request.options)?
        }
    };

    let mut distance = 0.0;
    let mut foreign_hops = 0;
    let mut previous = galaxy.star(request.start)?.position()?;
    for &id in &steps {
        let star = galaxy.star(id)?;
        let position = star.position()?;
        distance += previous.distance_to(&position);
        if star.is_foreign_to(galaxy.viewer, request.options.unowned_is_foreign) {
            foreign_hops += 1;
        }
        previous = position;
    }

    Ok(RoutePlan {
        start: request.start,
        goal: request.goal,
        steps,
        distance,
        foreign_hops,
    })
}
