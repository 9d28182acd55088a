use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::snapshot::{Galaxy, StarId};
use crate::spatial::{reachable_within, travel_radius};

/// Source of travel edges for the route search.
///
/// Neighbours are returned in ascending star id order so that searches over
/// the same snapshot always discover stars in the same sequence.
pub trait Neighbourhood {
    /// Stars reachable in one jump from `star`.
    fn neighbours(&self, star: StarId) -> Result<Vec<StarId>>;
}

/// Edges discovered on demand from the viewer's travel range.
///
/// Nothing is precomputed; each call runs a fresh range query.
#[derive(Debug, Clone, Copy)]
pub struct LiveRange<'a> {
    galaxy: &'a Galaxy,
    radius: f64,
}

impl<'a> LiveRange<'a> {
    pub fn new(galaxy: &'a Galaxy) -> Result<Self> {
        Ok(Self {
            galaxy,
            radius: travel_radius(galaxy)?,
        })
    }

    /// Travel radius in raw coordinate units.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Neighbourhood for LiveRange<'_> {
    fn neighbours(&self, star: StarId) -> Result<Vec<StarId>> {
        Ok(reachable_within(self.galaxy, star, self.radius)?
            .into_iter()
            .collect())
    }
}

/// Adjacency cached for one snapshot.
///
/// Gives the same edges as [`LiveRange`] but pays the range queries once,
/// which suits callers running many searches against the same snapshot.
/// Cloning is cheap; the adjacency is shared.
#[derive(Debug, Clone, Default)]
pub struct TravelGraph {
    radius: f64,
    adjacency: Arc<BTreeMap<StarId, Vec<StarId>>>,
}

impl TravelGraph {
    /// Precompute the travel edges of every star in `galaxy`.
    pub fn build(galaxy: &Galaxy) -> Result<Self> {
        let live = LiveRange::new(galaxy)?;
        let mut adjacency = BTreeMap::new();
        for &star in galaxy.stars.keys() {
            adjacency.insert(star, live.neighbours(star)?);
        }

        let edges: usize = adjacency.values().map(Vec::len).sum();
        debug!(stars = adjacency.len(), edges, "built travel graph");

        Ok(Self {
            radius: live.radius(),
            adjacency: Arc::new(adjacency),
        })
    }

    /// Travel radius the graph was built with, in raw coordinate units.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn star_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl Neighbourhood for TravelGraph {
    fn neighbours(&self, star: StarId) -> Result<Vec<StarId>> {
        self.adjacency
            .get(&star)
            .cloned()
            .ok_or(Error::StarNotFound { id: star })
    }
}
