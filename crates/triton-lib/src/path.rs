use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{LiveRange, Neighbourhood};
use crate::snapshot::{Galaxy, StarId};

/// Traversal policy for stars owned by other players.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathOptions {
    /// Route through foreign stars instead of skipping them.
    pub allow_foreign: bool,
    /// Multiplier applied to the cost of any hop that lands on a foreign star.
    pub foreign_weight: f64,
    /// Treat unowned stars as foreign as well. On by default; clear it to let
    /// routes pass through unclaimed space freely.
    pub unowned_is_foreign: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            allow_foreign: false,
            foreign_weight: 2.0,
            unowned_is_foreign: true,
        }
    }
}

impl PathOptions {
    /// Allow crossing foreign stars at `foreign_weight` times the normal cost.
    pub fn crossing(foreign_weight: f64) -> Self {
        Self {
            allow_foreign: true,
            foreign_weight,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.foreign_weight.is_finite() || self.foreign_weight < 0.0 {
            return Err(Error::InvalidForeignWeight {
                value: self.foreign_weight,
            });
        }
        Ok(())
    }
}

/// Find a route from `start` to `end` over the viewer's travel range.
///
/// Edges are discovered from the live travel range as stars are expanded.
/// The returned route excludes `start` and ends with `end`. An empty route
/// means either `start == end` or that no route exists under `options`.
/// Travel range is only looked up once the endpoints differ.
pub fn find_path(
    galaxy: &Galaxy,
    start: StarId,
    end: StarId,
    options: &PathOptions,
) -> Result<Vec<StarId>> {
    options.validate()?;
    galaxy.star(start)?;
    galaxy.star(end)?;
    if start == end {
        return Ok(Vec::new());
    }

    let range = LiveRange::new(galaxy)?;
    find_path_in(galaxy, &range, start, end, options)
}

/// A* search over an arbitrary [`Neighbourhood`].
///
/// Hop cost is the Euclidean distance, scaled by
/// [`PathOptions::foreign_weight`] when the hop lands on a foreign star. The
/// heuristic is the Manhattan distance to the goal. It can overestimate, so
/// the route is not guaranteed to be the cheapest one.
///
/// Among open stars with equal `f`, the one discovered first is expanded
/// first. Expanded stars are final; an open star's cost may still be lowered.
pub fn find_path_in<N: Neighbourhood + ?Sized>(
    galaxy: &Galaxy,
    graph: &N,
    start: StarId,
    end: StarId,
    options: &PathOptions,
) -> Result<Vec<StarId>> {
    options.validate()?;
    galaxy.star(start)?;
    let goal = galaxy.star(end)?.position()?;

    if start == end {
        return Ok(Vec::new());
    }

    let mut nodes: HashMap<StarId, SearchNode> = HashMap::new();
    let mut open = BinaryHeap::new();
    let mut next_seq = 0u64;

    nodes.insert(start, SearchNode::new(None, 0.0, 0.0, next_seq));
    open.push(OpenEntry::new(start, 0.0, next_seq));
    next_seq += 1;

    let mut expanded = 0usize;
    while let Some(entry) = open.pop() {
        let current = entry.star;
        let Some(node) = nodes.get_mut(&current) else {
            continue;
        };
        if node.closed {
            continue;
        }
        if current == end {
            debug!(start, end, expanded, "route found");
            return Ok(reconstruct_path(&nodes, end));
        }

        node.closed = true;
        expanded += 1;
        let current_g = node.g;
        let from = galaxy.star(current)?.position()?;

        for next in graph.neighbours(current)? {
            let star = galaxy.star(next)?;
            let foreign = star.is_foreign_to(galaxy.viewer, options.unowned_is_foreign);
            if foreign && !options.allow_foreign {
                continue;
            }

            let position = star.position()?;
            let weight = if foreign { options.foreign_weight } else { 1.0 };
            let tentative_g = current_g + from.distance_to(&position) * weight;

            match nodes.entry(next) {
                Entry::Vacant(slot) => {
                    let h = position.manhattan_to(&goal);
                    let node = slot.insert(SearchNode::new(Some(current), tentative_g, h, next_seq));
                    open.push(OpenEntry::new(next, node.f(), next_seq));
                    next_seq += 1;
                }
                Entry::Occupied(mut slot) => {
                    let node = slot.get_mut();
                    if node.closed || tentative_g >= node.g {
                        continue;
                    }
                    node.g = tentative_g;
                    node.parent = Some(current);
                    // Keeps its original sequence so tie-breaking follows discovery order.
                    open.push(OpenEntry::new(next, node.f(), node.seq));
                }
            }
        }
    }

    debug!(start, end, expanded, "no route under current constraints");
    Ok(Vec::new())
}

#[derive(Debug, Clone, Copy)]
struct SearchNode {
    parent: Option<StarId>,
    g: f64,
    h: f64,
    seq: u64,
    closed: bool,
}

impl SearchNode {
    fn new(parent: Option<StarId>, g: f64, h: f64, seq: u64) -> Self {
        Self {
            parent,
            g,
            h,
            seq,
            closed: false,
        }
    }

    fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// Walk parent links back from `goal`; the start star is left out.
fn reconstruct_path(nodes: &HashMap<StarId, SearchNode>, goal: StarId) -> Vec<StarId> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(parent) = nodes.get(&current).and_then(|node| node.parent) {
        path.push(current);
        current = parent;
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct OpenEntry {
    star: StarId,
    estimate: FloatOrd,
    seq: u64,
}

impl OpenEntry {
    fn new(star: StarId, estimate: f64, seq: u64) -> Self {
        Self {
            star,
            estimate: FloatOrd(estimate),
            seq,
        }
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap pops the lowest estimate, then the
        // earliest discovered star.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
