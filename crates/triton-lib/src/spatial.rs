//! Distances between stars and the viewer's travel range.
//!
//! All distances here are in raw coordinate units; see
//! [`to_light_years`](crate::snapshot::to_light_years) for display.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::Result;
use crate::snapshot::{from_light_years, Galaxy, StarId};

/// Light-years of range every player has before propulsion research.
pub const BASE_RANGE_LIGHT_YEARS: f64 = 3.0;

/// Euclidean distance between two stars in raw coordinate units.
pub fn distance(galaxy: &Galaxy, a: StarId, b: StarId) -> Result<f64> {
    let from = galaxy.star(a)?.position()?;
    let to = galaxy.star(b)?.position()?;
    Ok(from.distance_to(&to))
}

/// Travel radius of the viewing player in raw coordinate units.
///
/// Range is `propulsion level + 3` light-years. The viewer's level is used
/// regardless of who owns the stars being travelled between.
pub fn travel_radius(galaxy: &Galaxy) -> Result<f64> {
    let level = galaxy.viewing_player()?.tech.propulsion.level;
    Ok(from_light_years(f64::from(level) + BASE_RANGE_LIGHT_YEARS))
}

/// Every star within the viewer's travel radius of `origin`, boundary included.
///
/// The origin itself is never part of the result.
pub fn reachable(galaxy: &Galaxy, origin: StarId) -> Result<BTreeSet<StarId>> {
    let radius = travel_radius(galaxy)?;
    reachable_within(galaxy, origin, radius)
}

pub(crate) fn reachable_within(
    galaxy: &Galaxy,
    origin: StarId,
    radius: f64,
) -> Result<BTreeSet<StarId>> {
    let centre = galaxy.star(origin)?.position()?;

    let mut found = BTreeSet::new();
    for star in galaxy.stars.values() {
        if star.id == origin {
            continue;
        }
        if centre.distance_to(&star.position()?) <= radius {
            found.insert(star.id);
        }
    }

    debug!(origin, radius, count = found.len(), "computed reachable stars");
    Ok(found)
}
