//! In-memory model of one fetched galaxy state.
//!
//! A [`Galaxy`] is a point-in-time capture: a refresh produces a new value
//! rather than merging into an existing one. Every calculation in this crate
//! borrows a `&Galaxy` for the duration of a single call and never keeps it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::orders::ShipOrder;

/// Numeric identifier for a star.
pub type StarId = u64;

/// Numeric identifier for a fleet (carrier).
pub type FleetId = u64;

/// Numeric identifier for a player.
pub type PlayerId = u64;

/// Coordinate units per light-year.
pub const UNITS_PER_LIGHT_YEAR: f64 = 8.0;

/// Convert a raw coordinate distance into light-years.
pub fn to_light_years(raw: f64) -> f64 {
    raw * UNITS_PER_LIGHT_YEAR
}

/// Convert a light-year distance into raw coordinate units.
pub fn from_light_years(light_years: f64) -> f64 {
    light_years / UNITS_PER_LIGHT_YEAR
}

/// Parsed planar coordinates in raw units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Sum of the absolute coordinate differences.
    pub fn manhattan_to(&self, other: &Self) -> f64 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }
}

/// Economy details only reported for stars the viewer can see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarDetails {
    pub economy: u32,
    pub industry: u32,
    pub science: u32,
    pub natural_resources: u32,
    pub total_resources: u32,
    pub ships: u32,
    #[serde(default)]
    pub warpgate: bool,
}

/// A star as reported in a galaxy snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: StarId,
    pub name: String,
    /// Fixed-point decimal text, 8 units per light-year.
    pub x: String,
    pub y: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<PlayerId>,
    #[serde(default)]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<StarDetails>,
}

impl Star {
    /// Parse the textual coordinates of this star.
    pub fn position(&self) -> Result<Position> {
        Ok(Position {
            x: parse_coordinate(self.id, 'x', &self.x)?,
            y: parse_coordinate(self.id, 'y', &self.y)?,
        })
    }

    /// Whether this star belongs to somebody other than `viewer`.
    ///
    /// Unowned stars count as foreign only when `unowned_is_foreign` is set,
    /// which is what the default route options do.
    pub fn is_foreign_to(&self, viewer: PlayerId, unowned_is_foreign: bool) -> bool {
        match self.owner {
            Some(owner) => owner != viewer,
            None => unowned_is_foreign,
        }
    }
}

fn parse_coordinate(star: StarId, axis: char, value: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(Error::InvalidCoordinate {
            star,
            axis,
            value: value.to_string(),
        }),
    }
}

/// A carrier and the orders queued on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    pub id: FleetId,
    pub name: String,
    pub owner: PlayerId,
    pub x: String,
    pub y: String,
    /// Coordinates at the previous tick.
    pub previous_x: String,
    pub previous_y: String,
    /// Star the fleet is currently sitting at, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbiting: Option<StarId>,
    pub ships: u32,
    /// Travelling through a warpgate.
    #[serde(default)]
    pub warp_speed: bool,
    #[serde(default)]
    pub orders: Vec<ShipOrder>,
}

/// Level and progress for a single technology.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Technology {
    pub level: u32,
    #[serde(default)]
    pub value: f64,
    /// Progress towards the next level; viewer only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research: Option<u32>,
}

/// Technology levels per research category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TechLevels {
    pub banking: Technology,
    pub manufacturing: Technology,
    pub propulsion: Technology,
    pub research: Technology,
    pub scanning: Technology,
    pub terraforming: Technology,
    pub weapons: Technology,
}

/// Aggregate totals shown on the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    pub stars: u32,
    pub fleets: u32,
    pub ships: u32,
    pub economy: u32,
    pub industry: u32,
    pub science: u32,
}

/// Fields the game only reports for the viewing player.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PrivatePlayerState {
    pub cash: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub researching: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub researching_next: Option<String>,
    #[serde(default)]
    pub stars_abandoned: u32,
}

/// A participant in the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub alias: String,
    #[serde(default)]
    pub ai: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_star: Option<StarId>,
    #[serde(default)]
    pub tech: TechLevels,
    #[serde(default)]
    pub stats: PlayerStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<PrivatePlayerState>,
}

/// One fetched galaxy state, as seen by `viewer`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Galaxy {
    #[serde(default)]
    pub name: String,
    /// Player on whose behalf travel range and routes are computed.
    pub viewer: PlayerId,
    #[serde(default)]
    pub tick: u64,
    /// Minutes per tick.
    #[serde(default)]
    pub tick_rate: u32,
    /// Ticks per production cycle.
    #[serde(default)]
    pub production_rate: u32,
    /// Tick within the current production cycle.
    #[serde(default)]
    pub production_counter: u32,
    /// Production cycles completed so far.
    #[serde(default)]
    pub productions: u32,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub stars: BTreeMap<StarId, Star>,
    #[serde(default)]
    pub fleets: BTreeMap<FleetId, Fleet>,
    #[serde(default)]
    pub players: BTreeMap<PlayerId, Player>,
}

impl Galaxy {
    /// Lookup a star, failing with [`Error::StarNotFound`].
    pub fn star(&self, id: StarId) -> Result<&Star> {
        self.stars.get(&id).ok_or(Error::StarNotFound { id })
    }

    /// Lookup a player, failing with [`Error::PlayerNotFound`].
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players.get(&id).ok_or(Error::PlayerNotFound { id })
    }

    /// The player this snapshot was fetched for.
    pub fn viewing_player(&self) -> Result<&Player> {
        self.player(self.viewer)
    }

    /// Lookup a star name by identifier.
    pub fn star_name(&self, id: StarId) -> Option<&str> {
        self.stars.get(&id).map(|star| star.name.as_str())
    }

    /// Case-sensitive star lookup by name.
    pub fn star_id_by_name(&self, name: &str) -> Option<StarId> {
        self.stars
            .values()
            .find(|star| star.name == name)
            .map(|star| star.id)
    }

    /// Stars owned by `player`, in id order.
    pub fn stars_owned_by(&self, player: PlayerId) -> impl Iterator<Item = &Star> + '_ {
        self.stars
            .values()
            .filter(move |star| star.owner == Some(player))
    }

    /// Fleets owned by `player`, in id order.
    pub fn fleets_owned_by(&self, player: PlayerId) -> impl Iterator<Item = &Fleet> + '_ {
        self.fleets
            .values()
            .filter(move |fleet| fleet.owner == player)
    }

    /// Ticks remaining until the next production cycle.
    pub fn ticks_to_production(&self) -> u32 {
        self.production_rate.saturating_sub(self.production_counter)
    }

    /// Check that every map key agrees with the id stored in its entry.
    pub fn validate(&self) -> Result<()> {
        check_keys("star", self.stars.iter().map(|(key, star)| (*key, star.id)))?;
        check_keys(
            "fleet",
            self.fleets.iter().map(|(key, fleet)| (*key, fleet.id)),
        )?;
        check_keys(
            "player",
            self.players.iter().map(|(key, player)| (*key, player.id)),
        )
    }

    /// Parse and validate a snapshot from JSON text in the crate's model format.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let galaxy: Galaxy = serde_json::from_str(text)?;
        galaxy.validate()?;
        Ok(galaxy)
    }
}

fn check_keys(kind: &'static str, entries: impl Iterator<Item = (u64, u64)>) -> Result<()> {
    for (key, id) in entries {
        if key != id {
            return Err(Error::SnapshotMismatch { kind, key, id });
        }
    }
    Ok(())
}
