//! Triton library entry points.
//!
//! This crate models one fetched galaxy snapshot and exposes pure
//! calculations over it: star distances, the viewing player's travel range,
//! A* route search across that range, and the positional encoding of fleet
//! orders. Nothing here performs network I/O; callers fetch and parse the
//! snapshot, then pass it in by reference. Higher-level consumers (the CLI)
//! should only depend on the functions exported here.

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod loader;
pub mod orders;
pub mod path;
pub mod request;
pub mod routing;
pub mod snapshot;
pub mod spatial;

pub use error::{Error, Result};
pub use graph::{LiveRange, Neighbourhood, TravelGraph};
pub use loader::{load_galaxy, resolve_snapshot_path, save_galaxy, SNAPSHOT_ENV};
pub use orders::{decode_orders, encode_orders, ShipAction, ShipOrder};
pub use path::{find_path, find_path_in, PathOptions};
pub use request::{GameRequest, MessageGroup, ServerRequest, Upgrade, DEFAULT_API_VERSION};
pub use routing::{plan_route, GraphMode, RoutePlan, RouteRequest};
pub use snapshot::{
    from_light_years, to_light_years, Fleet, FleetId, Galaxy, Player, PlayerId, PlayerStats,
    Position, PrivatePlayerState, Star, StarDetails, StarId, TechLevels, Technology,
};
pub use spatial::{distance, reachable, travel_radius};
