//! Common test utilities and fixture helpers.
//!
//! Provides a small builder for hand-made galaxies and the path to the
//! checked-in JSON snapshot fixture.

use std::path::PathBuf;

use triton_lib::{Galaxy, Player, PlayerId, Star, StarId, TechLevels, Technology};

/// Player id used as the viewer in built galaxies.
pub const VIEWER: PlayerId = 1;

/// Another player, owning the foreign stars.
#[allow(dead_code)]
pub const RIVAL: PlayerId = 2;

/// Path to the checked-in snapshot fixture.
#[allow(dead_code)]
pub fn fixture_snapshot_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/small_galaxy.json")
}

/// Builder to create `Galaxy` instances in tests with sensible defaults.
pub struct GalaxyBuilder {
    galaxy: Galaxy,
}

#[allow(dead_code)]
impl GalaxyBuilder {
    /// Viewer with propulsion `level`, so range is `level + 3` light-years.
    #[must_use]
    pub fn new(propulsion: u32) -> Self {
        let mut galaxy = Galaxy {
            name: "test galaxy".to_string(),
            viewer: VIEWER,
            ..Galaxy::default()
        };
        galaxy.players.insert(VIEWER, player(VIEWER, "viewer", propulsion));
        galaxy.players.insert(RIVAL, player(RIVAL, "rival", 0));
        Self { galaxy }
    }

    /// Add a star owned by the viewer.
    pub fn own(self, id: StarId, x: &str, y: &str) -> Self {
        self.star(id, x, y, Some(VIEWER))
    }

    /// Add a star owned by the rival.
    pub fn foreign(self, id: StarId, x: &str, y: &str) -> Self {
        self.star(id, x, y, Some(RIVAL))
    }

    /// Add an unowned star.
    pub fn unowned(self, id: StarId, x: &str, y: &str) -> Self {
        self.star(id, x, y, None)
    }

    pub fn star(mut self, id: StarId, x: &str, y: &str, owner: Option<PlayerId>) -> Self {
        self.galaxy.stars.insert(
            id,
            Star {
                id,
                name: format!("Star {id}"),
                x: x.to_string(),
                y: y.to_string(),
                owner,
                visible: true,
                details: None,
            },
        );
        self
    }

    /// Raise the rival's propulsion, which must never affect the viewer's range.
    pub fn rival_propulsion(mut self, level: u32) -> Self {
        if let Some(rival) = self.galaxy.players.get_mut(&RIVAL) {
            rival.tech.propulsion.level = level;
        }
        self
    }

    pub fn build(self) -> Galaxy {
        self.galaxy
    }
}

fn player(id: PlayerId, alias: &str, propulsion: u32) -> Player {
    Player {
        id,
        alias: alias.to_string(),
        ai: false,
        home_star: None,
        tech: TechLevels {
            propulsion: Technology {
                level: propulsion,
                ..Technology::default()
            },
            ..TechLevels::default()
        },
        stats: Default::default(),
        private: None,
    }
}
