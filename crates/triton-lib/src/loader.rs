use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};
use crate::snapshot::Galaxy;

/// Environment variable naming the snapshot file (or its directory).
pub const SNAPSHOT_ENV: &str = "TRITON_SNAPSHOT";

/// File name looked up when a directory is given instead of a file.
pub const SNAPSHOT_FILE_NAME: &str = "snapshot.json";

/// Resolve which snapshot file to read.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `TRITON_SNAPSHOT` environment variable.
/// 3. `snapshot.json` in the platform data directory, if it exists.
///
/// An existing directory stands for the `snapshot.json` inside it; any other
/// path is taken as the snapshot file itself.
pub fn resolve_snapshot_path(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(canonical_snapshot_path(explicit));
    }

    if let Some(env_path) = env::var_os(SNAPSHOT_ENV) {
        return Ok(canonical_snapshot_path(Path::new(&env_path)));
    }

    default_snapshot_path()
        .filter(|path| path.exists())
        .ok_or(Error::SnapshotNotFound)
}

/// Default snapshot location in the platform data directory.
pub fn default_snapshot_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "triton").map(|dirs| dirs.data_dir().join(SNAPSHOT_FILE_NAME))
}

fn canonical_snapshot_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.join(SNAPSHOT_FILE_NAME);
    }
    path.to_path_buf()
}

/// Read a snapshot saved in this crate's JSON model format.
pub fn load_galaxy(path: &Path) -> Result<Galaxy> {
    let text = fs::read_to_string(path).map_err(|source| Error::SnapshotRead {
        path: path.to_path_buf(),
        source,
    })?;
    let galaxy = Galaxy::from_json_str(&text)?;
    debug!(
        path = %path.display(),
        stars = galaxy.stars.len(),
        fleets = galaxy.fleets.len(),
        players = galaxy.players.len(),
        tick = galaxy.tick,
        "loaded galaxy snapshot"
    );
    Ok(galaxy)
}

/// Write a snapshot in the JSON model format.
pub fn save_galaxy(galaxy: &Galaxy, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = serde_json::to_string_pretty(galaxy)?;
    fs::write(path, text)?;
    Ok(())
}
