// Handlers for the CLI subcommands. main.rs parses arguments and dispatches
// here; rendering lives in the library half of the crate.

pub mod orders;
pub mod request;
pub mod route;
pub mod snapshot;
pub mod spatial;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::debug;

use triton_cli::output::{render, OutputFormat, TextReport};
use triton_cli::terminal::ColorPalette;
use triton_lib::{load_galaxy, resolve_snapshot_path, Galaxy, StarId};

/// Resolve and load the snapshot named by `--snapshot` or `TRITON_SNAPSHOT`.
pub fn load_snapshot(target: Option<&Path>) -> Result<Galaxy> {
    let path = resolve_snapshot_path(target).context("failed to locate a galaxy snapshot")?;
    let galaxy = load_galaxy(&path)
        .with_context(|| format!("failed to load snapshot from {}", path.display()))?;
    debug!(path = %path.display(), tick = galaxy.tick, "snapshot ready");
    Ok(galaxy)
}

/// Look a star up by exact name, falling back to a numeric id.
pub fn resolve_star(galaxy: &Galaxy, reference: &str) -> Result<StarId> {
    galaxy
        .star_id_by_name(reference)
        .or_else(|| {
            reference
                .trim()
                .parse::<StarId>()
                .ok()
                .filter(|id| galaxy.stars.contains_key(id))
        })
        .ok_or_else(|| anyhow!("unknown star '{reference}'"))
}

/// Print `report` to stdout in the chosen format.
pub fn emit<T>(report: &T, format: OutputFormat) -> Result<()>
where
    T: Serialize + TextReport,
{
    let rendered =
        render(report, format, &ColorPalette::detect()).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}
