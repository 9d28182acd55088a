//! `distance` and `reach` handlers.

use std::path::Path;

use anyhow::Result;

use triton_cli::output::{DistanceReport, OutputFormat, ReachReport};

use super::{emit, load_snapshot, resolve_star};

pub fn handle_distance(
    snapshot: Option<&Path>,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let galaxy = load_snapshot(snapshot)?;
    let from = resolve_star(&galaxy, from)?;
    let to = resolve_star(&galaxy, to)?;
    emit(&DistanceReport::build(&galaxy, from, to)?, format)
}

pub fn handle_reach(snapshot: Option<&Path>, format: OutputFormat, star: &str) -> Result<()> {
    let galaxy = load_snapshot(snapshot)?;
    let origin = resolve_star(&galaxy, star)?;
    emit(&ReachReport::build(&galaxy, origin)?, format)
}
