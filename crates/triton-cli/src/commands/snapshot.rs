//! `summary` and `import` handlers.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use triton_cli::output::{ImportReport, OutputFormat, SummaryReport};
use triton_lib::loader::default_snapshot_path;
use triton_lib::save_galaxy;

use super::{emit, load_snapshot};

pub fn handle_summary(snapshot: Option<&Path>, format: OutputFormat) -> Result<()> {
    let galaxy = load_snapshot(snapshot)?;
    let report = SummaryReport::build(&galaxy).context("failed to summarise snapshot")?;
    emit(&report, format)
}

/// Validate `source` and write it to `destination`, or to the platform data
/// directory where later commands find it without `--snapshot`.
pub fn handle_import(
    source: &Path,
    destination: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let galaxy = load_snapshot(Some(source))?;
    let target = match destination {
        Some(path) => path.to_path_buf(),
        None => default_snapshot_path().context("no platform data directory for snapshots")?,
    };

    save_galaxy(&galaxy, &target)
        .with_context(|| format!("failed to write snapshot to {}", target.display()))?;
    info!(path = %target.display(), stars = galaxy.stars.len(), "snapshot imported");

    emit(&ImportReport::build(&galaxy, &target), format)
}
