//! Route command handler.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use triton_cli::output::{OutputFormat, RouteReport};
use triton_lib::{plan_route, GraphMode, PathOptions, RouteRequest};

use super::{emit, load_snapshot, resolve_star};

/// Arguments for the route command.
#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Starting star (name or id).
    #[arg(long = "from")]
    pub from: String,
    /// Destination star (name or id).
    #[arg(long = "to")]
    pub to: String,
    /// Route through stars held by other players.
    #[arg(long)]
    pub allow_foreign: bool,
    /// Cost multiplier for hops onto foreign stars.
    #[arg(long, default_value_t = 2.0)]
    pub foreign_weight: f64,
    /// Let routes pass through unowned stars as if they were friendly.
    #[arg(long = "unowned-neutral")]
    pub unowned_neutral: bool,
    /// Build the whole travel graph up front instead of discovering it lazily.
    #[arg(long)]
    pub cached: bool,
}

impl RouteArgs {
    pub fn options(&self) -> PathOptions {
        PathOptions {
            allow_foreign: self.allow_foreign,
            foreign_weight: self.foreign_weight,
            unowned_is_foreign: !self.unowned_neutral,
        }
    }

    pub fn graph_mode(&self) -> GraphMode {
        if self.cached {
            GraphMode::Cached
        } else {
            GraphMode::Live
        }
    }
}

/// Plan and print a route. An empty route is reported, not treated as a failure.
pub fn handle_route_command(
    snapshot: Option<&Path>,
    format: OutputFormat,
    args: &RouteArgs,
) -> Result<()> {
    let galaxy = load_snapshot(snapshot)?;
    let start = resolve_star(&galaxy, &args.from)?;
    let goal = resolve_star(&galaxy, &args.to)?;

    let request = RouteRequest::new(start, goal)
        .with_options(args.options())
        .with_graph(args.graph_mode());
    let plan = plan_route(&galaxy, &request)
        .with_context(|| format!("failed to plan route from {} to {}", args.from, args.to))?;
    info!(
        start,
        goal,
        hops = plan.hop_count(),
        graph = %request.graph,
        "route planned"
    );

    emit(
        &RouteReport::build(&galaxy, &plan, !args.unowned_neutral)?,
        format,
    )
}
