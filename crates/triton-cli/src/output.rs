//! Report types and their text or JSON rendering.
//!
//! Each subcommand builds one report from the loaded galaxy and hands it to
//! [`render`], which either serialises it or lays it out for the terminal.

use std::fmt::Write as _;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;
use triton_lib::{
    distance, reachable, to_light_years, travel_radius, Galaxy, GameRequest, PlayerId, RoutePlan,
    ServerRequest, StarId, TravelGraph,
};

use crate::terminal::{format_light_years, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Terminal layout of a report.
pub trait TextReport {
    fn render_text(&self, palette: &ColorPalette) -> String;
}

/// Render `report` in the requested format.
pub fn render<T>(
    report: &T,
    format: OutputFormat,
    palette: &ColorPalette,
) -> serde_json::Result<String>
where
    T: Serialize + TextReport,
{
    match format {
        OutputFormat::Text => Ok(report.render_text(palette)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

/// A star as shown in listings. Unowned stars are flagged foreign unless the
/// caller routes through them as neutral.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarView {
    pub id: StarId,
    pub name: String,
    pub owner: Option<PlayerId>,
    pub foreign: bool,
}

impl StarView {
    pub fn new(galaxy: &Galaxy, id: StarId, unowned_is_foreign: bool) -> triton_lib::Result<Self> {
        let star = galaxy.star(id)?;
        Ok(Self {
            id,
            name: star.name.clone(),
            owner: star.owner,
            foreign: star.is_foreign_to(galaxy.viewer, unowned_is_foreign),
        })
    }

    fn label(&self, palette: &ColorPalette) -> String {
        let name_color = if self.foreign {
            palette.red
        } else {
            palette.white_bold
        };
        format!(
            "{name_color}{}{reset} {gray}({}){reset}",
            self.name,
            self.id,
            reset = palette.reset,
            gray = palette.gray,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceReport {
    pub from: StarView,
    pub to: StarView,
    pub distance: f64,
    pub light_years: f64,
}

impl DistanceReport {
    pub fn build(galaxy: &Galaxy, from: StarId, to: StarId) -> triton_lib::Result<Self> {
        let raw = distance(galaxy, from, to)?;
        Ok(Self {
            from: StarView::new(galaxy, from, true)?,
            to: StarView::new(galaxy, to, true)?,
            distance: raw,
            light_years: to_light_years(raw),
        })
    }
}

impl TextReport for DistanceReport {
    fn render_text(&self, palette: &ColorPalette) -> String {
        format!(
            "{} -> {}: {:.4} units ({green}{}{reset})",
            self.from.label(palette),
            self.to.label(palette),
            self.distance,
            format_light_years(self.light_years),
            green = palette.green,
            reset = palette.reset,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReachEntry {
    #[serde(flatten)]
    pub star: StarView,
    pub distance: f64,
    pub light_years: f64,
}

/// Stars within one jump of an origin, nearest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReachReport {
    pub origin: StarView,
    pub radius: f64,
    pub radius_light_years: f64,
    pub stars: Vec<ReachEntry>,
}

impl ReachReport {
    pub fn build(galaxy: &Galaxy, origin: StarId) -> triton_lib::Result<Self> {
        let radius = travel_radius(galaxy)?;
        let mut stars = Vec::new();
        for id in reachable(galaxy, origin)? {
            let raw = distance(galaxy, origin, id)?;
            stars.push(ReachEntry {
                star: StarView::new(galaxy, id, true)?,
                distance: raw,
                light_years: to_light_years(raw),
            });
        }
        stars.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.star.id.cmp(&b.star.id))
        });

        Ok(Self {
            origin: StarView::new(galaxy, origin, true)?,
            radius,
            radius_light_years: to_light_years(radius),
            stars,
        })
    }
}

impl TextReport for ReachReport {
    fn render_text(&self, palette: &ColorPalette) -> String {
        let mut out = format!(
            "Stars within {} of {}:",
            format_light_years(self.radius_light_years),
            self.origin.label(palette)
        );
        if self.stars.is_empty() {
            out.push_str("\n  (none)");
        }
        for entry in &self.stars {
            let _ = write!(
                out,
                "\n  - {} {green}{}{reset}",
                entry.star.label(palette),
                format_light_years(entry.light_years),
                green = palette.green,
                reset = palette.reset,
            );
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteHop {
    #[serde(flatten)]
    pub star: StarView,
    /// Length of the jump that lands on this star.
    pub jump_light_years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub start: StarView,
    pub goal: StarView,
    pub hops: Vec<RouteHop>,
    pub distance: f64,
    pub light_years: f64,
    pub foreign_hops: usize,
}

impl RouteReport {
    pub fn build(
        galaxy: &Galaxy,
        plan: &RoutePlan,
        unowned_is_foreign: bool,
    ) -> triton_lib::Result<Self> {
        let mut hops = Vec::with_capacity(plan.hop_count());
        let mut previous = plan.start;
        for &id in &plan.steps {
            hops.push(RouteHop {
                star: StarView::new(galaxy, id, unowned_is_foreign)?,
                jump_light_years: to_light_years(distance(galaxy, previous, id)?),
            });
            previous = id;
        }

        Ok(Self {
            start: StarView::new(galaxy, plan.start, unowned_is_foreign)?,
            goal: StarView::new(galaxy, plan.goal, unowned_is_foreign)?,
            hops,
            distance: plan.distance,
            light_years: plan.light_years(),
            foreign_hops: plan.foreign_hops,
        })
    }
}

impl TextReport for RouteReport {
    fn render_text(&self, palette: &ColorPalette) -> String {
        if self.hops.is_empty() {
            if self.start.id == self.goal.id {
                return format!("Already at {}", self.start.label(palette));
            }
            return format!(
                "No route from {} to {}",
                self.start.label(palette),
                self.goal.label(palette)
            );
        }

        let mut out = format!(
            "Route from {} to {} ({} hops, {}, {} foreign):",
            self.start.name,
            self.goal.name,
            self.hops.len(),
            format_light_years(self.light_years),
            self.foreign_hops
        );
        let _ = write!(
            out,
            "\n  {}STRT{} {}",
            palette.tag_start,
            palette.reset,
            self.start.label(palette)
        );
        let last = self.hops.len() - 1;
        for (index, hop) in self.hops.iter().enumerate() {
            let (tag_color, tag) = if index == last {
                (palette.tag_goal, "GOAL")
            } else {
                (palette.tag_jump, "JUMP")
            };
            let _ = write!(
                out,
                "\n  {tag_color}{tag}{reset} {} {green}{}{reset}",
                hop.star.label(palette),
                format_light_years(hop.jump_light_years),
                reset = palette.reset,
                green = palette.green,
            );
        }
        out
    }
}

/// Overview of a snapshot from the viewing player's side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub name: String,
    pub tick: u64,
    pub ticks_to_production: u32,
    pub viewer: PlayerId,
    pub alias: String,
    pub stars_owned: Vec<String>,
    pub fleets_owned: usize,
    pub ships_in_fleets: u32,
    pub graph_stars: usize,
    pub graph_edges: usize,
    pub radius_light_years: f64,
}

impl SummaryReport {
    pub fn build(galaxy: &Galaxy) -> triton_lib::Result<Self> {
        let viewer = galaxy.viewing_player()?;
        let graph = TravelGraph::build(galaxy)?;
        let (fleets_owned, ships_in_fleets) = galaxy
            .fleets_owned_by(viewer.id)
            .fold((0, 0), |(count, ships), fleet| (count + 1, ships + fleet.ships));

        Ok(Self {
            name: galaxy.name.clone(),
            tick: galaxy.tick,
            ticks_to_production: galaxy.ticks_to_production(),
            viewer: viewer.id,
            alias: viewer.alias.clone(),
            stars_owned: galaxy
                .stars_owned_by(viewer.id)
                .map(|star| star.name.clone())
                .collect(),
            fleets_owned,
            ships_in_fleets,
            graph_stars: graph.star_count(),
            graph_edges: graph.edge_count(),
            radius_light_years: to_light_years(graph.radius()),
        })
    }
}

impl TextReport for SummaryReport {
    fn render_text(&self, _palette: &ColorPalette) -> String {
        let mut out = format!(
            "{} at tick {} (production in {} ticks)",
            self.name, self.tick, self.ticks_to_production
        );
        let _ = write!(
            out,
            "\nViewer: {} ({}), {} stars, {} fleets, {} ships",
            self.alias,
            self.viewer,
            self.stars_owned.len(),
            self.fleets_owned,
            self.ships_in_fleets
        );
        if !self.stars_owned.is_empty() {
            let _ = write!(out, "\nStars: {}", self.stars_owned.join(", "));
        }
        let _ = write!(
            out,
            "\nTravel graph: {} stars, {} edges, radius {}",
            self.graph_stars,
            self.graph_edges,
            format_light_years(self.radius_light_years)
        );
        out
    }
}

/// A validated snapshot copied to its destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub name: String,
    pub stars: usize,
    pub fleets: usize,
    pub players: usize,
    pub path: String,
}

impl ImportReport {
    pub fn build(galaxy: &Galaxy, path: &Path) -> Self {
        Self {
            name: galaxy.name.clone(),
            stars: galaxy.stars.len(),
            fleets: galaxy.fleets.len(),
            players: galaxy.players.len(),
            path: path.display().to_string(),
        }
    }
}

impl TextReport for ImportReport {
    fn render_text(&self, _palette: &ColorPalette) -> String {
        format!(
            "Imported {} ({} stars, {} fleets, {} players) to {}",
            self.name, self.stars, self.fleets, self.players, self.path
        )
    }
}

/// An encoded order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrdersReport {
    pub count: usize,
    pub encoded: String,
}

impl TextReport for OrdersReport {
    fn render_text(&self, _palette: &ColorPalette) -> String {
        self.encoded.clone()
    }
}

/// A game request ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestReport {
    pub path: String,
    pub form: Vec<(&'static str, String)>,
}

impl RequestReport {
    pub fn build(request: &GameRequest, game: &str, api_version: u32) -> Self {
        Self {
            path: request.path(),
            form: request.form(game, api_version),
        }
    }

    pub fn server(request: &ServerRequest) -> Self {
        Self {
            path: request.path(),
            form: request.form(),
        }
    }
}

impl TextReport for RequestReport {
    fn render_text(&self, _palette: &ColorPalette) -> String {
        let mut out = format!("POST {}", self.path);
        for (name, value) in &self.form {
            let _ = write!(out, "\n{name}={value}");
        }
        out
    }
}
