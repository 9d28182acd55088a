use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use triton_cli::output::OutputFormat;
use triton_lib::ShipOrder;

mod commands;

use commands::orders::parse_order;
use commands::request::RequestArgs;
use commands::route::RouteArgs;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Galaxy snapshot queries, route planning and order encoding"
)]
struct Cli {
    /// Snapshot file, or a directory holding snapshot.json. Falls back to
    /// the TRITON_SNAPSHOT environment variable.
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Straight-line distance between two stars.
    Distance {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// Stars within one jump of a star, using the viewer's propulsion.
    Reach {
        /// Origin star (name or id).
        star: String,
    },
    /// Plan a route between two stars.
    Route(RouteArgs),
    /// Encode fleet orders in the game's parallel-list format.
    EncodeOrders {
        /// `delay:star:action:ships`; repeat for each order.
        #[arg(long = "order", value_parser = parse_order)]
        orders: Vec<ShipOrder>,
    },
    /// Show the form a game API call would post.
    Request(RequestArgs),
    /// Viewer holdings, production timing and travel graph size.
    Summary,
    /// Validate a snapshot and store it for later commands.
    Import {
        /// Snapshot file, or a directory holding snapshot.json.
        source: PathBuf,
        /// Destination file. Defaults to the platform data directory.
        #[arg(long = "to")]
        to: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let snapshot = cli.snapshot.as_deref();

    match &cli.command {
        Command::Distance { from, to } => {
            commands::spatial::handle_distance(snapshot, cli.format, from, to)
        }
        Command::Reach { star } => commands::spatial::handle_reach(snapshot, cli.format, star),
        Command::Route(args) => commands::route::handle_route_command(snapshot, cli.format, args),
        Command::EncodeOrders { orders } => {
            commands::orders::handle_encode_orders(cli.format, orders)
        }
        Command::Request(args) => commands::request::handle_request(cli.format, args),
        Command::Summary => commands::snapshot::handle_summary(snapshot, cli.format),
        Command::Import { source, to } => {
            commands::snapshot::handle_import(source, to.as_deref(), cli.format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
