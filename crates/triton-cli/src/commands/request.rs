//! `request` handler: prints the form a game or account-server call would post.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};

use triton_cli::output::{OutputFormat, RequestReport};
use triton_lib::{
    FleetId, GameRequest, MessageGroup, ServerRequest, ShipOrder, StarId, Upgrade,
    DEFAULT_API_VERSION,
};

use super::emit;
use super::orders::parse_order;

#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Game number the request is addressed to. Required for game calls.
    #[arg(long)]
    pub game: Option<String>,
    #[arg(long, default_value_t = DEFAULT_API_VERSION)]
    pub api_version: u32,
    #[command(subcommand)]
    pub call: RequestCall,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RequestCall {
    /// Account-server profile of the logged-in player.
    Player,
    /// Account-server list of joinable games.
    OpenGames,
    /// Fetch the full galaxy report.
    Universe,
    /// Buy one level of star infrastructure.
    Upgrade {
        #[arg(value_enum)]
        kind: UpgradeKind,
        #[arg(long)]
        star: StarId,
        #[arg(long)]
        price: u64,
    },
    /// Replace a fleet's order queue.
    FleetOrders {
        #[arg(long)]
        fleet: FleetId,
        /// `delay:star:action:ships`; repeat for each order.
        #[arg(long = "order", value_parser = parse_order)]
        orders: Vec<ShipOrder>,
        /// Repeat the orders once they complete.
        #[arg(long)]
        looped: bool,
    },
    Intel,
    UnreadCount,
    Achievements,
    /// List messages in a folder.
    Messages {
        #[arg(value_enum)]
        group: GroupKind,
        #[arg(long, default_value_t = 10)]
        count: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Mark a message as read.
    ReadMessage { key: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeKind {
    Economy,
    Industry,
    Science,
}

impl From<UpgradeKind> for Upgrade {
    fn from(kind: UpgradeKind) -> Self {
        match kind {
            UpgradeKind::Economy => Upgrade::Economy,
            UpgradeKind::Industry => Upgrade::Industry,
            UpgradeKind::Science => Upgrade::Science,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Diplomacy,
    Event,
}

impl From<GroupKind> for MessageGroup {
    fn from(kind: GroupKind) -> Self {
        match kind {
            GroupKind::Diplomacy => MessageGroup::Diplomacy,
            GroupKind::Event => MessageGroup::Event,
        }
    }
}

/// A resolved call, addressed either to one game or to the account server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Game(GameRequest),
    Server(ServerRequest),
}

impl RequestCall {
    pub fn to_call(&self) -> Call {
        let request = match self {
            RequestCall::Player => return Call::Server(ServerRequest::init_player()),
            RequestCall::OpenGames => return Call::Server(ServerRequest::open_games()),
            RequestCall::Universe => GameRequest::full_universe_report(),
            RequestCall::Upgrade { kind, star, price } => {
                GameRequest::upgrade((*kind).into(), *star, *price)
            }
            RequestCall::FleetOrders {
                fleet,
                orders,
                looped,
            } => GameRequest::set_fleet_orders(*fleet, orders, *looped),
            RequestCall::Intel => GameRequest::intel_data(),
            RequestCall::UnreadCount => GameRequest::unread_count(),
            RequestCall::Achievements => GameRequest::player_achievements(),
            RequestCall::Messages {
                group,
                count,
                offset,
            } => GameRequest::messages((*group).into(), *count, *offset),
            RequestCall::ReadMessage { key } => GameRequest::read_message(key),
        };
        Call::Game(request)
    }
}

pub fn handle_request(format: OutputFormat, args: &RequestArgs) -> Result<()> {
    let report = match args.call.to_call() {
        Call::Server(request) => RequestReport::server(&request),
        Call::Game(request) => {
            let game = args
                .game
                .as_deref()
                .context("game requests need --game <NUMBER>")?;
            RequestReport::build(&request, game, args.api_version)
        }
    };
    emit(&report, format)
}
