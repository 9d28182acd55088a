//! Descriptions of game and account-server API calls.
//!
//! Every game call is a form post to `/grequest/<type>` carrying the request
//! type, the API version and the game number, followed by call-specific
//! fields. Account-server calls go to `/mrequest/<type>` and carry only the
//! type. This module only builds those field lists; sending them, and the
//! session cookie that goes with them, belong to the transport layer.

use std::fmt;

use serde::Serialize;

use crate::orders::{encode_orders, ShipOrder};
use crate::snapshot::{FleetId, StarId};

/// API version sent with every game request unless overridden.
pub const DEFAULT_API_VERSION: u32 = 7;

/// Message folders that can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageGroup {
    /// Messages from other players.
    Diplomacy,
    /// Game event notifications.
    Event,
}

impl MessageGroup {
    fn as_str(self) -> &'static str {
        match self {
            MessageGroup::Diplomacy => "game_diplomacy",
            MessageGroup::Event => "game_event",
        }
    }
}

impl fmt::Display for MessageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Star infrastructure that can be bought with cash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Upgrade {
    Economy,
    Industry,
    Science,
}

impl Upgrade {
    fn order_name(self) -> &'static str {
        match self {
            Upgrade::Economy => "upgrade_economy",
            Upgrade::Industry => "upgrade_industry",
            Upgrade::Science => "upgrade_science",
        }
    }
}

/// A game request: its type plus call-specific form fields, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRequest {
    pub kind: &'static str,
    pub fields: Vec<(&'static str, String)>,
}

impl GameRequest {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    fn field(mut self, name: &'static str, value: impl ToString) -> Self {
        self.fields.push((name, value.to_string()));
        self
    }

    fn order(kind: &'static str, order: String) -> Self {
        Self::new(kind).field("order", order)
    }

    /// Fetch the whole galaxy as seen by the logged-in player.
    pub fn full_universe_report() -> Self {
        Self::order("order", "full_universe_report".to_string())
    }

    /// Buy one level of `upgrade` on `star` at the quoted `price`.
    pub fn upgrade(upgrade: Upgrade, star: StarId, price: u64) -> Self {
        Self::order(
            "batched_orders",
            format!("{},{},{}", upgrade.order_name(), star, price),
        )
    }

    pub fn upgrade_economy(star: StarId, price: u64) -> Self {
        Self::upgrade(Upgrade::Economy, star, price)
    }

    pub fn upgrade_industry(star: StarId, price: u64) -> Self {
        Self::upgrade(Upgrade::Industry, star, price)
    }

    pub fn upgrade_science(star: StarId, price: u64) -> Self {
        Self::upgrade(Upgrade::Science, star, price)
    }

    /// Replace the order queue of `fleet`. Orders are set, not appended.
    pub fn set_fleet_orders(fleet: FleetId, orders: &[ShipOrder], looped: bool) -> Self {
        Self::order(
            "order",
            format!(
                "add_fleet_orders,{},{},{}",
                fleet,
                encode_orders(orders),
                u8::from(looped)
            ),
        )
    }

    pub fn intel_data() -> Self {
        Self::new("intel_data")
    }

    pub fn unread_count() -> Self {
        Self::new("fetch_unread_count")
    }

    pub fn player_achievements() -> Self {
        Self::new("fetch_player_achievements")
    }

    /// List `count` messages of `group`, skipping the first `offset`.
    pub fn messages(group: MessageGroup, count: u32, offset: u32) -> Self {
        Self::new("fetch_game_messages")
            .field("count", count)
            .field("offset", offset)
            .field("group", group)
    }

    /// Mark a message as read.
    pub fn read_message(message_key: &str) -> Self {
        Self::new("read_game_message").field("message_key", message_key)
    }

    /// URL path of this request, relative to the game host.
    pub fn path(&self) -> String {
        format!("/grequest/{}", self.kind)
    }

    /// Complete form body for `game`.
    pub fn form(&self, game: &str, api_version: u32) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("type", self.kind.to_string()),
            ("version", api_version.to_string()),
            ("game_number", game.to_string()),
        ];
        form.extend(self.fields.iter().cloned());
        form
    }
}

/// A call to the account server, made outside any particular game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerRequest {
    pub kind: &'static str,
}

impl ServerRequest {
    /// Profile of the logged-in player.
    pub fn init_player() -> Self {
        Self {
            kind: "init_player",
        }
    }

    /// Games the logged-in player can join.
    pub fn open_games() -> Self {
        Self { kind: "open_games" }
    }

    pub fn path(&self) -> String {
        format!("/mrequest/{}", self.kind)
    }

    pub fn form(&self) -> Vec<(&'static str, String)> {
        vec![("type", self.kind.to_string())]
    }
}
