//! Fleet orders and the positional string format the order endpoint expects.
//!
//! The game does not accept one record per order. Instead every field is
//! projected across the whole order list and the four projections are sent
//! side by side:
//!
//! ```text
//! delays,targets,actions,ships
//! 0_2,5_9,1_2,10_0
//! ```
//!
//! The projections are parallel arrays, so they must always have the same
//! length. [`encode_orders`] builds them from one fixed-size record per
//! order, which keeps the lengths equal without a separate check.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::snapshot::StarId;

/// What a fleet does once it reaches an order's target star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ShipAction {
    DoNothing,
    CollectAll,
    DropAll,
    Collect,
    Drop,
    CollectAllBut,
    DropAllBut,
    GarrisonStar,
}

impl ShipAction {
    /// Every action, in code order.
    pub const ALL: [ShipAction; 8] = [
        ShipAction::DoNothing,
        ShipAction::CollectAll,
        ShipAction::DropAll,
        ShipAction::Collect,
        ShipAction::Drop,
        ShipAction::CollectAllBut,
        ShipAction::DropAllBut,
        ShipAction::GarrisonStar,
    ];

    /// Numeric code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            ShipAction::DoNothing => 0,
            ShipAction::CollectAll => 1,
            ShipAction::DropAll => 2,
            ShipAction::Collect => 3,
            ShipAction::Drop => 4,
            ShipAction::CollectAllBut => 5,
            ShipAction::DropAllBut => 6,
            ShipAction::GarrisonStar => 7,
        }
    }

    /// Name as shown in the game UI.
    pub fn label(self) -> &'static str {
        match self {
            ShipAction::DoNothing => "Do Nothing",
            ShipAction::CollectAll => "Collect All",
            ShipAction::DropAll => "Drop All",
            ShipAction::Collect => "Collect",
            ShipAction::Drop => "Drop",
            ShipAction::CollectAllBut => "Collect All But",
            ShipAction::DropAllBut => "Drop All But",
            ShipAction::GarrisonStar => "Garrison Star",
        }
    }
}

impl fmt::Display for ShipAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for ShipAction {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        ShipAction::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(Error::InvalidActionCode {
                code: u64::from(code),
            })
    }
}

impl From<ShipAction> for u8 {
    fn from(action: ShipAction) -> Self {
        action.code()
    }
}

/// Accepts the UI label ("Collect All") or a kebab-case form ("collect-all"),
/// case-insensitively.
impl FromStr for ShipAction {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let wanted = normalise_action_name(value);
        ShipAction::ALL
            .into_iter()
            .find(|action| normalise_action_name(action.label()) == wanted)
            .ok_or_else(|| Error::UnknownAction {
                name: value.to_string(),
            })
    }
}

fn normalise_action_name(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// A single queued order for a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u64; 4]", into = "[u64; 4]")]
pub struct ShipOrder {
    /// Ticks to wait at the target before moving on.
    pub delay: u32,
    pub target: StarId,
    pub action: ShipAction,
    /// Ship count used by the counted actions.
    pub ships: u32,
}

impl ShipOrder {
    pub fn new(delay: u32, target: StarId, action: ShipAction, ships: u32) -> Self {
        Self {
            delay,
            target,
            action,
            ships,
        }
    }

    /// The four wire fields of this order, in segment order.
    fn fields(&self) -> [String; 4] {
        [
            self.delay.to_string(),
            self.target.to_string(),
            self.action.code().to_string(),
            self.ships.to_string(),
        ]
    }
}

/// Decode the `[delay, star, action, ships]` tuple used in fleet snapshots.
impl TryFrom<[u64; 4]> for ShipOrder {
    type Error = Error;

    fn try_from([delay, target, action, ships]: [u64; 4]) -> Result<Self> {
        let action = u8::try_from(action)
            .map_err(|_| Error::InvalidActionCode { code: action })
            .and_then(ShipAction::try_from)?;
        Ok(Self {
            delay: narrow(delay, "delay")?,
            target,
            action,
            ships: narrow(ships, "ship count")?,
        })
    }
}

impl From<ShipOrder> for [u64; 4] {
    fn from(order: ShipOrder) -> Self {
        [
            u64::from(order.delay),
            order.target,
            u64::from(order.action.code()),
            u64::from(order.ships),
        ]
    }
}

fn narrow(value: u64, field: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::MalformedOrders {
        message: format!("{field} {value} out of range"),
    })
}

/// Encode orders into the `delays,targets,actions,ships` format.
///
/// An empty slice encodes to `",,,"`.
pub fn encode_orders(orders: &[ShipOrder]) -> String {
    let mut segments: [Vec<String>; 4] = Default::default();
    for order in orders {
        for (segment, field) in segments.iter_mut().zip(order.fields()) {
            segment.push(field);
        }
    }
    segments
        .iter()
        .map(|segment| segment.join("_"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse the positional format produced by [`encode_orders`].
pub fn decode_orders(encoded: &str) -> Result<Vec<ShipOrder>> {
    let segments: Vec<&str> = encoded.split(',').collect();
    if segments.len() != 4 {
        return Err(Error::MalformedOrders {
            message: format!("expected 4 segments, found {}", segments.len()),
        });
    }
    if segments.iter().all(|segment| segment.is_empty()) {
        return Ok(Vec::new());
    }

    let columns = segments
        .iter()
        .map(|segment| parse_segment(segment))
        .collect::<Result<Vec<_>>>()?;
    let len = columns[0].len();
    if let Some(bad) = columns.iter().find(|column| column.len() != len) {
        return Err(Error::MalformedOrders {
            message: format!("segment lengths differ ({} vs {})", len, bad.len()),
        });
    }

    (0..len)
        .map(|i| ShipOrder::try_from([columns[0][i], columns[1][i], columns[2][i], columns[3][i]]))
        .collect()
}

fn parse_segment(segment: &str) -> Result<Vec<u64>> {
    segment
        .split('_')
        .map(|value| {
            value.parse::<u64>().map_err(|_| Error::MalformedOrders {
                message: format!("{value:?} is not a number"),
            })
        })
        .collect()
}
