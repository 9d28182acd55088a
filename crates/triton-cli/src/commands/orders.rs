//! `encode-orders` handler and the `--order` argument parser.

use anyhow::Result;

use triton_cli::output::{OrdersReport, OutputFormat};
use triton_lib::{encode_orders, ShipAction, ShipOrder, StarId};

use super::emit;

/// Parse `delay:star:action:ships`, where `action` is a code (0-7) or a name
/// such as `collect-all`.
pub fn parse_order(value: &str) -> Result<ShipOrder, String> {
    let parts: Vec<&str> = value.split(':').collect();
    let [delay, target, action, ships] = parts.as_slice() else {
        return Err(format!("expected delay:star:action:ships, got '{value}'"));
    };

    let delay = delay
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid delay '{delay}': {e}"))?;
    let target = target
        .trim()
        .parse::<StarId>()
        .map_err(|e| format!("invalid star id '{target}': {e}"))?;
    let action = match action.trim().parse::<u8>() {
        Ok(code) => ShipAction::try_from(code),
        Err(_) => action.parse::<ShipAction>(),
    }
    .map_err(|e| e.to_string())?;
    let ships = ships
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid ship count '{ships}': {e}"))?;

    Ok(ShipOrder::new(delay, target, action, ships))
}

pub fn handle_encode_orders(format: OutputFormat, orders: &[ShipOrder]) -> Result<()> {
    let report = OrdersReport {
        count: orders.len(),
        encoded: encode_orders(orders),
    };
    emit(&report, format)
}
