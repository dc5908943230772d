use std::str::FromStr;

use keepbaby_plugin_api::PluginLocation;
use rust_decimal::{Decimal, RoundingStrategy};

/// Render a location as `"(123.45, 64.00, -2345.67) in world_nether"`.
pub fn format_location(location: &PluginLocation) -> String {
    format!(
        "({}, {}, {}) in {}",
        coordinate(location.x),
        coordinate(location.y),
        coordinate(location.z),
        location.world
    )
}

/// Two decimals, ties rounded away from zero on the shortest decimal form
/// of `value` (2.675 becomes 2.68).
fn coordinate(value: f64) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(d) => format!(
            "{:.2}",
            d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        // out of range or not finite
        Err(_) => format!("{value:.2}"),
    }
}
