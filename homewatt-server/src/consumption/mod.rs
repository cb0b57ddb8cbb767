//! Electricity consumption aggregation over a house snapshot.
//!
//! Everything here is pure: callers load a [`DeviceTree`] once and pass the
//! reference instant explicitly.

mod hourly;
mod monthly;
mod tree;

pub use hourly::{HOURS_IN_WINDOW, hourly_histogram};
pub use monthly::{monthly_total, start_of_month};
pub use tree::{DeviceNode, DeviceTree, Location, RoomNode, SubRoomNode};

/// Rounds watt-hours to three decimals.
///
/// Rounding works on the exact decimal value of `value`, so a double stored
/// just below a half step (1.0005 is 1.000499...) rounds down.
pub fn round_energy(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}
