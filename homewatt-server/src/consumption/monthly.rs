use time::{OffsetDateTime, Time};

use super::round_energy;
use super::tree::DeviceNode;

/// Midnight of the first day of `now`'s month, in `now`'s offset.
pub fn start_of_month(now: OffsetDateTime) -> OffsetDateTime {
    let midnight = now.replace_time(Time::MIDNIGHT);

    // Day 1 exists in every month
    midnight.replace_day(1).unwrap_or(midnight)
}

/// Energy recorded since the start of the current month.
///
/// There is no upper bound: a record dated later than `now` still counts.
pub fn monthly_total<'a, I>(devices: I, now: OffsetDateTime) -> f64
where
    I: IntoIterator<Item = &'a DeviceNode>,
{
    let start = start_of_month(now);

    let total: f64 = devices
        .into_iter()
        .flat_map(|node| node.records.iter())
        .filter(|record| record.time >= start)
        .map(|record| record.energy)
        .sum();

    round_energy(total)
}
