use time::OffsetDateTime;

use super::round_energy;
use super::tree::DeviceNode;

pub const HOURS_IN_WINDOW: usize = 24;

const NANOS_PER_HOUR: i128 = 60 * 60 * 1_000_000_000;

/// Energy per hour over the trailing day, oldest bucket first.
///
/// A record that is `h` whole hours old (`h` rounded down) lands in bucket
/// `23 - h`; records from the future or 24 hours and older are ignored.
pub fn hourly_histogram<'a, I>(devices: I, now: OffsetDateTime) -> [f64; HOURS_IN_WINDOW]
where
    I: IntoIterator<Item = &'a DeviceNode>,
{
    let mut buckets = [0.0; HOURS_IN_WINDOW];

    for node in devices {
        for record in &node.records {
            let Some(bucket) = bucket_index(now, record.time) else {
                continue;
            };

            buckets[bucket] += record.energy;
        }
    }

    buckets.map(round_energy)
}

fn bucket_index(now: OffsetDateTime, time: OffsetDateTime) -> Option<usize> {
    let hours_ago = (now - time).whole_nanoseconds().div_euclid(NANOS_PER_HOUR);

    usize::try_from(hours_ago)
        .ok()
        .filter(|&hours| hours < HOURS_IN_WINDOW)
        .map(|hours| HOURS_IN_WINDOW - 1 - hours)
}
