use chrono::{DateTime, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Hours from `start` to `end`, negative if `end` comes first.
#[expect(clippy::cast_precision_loss, reason = "millisecond counts stay far below 2^52")]
#[must_use]
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_HOUR
}
