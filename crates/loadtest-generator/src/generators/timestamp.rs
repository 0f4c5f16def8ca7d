//! Timestamp value generators.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use search_types::FieldValue;

/// Width of the window `created_at` values are drawn from, ending at generation time.
pub const CREATED_AT_WINDOW_DAYS: i64 = 365;

/// Generate a random timestamp uniformly in `[now - window, now]`.
///
/// Microsecond resolution, matching the wire format.
pub fn generate_timestamp_within<R: Rng>(
    rng: &mut R,
    now: DateTime<Utc>,
    window: Duration,
) -> FieldValue {
    let window_micros = window.num_microseconds().unwrap_or(i64::MAX).max(0);
    let offset = rng.random_range(0..=window_micros);
    let dt = now
        .checked_sub_signed(Duration::microseconds(offset))
        .unwrap_or(now);
    FieldValue::Date(dt)
}
