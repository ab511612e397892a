use crate::{DAY, DAYS_SINCE_OFFSET, Timestamp, time_from_string};
use chrono::Utc;

/// Current wall-clock time as epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Returns a function measuring how many milliseconds a point lies before
/// the fixed reference instant `now`. Positive results are in the past,
/// negative results are in the future. The returned function depends only
/// on its captured reference, never on the wall clock.
pub fn time_diff(now: i64) -> impl Fn(Timestamp) -> i64 {
    move |when| now - when.epoch_millis()
}

/// Whole days from `when` up to `now`, or up to the wall clock when `now`
/// is `None`. The difference is floored to full days and shifted by one,
/// so a point earlier the same day reports as 1 rather than 0.
pub fn days_since(when: Timestamp, now: Option<i64>) -> i64 {
    let reference = now.unwrap_or_else(now_millis);
    time_diff(reference)(when).div_euclid(DAY) + DAYS_SINCE_OFFSET
}

/// Distance in whole days regardless of direction, measured against the
/// wall clock when `now` is `None`.
pub fn days_from(when: Timestamp, now: Option<i64>) -> i64 {
    days_since(when, now).abs()
}

/// Fractional days from `from` to `to`, both given as date strings.
/// Returns `None` when either string is not a valid date. Unlike
/// [`days_since`] the result is neither floored nor shifted by one.
pub fn days_between(from: &str, to: &str) -> Option<f64> {
    let from_millis = time_from_string(from)?;
    let to_millis = time_from_string(to)?;
    Some((to_millis - from_millis) as f64 / DAY as f64)
}
