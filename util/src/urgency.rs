//! Display-only proximity labels for events.
//!
//! Urgency is derived from an event's date relative to "now" every time it is
//! rendered. It is never persisted and never consulted for authorization.

use chrono::{DateTime, Utc};
use serde::Serialize;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Coarse proximity bucket for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyKind {
    Passed,
    Today,
    Tomorrow,
    Soon,
    Upcoming,
    Normal,
}

/// Urgency label attached to events in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Urgency {
    pub days: i64,
    #[serde(rename = "type")]
    pub kind: UrgencyKind,
    pub message: String,
}

/// Whole days remaining until `event_date`, rounded up.
///
/// An event twelve hours away is one day away; an event that started twelve
/// hours ago is zero days away (still "today"); a day and a bit ago is `-1`.
pub fn days_until(event_date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let diff_ms = (event_date - now).num_milliseconds();
    // ceil(diff / day) for a positive divisor
    -((-diff_ms).div_euclid(MILLIS_PER_DAY))
}

/// Computes the urgency label for an event.
pub fn urgency(event_date: DateTime<Utc>, now: DateTime<Utc>) -> Urgency {
    let days = days_until(event_date, now);

    let (kind, message) = match days {
        d if d < 0 => (UrgencyKind::Passed, "Event ended".to_string()),
        0 => (UrgencyKind::Today, "Today!".to_string()),
        1 => (UrgencyKind::Tomorrow, "Tomorrow!".to_string()),
        2..=3 => (UrgencyKind::Soon, format!("In {days} days")),
        4..=7 => (UrgencyKind::Upcoming, format!("In {days} days")),
        _ => (UrgencyKind::Normal, String::new()),
    };

    Urgency {
        days,
        kind,
        message,
    }
}

pub fn is_today(event_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    days_until(event_date, now) == 0
}

pub fn is_tomorrow(event_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    days_until(event_date, now) == 1
}

/// True when the event is between today and seven days out, inclusive.
pub fn is_within_week(event_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    (0..=7).contains(&days_until(event_date, now))
}
