//! Schedule time math: "HH:MM" parsing, the interval overlap predicate used
//! for conflict detection, and the schedule status state machine.
//!
//! Times are 24-hour `"HH:MM"` strings compared as minutes since midnight.
//! Entries are same-day only; an end at or before the start is rejected at
//! the boundary, so persisted ranges always run forward.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_IN_PROGRESS: &str = "in-progress";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";
pub const STATUS_POSTPONED: &str = "postponed";

/// All valid schedule entry status values.
pub const VALID_SCHEDULE_STATUSES: &[&str] = &[
    STATUS_DRAFT,
    STATUS_CONFIRMED,
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
    STATUS_POSTPONED,
];

/// Schedule entry status state machine.
///
/// The happy path is `draft -> confirmed -> in-progress -> completed`;
/// `cancelled` and `postponed` are reachable from any non-terminal state,
/// and a postponed entry can be rescheduled back to `draft` or `confirmed`.
///
/// The API's update handler accepts status changes unconditionally (status
/// at that layer is informational); this machine documents the intended
/// lifecycle and backs the assignment-status defaults.
pub mod schedule_status {
    use super::{
        STATUS_CANCELLED, STATUS_COMPLETED, STATUS_CONFIRMED, STATUS_DRAFT, STATUS_IN_PROGRESS,
        STATUS_POSTPONED,
    };

    /// Returns the set of valid target statuses reachable from `from`.
    pub fn valid_transitions(from: &str) -> &'static [&'static str] {
        match from {
            STATUS_DRAFT => &[STATUS_CONFIRMED, STATUS_CANCELLED, STATUS_POSTPONED],
            STATUS_CONFIRMED => &[STATUS_IN_PROGRESS, STATUS_CANCELLED, STATUS_POSTPONED],
            STATUS_IN_PROGRESS => &[STATUS_COMPLETED, STATUS_CANCELLED, STATUS_POSTPONED],
            STATUS_POSTPONED => &[STATUS_DRAFT, STATUS_CONFIRMED, STATUS_CANCELLED],
            // Terminal states (completed, cancelled), or unknown.
            _ => &[],
        }
    }

    /// Check whether a transition from `from` to `to` is valid.
    pub fn can_transition(from: &str, to: &str) -> bool {
        valid_transitions(from).contains(&to)
    }
}

// ---------------------------------------------------------------------------
// Time parsing
// ---------------------------------------------------------------------------

/// Parse a 24-hour `"HH:MM"` string into minutes since midnight.
///
/// Rejects anything that is not exactly two colon-separated numeric fields
/// with hours 0-23 and minutes 0-59.
pub fn parse_time(time: &str) -> Result<i32, CoreError> {
    let invalid = || CoreError::Validation(format!("Invalid time '{time}', expected 24-hour HH:MM"));

    let (hh, mm) = time.split_once(':').ok_or_else(invalid)?;
    if hh.len() != 2 || mm.len() != 2 {
        return Err(invalid());
    }
    // Digits only: i32's FromStr would accept a sign here ("+9" parses).
    if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let hours: i32 = hh.parse().map_err(|_| invalid())?;
    let minutes: i32 = mm.parse().map_err(|_| invalid())?;
    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Validate a same-day time range at the data-entry boundary.
///
/// The end must be strictly after the start: entries spanning midnight are
/// rejected rather than silently producing a negative duration.
pub fn validate_time_range(start_time: &str, end_time: &str) -> Result<(), CoreError> {
    let start = parse_time(start_time)?;
    let end = parse_time(end_time)?;
    if end <= start {
        return Err(CoreError::Validation(format!(
            "End time {end_time} must be after start time {start_time} (same-day only)"
        )));
    }
    Ok(())
}

/// Reject schedule status values outside the closed set.
pub fn validate_schedule_status(status: &str) -> Result<(), CoreError> {
    if !VALID_SCHEDULE_STATUSES.contains(&status) {
        return Err(CoreError::Validation(format!(
            "Unknown schedule status '{status}'"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Overlap predicate
// ---------------------------------------------------------------------------

/// Inclusive three-way interval overlap test on minute values.
///
/// Boundaries count: an entry ending exactly when the query starts is a
/// conflict (back-to-back scheduling is flagged). The relation is
/// symmetric.
pub fn intervals_overlap(
    existing_start: i32,
    existing_end: i32,
    query_start: i32,
    query_end: i32,
) -> bool {
    (existing_start <= query_start && query_start <= existing_end)
        || (existing_start <= query_end && query_end <= existing_end)
        || (query_start <= existing_start && existing_end <= query_end)
}

/// String-level overlap test: parses both ranges and applies
/// [`intervals_overlap`]. Errors only on malformed times.
pub fn times_overlap(
    existing_start: &str,
    existing_end: &str,
    query_start: &str,
    query_end: &str,
) -> Result<bool, CoreError> {
    Ok(intervals_overlap(
        parse_time(existing_start)?,
        parse_time(existing_end)?,
        parse_time(query_start)?,
        parse_time(query_end)?,
    ))
}
