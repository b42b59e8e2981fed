//! Availability intersection over the 24-hour UTC ring.
//!
//! Each participant's local working hours are converted to a UTC interval
//! with fractional bounds, evaluated hour by hour (buckets 0–23), and
//! intersected across the whole queried set with a single linear scan.
//! Everything is recomputed in full on each call; there is no incremental
//! state to invalidate.
//!
//! # Functions
//!
//! - [`utc_range`] — one participant's working hours as a UTC interval
//! - [`is_available_at_hour`] — per-hour availability predicate
//! - [`hourly_availability`] — the 24-bucket timeline row the UI renders
//! - [`find_overlap_slots`] — maximal windows where everyone is available
//! - [`best_meeting_slot`] — ranking: longest, then closest to "now"

use std::cmp::Ordering;

use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::participant::Participant;
use crate::timezone::local_to_utc_hour;

// ── TimeSlot ────────────────────────────────────────────────────────────────

/// A contiguous UTC window, in whole hours, where every queried participant
/// is available. Boundaries satisfy `0 <= start < end <= 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub start: u32,
    pub end: u32,
}

impl TimeSlot {
    /// Slot length in hours.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Midpoint on the 24-hour ring, in fractional hours.
    fn midpoint(&self) -> f64 {
        f64::from(self.start + self.end) / 2.0
    }
}

// ── Per-participant availability ────────────────────────────────────────────

/// A participant's working hours as a UTC interval with fractional bounds.
///
/// Both boundaries are converted independently through the zone's offset at
/// `at`; `end <= start` after conversion means the window wraps past
/// midnight UTC.
///
/// # Errors
///
/// Returns [`crate::OverlapError::InvalidTimezone`] if the participant's
/// timezone does not resolve.
pub fn utc_range(participant: &Participant, at: DateTime<Utc>) -> Result<(f64, f64)> {
    let hours = participant.working_hours;
    let start_utc = local_to_utc_hour(f64::from(hours.start), &participant.timezone, at)?;
    let end_utc = local_to_utc_hour(f64::from(hours.end), &participant.timezone, at)?;
    Ok((start_utc, end_utc))
}

/// Whether the participant is working during UTC hour `hour` (0–23).
///
/// Fractional UTC boundaries are bucketed with floor/ceil, so a partial hour
/// of availability still marks the whole bucket. A participant whose
/// timezone does not resolve is unavailable at every hour: one bad record
/// must not blank out the computation for everyone else.
pub fn is_available_at_hour(participant: &Participant, hour: u32, at: DateTime<Utc>) -> bool {
    // A zero-length local window converts to start_utc == end_utc, which the
    // wraparound branch below would otherwise read as available all day.
    if participant.working_hours.start == participant.working_hours.end {
        return false;
    }
    let Ok((start_utc, end_utc)) = utc_range(participant, at) else {
        return false;
    };

    let h = f64::from(hour);
    if end_utc > start_utc {
        h >= start_utc.floor() && h < end_utc.ceil()
    } else {
        // Wraps past midnight UTC: [start_utc, 24) ∪ [0, end_utc)
        h >= start_utc.floor() || h < end_utc.ceil()
    }
}

/// Availability for each UTC hour 0–23, for rendering one timeline row.
pub fn hourly_availability(participant: &Participant, at: DateTime<Utc>) -> [bool; 24] {
    std::array::from_fn(|h| is_available_at_hour(participant, h as u32, at))
}

// ── Slot intersection ───────────────────────────────────────────────────────

/// Compute all maximal UTC hour-windows where every participant is available.
///
/// An empty participant list yields no slots: a meeting with nobody invited
/// has no meetable window rather than being unconstrained.
///
/// Slots come back sorted ascending by `start` and never overlap or touch;
/// adjacent available hours merge into one slot.
pub fn find_overlap_slots(participants: &[Participant], at: DateTime<Utc>) -> Vec<TimeSlot> {
    if participants.is_empty() {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut in_slot = false;
    let mut slot_start = 0;

    // Hour 24 is a sentinel that closes a run reaching the end of day.
    for h in 0..=24 {
        let all_available = h < 24 && participants.iter().all(|p| is_available_at_hour(p, h, at));

        if all_available && !in_slot {
            in_slot = true;
            slot_start = h;
        } else if !all_available && in_slot {
            in_slot = false;
            if slot_start < h {
                slots.push(TimeSlot {
                    start: slot_start,
                    end: h,
                });
            }
        }
    }

    slots
}

// ── Best-slot ranking ───────────────────────────────────────────────────────

/// Pick the single best slot: longest duration first, then the slot whose
/// midpoint is circularly closest to `now`'s UTC time-of-day, then the
/// lowest `start`.
///
/// The proximity tie-break favors actionable "soon" windows over equally
/// long ones far away on the ring. Returns `None` when `slots` is empty,
/// i.e. there is no common availability.
pub fn best_meeting_slot(slots: &[TimeSlot], now: DateTime<Utc>) -> Option<TimeSlot> {
    let current = f64::from(now.hour()) + f64::from(now.minute()) / 60.0;

    slots.iter().copied().min_by(|a, b| {
        b.duration()
            .cmp(&a.duration())
            .then_with(|| {
                let dist_a = ring_distance(a.midpoint(), current);
                let dist_b = ring_distance(b.midpoint(), current);
                dist_a.partial_cmp(&dist_b).unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.start.cmp(&b.start))
    })
}

/// Circular distance between two points on the 24-hour ring.
fn ring_distance(a: f64, b: f64) -> f64 {
    let d = a - b;
    d.abs().min((d + 24.0).abs()).min((d - 24.0).abs())
}

// ── Tests ───────────────────────────────────────────────────────────────────
