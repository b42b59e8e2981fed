//! # overlap-engine
//!
//! Timezone-aware meeting-slot computation for distributed teams.
//!
//! Given a roster of participants, each with local working hours in an IANA
//! timezone, the engine projects those hours onto a shared 24-hour UTC
//! timeline, intersects availability across any invited subset, and ranks the
//! resulting windows to pick a single best meeting slot.
//!
//! All functions are pure over their inputs: no shared state, no I/O, no
//! system clock access — every instant-dependent operation takes an explicit
//! `DateTime<Utc>` anchor, and interactive callers pass `Utc::now()` on each
//! recomputation. UTC offsets vary with daylight saving, so a result is only
//! valid for the anchor it was computed with.
//!
//! ## Modules
//!
//! - [`timezone`] — IANA zone → fractional UTC offset, local-hour conversion
//! - [`participant`] — roster record types consumed by the engine
//! - [`overlap`] — per-hour availability, slot intersection, best-slot ranking
//! - [`roster`] — invited-participant selection maintained by the caller
//! - [`error`] — Error types

pub mod error;
pub mod overlap;
pub mod participant;
pub mod roster;
pub mod timezone;

pub use error::OverlapError;
pub use overlap::{
    best_meeting_slot, find_overlap_slots, hourly_availability, is_available_at_hour, utc_range,
    TimeSlot,
};
pub use participant::{Participant, WorkingHours};
pub use roster::InvitedSet;
pub use timezone::{local_to_utc_hour, resolve_offset_hours};
