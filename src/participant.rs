//! Roster record types consumed by the overlap engine.
//!
//! Participants are owned by the caller (the roster/UI layer); the engine
//! reads them within one synchronous call and never retains or mutates them.
//! Display-only record fields (name, role, avatar, map location) belong to
//! the presentation layer and are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Local working hours as whole clock hours in `[0, 24)`.
///
/// `start == end` denotes a zero-length window (never available).
/// `end < start` denotes a window crossing local midnight: `start = 22`,
/// `end = 6` means 22:00–24:00 plus 00:00–06:00 local.
///
/// Range validity is the caller's contract — the engine does not validate
/// out-of-range values; clamp or reject them at data-entry time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: u32,
    pub end: u32,
}

/// One roster member, as handed over by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Opaque identifier, stable across recomputations.
    pub id: String,
    /// IANA timezone name (e.g., "Europe/Paris"), validated only by offset
    /// resolution succeeding.
    pub timezone: String,
    /// Working hours on the participant's local clock.
    pub working_hours: WorkingHours,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_presentation_layer_record() {
        // The roster layer ships richer records; the engine reads only the
        // scheduling fields and skips the rest.
        let json = r#"{
            "id": "user-2",
            "firstName": "Bruno",
            "lastName": "Martin",
            "role": "Developer",
            "timezone": "America/New_York",
            "workingHours": { "start": 9, "end": 17 },
            "location": [-73.9352, 40.7306]
        }"#;

        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "user-2");
        assert_eq!(p.timezone, "America/New_York");
        assert_eq!(p.working_hours, WorkingHours { start: 9, end: 17 });
    }

    #[test]
    fn test_serialize_camel_case() {
        let p = Participant {
            id: "user-1".to_string(),
            timezone: "Asia/Dubai".to_string(),
            working_hours: WorkingHours { start: 9, end: 18 },
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"workingHours\""), "got: {json}");
    }
}
