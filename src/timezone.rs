//! Timezone resolution and local→UTC hour conversion.
//!
//! Offsets are expressed in fractional hours so half- and quarter-hour zones
//! (Asia/Kolkata at +5.5, Asia/Kathmandu at +5.75) survive conversion
//! exactly. An offset depends on the instant it is sampled at (daylight
//! saving), so both operations take the anchor explicitly.

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;

use crate::error::{OverlapError, Result};

/// Resolve the UTC offset, in fractional hours, of an IANA timezone at an
/// instant.
///
/// The offset is the zone's wall clock minus the UTC wall clock for the same
/// instant, so zones east of Greenwich are positive and zones west are
/// negative.
///
/// # Errors
///
/// Returns [`OverlapError::InvalidTimezone`] if the name does not resolve.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use overlap_engine::timezone::resolve_offset_hours;
///
/// let at = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
/// assert_eq!(resolve_offset_hours("Asia/Tokyo", at).unwrap(), 9.0);
/// ```
pub fn resolve_offset_hours(timezone: &str, at: DateTime<Utc>) -> Result<f64> {
    let tz = parse_timezone(timezone)?;
    let local = at.with_timezone(&tz);
    Ok(f64::from(local.offset().fix().local_minus_utc()) / 3600.0)
}

/// Map a local clock hour (real number in `[0, 24)`) to its UTC equivalent.
///
/// Computes `(local_hour − offset) mod 24` with a modulo that is always
/// non-negative, so the result stays in `[0, 24)` whatever the sign of the
/// offset. No flooring is applied; callers bucket into whole hours
/// themselves.
///
/// # Errors
///
/// Returns [`OverlapError::InvalidTimezone`] if the name does not resolve.
pub fn local_to_utc_hour(local_hour: f64, timezone: &str, at: DateTime<Utc>) -> Result<f64> {
    let offset = resolve_offset_hours(timezone, at)?;
    Ok((local_hour - offset).rem_euclid(24.0))
}

/// Parse an IANA timezone string into `Tz`.
fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| OverlapError::InvalidTimezone(format!("'{s}'")))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn june_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    fn january_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_utc_offset_is_zero() {
        assert_eq!(resolve_offset_hours("UTC", june_noon()).unwrap(), 0.0);
    }

    #[test]
    fn test_utc_conversion_is_identity() {
        for h in 0..24 {
            let local = f64::from(h);
            assert_eq!(
                local_to_utc_hour(local, "UTC", june_noon()).unwrap(),
                local,
                "hour {h}"
            );
        }
    }

    #[test]
    fn test_tokyo_wraps_past_midnight() {
        // Asia/Tokyo is UTC+9 year-round.
        let at = june_noon();
        assert_eq!(local_to_utc_hour(9.0, "Asia/Tokyo", at).unwrap(), 0.0);
        assert_eq!(local_to_utc_hour(0.0, "Asia/Tokyo", at).unwrap(), 15.0);
    }

    #[test]
    fn test_half_hour_offset_preserved() {
        let at = june_noon();
        assert_eq!(resolve_offset_hours("Asia/Kolkata", at).unwrap(), 5.5);
        assert_eq!(local_to_utc_hour(9.0, "Asia/Kolkata", at).unwrap(), 3.5);
    }

    #[test]
    fn test_quarter_hour_offset_preserved() {
        assert_eq!(
            resolve_offset_hours("Asia/Kathmandu", june_noon()).unwrap(),
            5.75
        );
    }

    #[test]
    fn test_negative_offset() {
        // January 15 is EST (UTC-5).
        let at = january_noon();
        assert_eq!(
            resolve_offset_hours("America/New_York", at).unwrap(),
            -5.0
        );
        assert_eq!(
            local_to_utc_hour(9.0, "America/New_York", at).unwrap(),
            14.0
        );
    }

    #[test]
    fn test_offset_varies_with_dst() {
        let winter = resolve_offset_hours("America/New_York", january_noon()).unwrap();
        let summer = resolve_offset_hours("America/New_York", june_noon()).unwrap();
        assert_eq!(winter, -5.0);
        assert_eq!(summer, -4.0);
    }

    #[test]
    fn test_invalid_timezone_returns_error() {
        let result = resolve_offset_hours("Not/A_Zone", june_noon());
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid timezone"), "got: {err}");
    }
}
