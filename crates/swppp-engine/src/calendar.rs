//! Inspection deadline arithmetic.
//!
//! A triggering rain event starts a 24-hour clock. The resulting deadline is
//! adjusted to fall inside the site's working hours, then rolled past
//! weekends. Adjustment order is fixed: working-hours clamp first, weekend
//! skip second, with the clamped time-of-day preserved across the skip.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};
use swppp_types::{InspectionDeadline, WorkingHours};
use tracing::debug;

use crate::constants::INSPECTION_WINDOW_HOURS;
use crate::error::EngineError;

/// Reject a malformed working-hours window before any computation proceeds.
pub fn validate_working_hours(hours: &WorkingHours) -> Result<(), EngineError> {
    if hours.start_hour > 23 || hours.end_hour > 23 {
        return Err(EngineError::Configuration(format!(
            "working hours must use 0-23 clock hours (got {}-{})",
            hours.start_hour, hours.end_hour
        )));
    }
    if hours.start_hour >= hours.end_hour {
        return Err(EngineError::Configuration(format!(
            "working-hours window is empty ({}:00 >= {}:00)",
            hours.start_hour, hours.end_hour
        )));
    }
    Ok(())
}

/// Compute the inspection deadline for a triggering event.
///
/// Pure and total: for any valid event timestamp this terminates and returns
/// exactly one deadline, and recomputation from the same inputs yields the
/// same result.
pub fn compute_deadline(
    event_at: NaiveDateTime,
    working_hours: WorkingHours,
) -> Result<NaiveDateTime, EngineError> {
    validate_working_hours(&working_hours)?;

    let raw = event_at + Duration::hours(INSPECTION_WINDOW_HOURS);
    let clamped = clamp_to_working_hours(raw, &working_hours);
    let deadline = skip_weekend(clamped);

    debug!(%event_at, %deadline, "computed inspection deadline");
    Ok(deadline)
}

/// Compute the deadline together with the inputs that produced it, so the
/// stored record can be audited and recomputed.
pub fn compute_deadline_record(
    event_at: NaiveDateTime,
    working_hours: WorkingHours,
) -> Result<InspectionDeadline, EngineError> {
    let deadline_at = compute_deadline(event_at, working_hours)?;
    Ok(InspectionDeadline {
        triggering_event_at: event_at,
        deadline_at,
        working_hours,
    })
}

/// Move a timestamp inside the working-hours window.
///
/// Before opening: same day at opening time. At or after closing: next day
/// at opening time. Minutes are zeroed when the clamp fires; a timestamp
/// already inside the window is untouched.
fn clamp_to_working_hours(raw: NaiveDateTime, hours: &WorkingHours) -> NaiveDateTime {
    if raw.hour() < hours.start_hour {
        start_of_working_day(raw.date(), hours)
    } else if raw.hour() >= hours.end_hour {
        start_of_working_day(raw.date().succ_opt().expect("date overflow"), hours)
    } else {
        raw
    }
}

fn start_of_working_day(date: NaiveDate, hours: &WorkingHours) -> NaiveDateTime {
    date.and_hms_opt(hours.start_hour, 0, 0)
        .expect("validated clock hour")
}

/// Roll a weekend date forward to Monday, keeping the time-of-day.
///
/// The clamp has already placed the time inside the working window, so the
/// preserved time is always legal on Monday.
fn skip_weekend(at: NaiveDateTime) -> NaiveDateTime {
    match at.weekday() {
        Weekday::Sat => at + Duration::days(2),
        Weekday::Sun => at + Duration::days(1),
        _ => at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_weekday_event_within_hours() {
        // Thursday 14:00 -> raw Friday 14:00, inside hours, no weekend
        let deadline = compute_deadline(at(2024, 1, 4, 14, 0), WorkingHours::default()).unwrap();
        assert_eq!(deadline, at(2024, 1, 5, 14, 0));
    }

    #[test]
    fn test_friday_event_skips_to_monday() {
        // Friday 10:00 -> raw Saturday 10:00 -> Monday 10:00
        let deadline = compute_deadline(at(2024, 1, 5, 10, 0), WorkingHours::default()).unwrap();
        assert_eq!(deadline, at(2024, 1, 8, 10, 0));
    }

    #[test]
    fn test_saturday_event_preserves_time_across_skip() {
        // Saturday 12:00 -> raw Sunday 12:00 -> Monday 12:00
        let deadline = compute_deadline(at(2024, 1, 6, 12, 0), WorkingHours::default()).unwrap();
        assert_eq!(deadline, at(2024, 1, 8, 12, 0));
    }

    #[test]
    fn test_evening_event_clamps_then_skips() {
        // Friday 18:00 -> raw Saturday 18:00 -> clamp Sunday 07:00 -> Monday 07:00
        let deadline = compute_deadline(at(2024, 1, 5, 18, 0), WorkingHours::default()).unwrap();
        assert_eq!(deadline, at(2024, 1, 8, 7, 0));
    }

    #[test]
    fn test_early_morning_event_clamps_to_opening() {
        // Sunday 05:30 -> raw Monday 05:30 -> Monday 07:00
        let deadline = compute_deadline(at(2024, 1, 7, 5, 30), WorkingHours::default()).unwrap();
        assert_eq!(deadline, at(2024, 1, 8, 7, 0));
    }

    #[test]
    fn test_minutes_preserved_inside_window() {
        // Tuesday 09:45 -> Wednesday 09:45
        let deadline = compute_deadline(at(2024, 1, 9, 9, 45), WorkingHours::default()).unwrap();
        assert_eq!(deadline, at(2024, 1, 10, 9, 45));
    }

    #[test]
    fn test_custom_working_hours() {
        // 06:00-14:00 site: Thursday 15:30 -> raw Friday 15:30, after close
        // -> Saturday 06:00 -> Monday 06:00
        let hours = WorkingHours::new(6, 14);
        let deadline = compute_deadline(at(2024, 1, 4, 15, 30), hours).unwrap();
        assert_eq!(deadline, at(2024, 1, 8, 6, 0));
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let event = at(2024, 1, 5, 10, 0);
        let first = compute_deadline(event, WorkingHours::default()).unwrap();
        let second = compute_deadline(event, WorkingHours::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_window_is_configuration_error() {
        let err = compute_deadline(at(2024, 1, 4, 14, 0), WorkingHours::new(17, 7)).unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));

        let err = compute_deadline(at(2024, 1, 4, 14, 0), WorkingHours::new(9, 9)).unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_out_of_range_hours_are_configuration_errors() {
        let err = compute_deadline(at(2024, 1, 4, 14, 0), WorkingHours::new(7, 24)).unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_deadline_record_carries_inputs() {
        let event = at(2024, 1, 4, 14, 0);
        let record = compute_deadline_record(event, WorkingHours::default()).unwrap();
        assert_eq!(record.triggering_event_at, event);
        assert_eq!(record.deadline_at, at(2024, 1, 5, 14, 0));
        assert_eq!(record.working_hours, WorkingHours::default());
    }
}
