//! Day-by-day free-slot scanner
//!
//! Sweeps a bounded horizon one calendar day at a time: per day the working
//! window is clipped, the day's commitments are sorted, and a cursor walks
//! the sorted list emitting one slot per gap large enough for the requested
//! duration.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use eventra_domain::constants::MAX_HORIZON_DAYS;
use eventra_domain::{AgendaError, Commitment, FreeSlot, Result, WorkingHours};

/// Reject non-positive slot durations.
pub(crate) fn validate_duration(duration_minutes: i64) -> Result<()> {
    if duration_minutes <= 0 {
        return Err(AgendaError::InvalidDuration(format!(
            "requested duration must be positive, got {duration_minutes} minutes"
        )));
    }
    Ok(())
}

/// Reject non-positive or oversized horizons.
pub(crate) fn validate_horizon(horizon_days: i64, cap_days: i64) -> Result<()> {
    if horizon_days <= 0 || horizon_days > cap_days {
        return Err(AgendaError::InvalidHorizon(format!(
            "search horizon must be within 1..={cap_days} days, got {horizon_days}"
        )));
    }
    Ok(())
}

/// Enumerate free slots of `duration_minutes` across `horizon_days` calendar
/// days, starting with the day containing `search_start`.
///
/// `commitments` is the snapshot fetched from the commitment source; the
/// scanner filters and sorts per day itself, so no ordering is assumed. The
/// result is chronological. Slots never overlap any commitment's
/// working-window-clipped span, and each slot's length equals the requested
/// duration exactly (one slot per gap, anchored at the gap's start).
pub fn scan_free_slots(
    commitments: &[Commitment],
    search_start: DateTime<Utc>,
    duration_minutes: i64,
    horizon_days: i64,
    working_hours: WorkingHours,
) -> Result<Vec<FreeSlot>> {
    validate_duration(duration_minutes)?;
    validate_horizon(horizon_days, MAX_HORIZON_DAYS)?;

    let duration = Duration::minutes(duration_minutes);
    let first_day = search_start.date_naive();

    let mut slots = Vec::new();
    for offset in 0..horizon_days {
        let day = first_day + Duration::days(offset);
        scan_day(commitments, day, duration, working_hours, &mut slots);
    }

    Ok(slots)
}

/// Cursor walk over one calendar day's working window.
fn scan_day(
    commitments: &[Commitment],
    day: NaiveDate,
    duration: Duration,
    working_hours: WorkingHours,
    slots: &mut Vec<FreeSlot>,
) {
    let midnight = day.and_time(NaiveTime::MIN).and_utc();
    let day_end = midnight + Duration::days(1);
    let window_start = midnight + Duration::hours(i64::from(working_hours.start_hour));
    let window_end = midnight + Duration::hours(i64::from(working_hours.end_hour));

    let mut day_commitments: Vec<&Commitment> =
        commitments.iter().filter(|c| c.overlaps_range(midnight, day_end)).collect();
    day_commitments.sort_by_key(|c| c.start);

    let duration_minutes = duration.num_minutes();
    let mut cursor = window_start;

    for commitment in day_commitments {
        let clipped_start = commitment.start.max(window_start);
        let clipped_end = commitment.end.min(window_end);
        if clipped_end <= clipped_start {
            // Entirely outside the working window.
            continue;
        }

        if cursor + duration <= clipped_start {
            slots.push(FreeSlot {
                start: cursor,
                end: cursor + duration,
                proximity_score: 0,
                description: Some(format!("Free {duration_minutes}-minute slot")),
            });
        }

        // Never move the cursor backward.
        cursor = cursor.max(clipped_end);
    }

    if cursor + duration <= window_end {
        slots.push(FreeSlot {
            start: cursor,
            end: cursor + duration,
            proximity_score: 0,
            description: Some(format!("Free {duration_minutes}-minute slot at end of day")),
        });
    }
}
