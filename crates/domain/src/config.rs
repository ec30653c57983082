//! Scheduling configuration structures

use serde::{Deserialize, Serialize};

use crate::constants::{
    ALTERNATIVE_HORIZON_DAYS, DEFAULT_ALTERNATIVE_LIMIT, DEFAULT_FREE_SLOT_LIMIT,
    MAX_HORIZON_DAYS, WORKING_DAY_END_HOUR, WORKING_DAY_START_HOUR,
};
use crate::errors::{AgendaError, Result};

/// Daily time-of-day window within which free slots are searched
///
/// Hours are whole hours on a 24h clock; the window is half-open
/// `[start_hour:00, end_hour:00)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// First hour of the working day (default: 8)
    pub start_hour: u32,

    /// End hour of the working day, exclusive (default: 22)
    pub end_hour: u32,
}

impl WorkingHours {
    /// Create a validated working-hours window.
    ///
    /// Fails with `InvalidRange` when the window is empty, inverted, or
    /// extends past midnight.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(AgendaError::InvalidRange(format!(
                "working hours must satisfy start < end <= 24, got [{start_hour}, {end_hour})"
            )));
        }
        Ok(Self { start_hour, end_hour })
    }

    /// Length of the daily window in minutes.
    pub fn minutes_per_day(&self) -> i64 {
        i64::from(self.end_hour - self.start_hour) * 60
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self { start_hour: WORKING_DAY_START_HOUR, end_hour: WORKING_DAY_END_HOUR }
    }
}

/// Configuration for scheduling behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Daily window searched for free slots
    pub working_hours: WorkingHours,

    /// Hard cap on any scan horizon in days (default: 365)
    pub max_horizon_days: i64,

    /// Fixed horizon used when proposing alternatives (default: 7)
    pub alternative_horizon_days: i64,

    /// Default number of free slots returned (default: 10)
    pub free_slot_limit: usize,

    /// Default number of alternatives returned (default: 5)
    pub alternative_limit: usize,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            working_hours: WorkingHours::default(),
            max_horizon_days: MAX_HORIZON_DAYS,
            alternative_horizon_days: ALTERNATIVE_HORIZON_DAYS,
            free_slot_limit: DEFAULT_FREE_SLOT_LIMIT,
            alternative_limit: DEFAULT_ALTERNATIVE_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_working_hours_cover_eight_to_twenty_two() {
        let hours = WorkingHours::default();
        assert_eq!(hours.start_hour, 8);
        assert_eq!(hours.end_hour, 22);
        assert_eq!(hours.minutes_per_day(), 14 * 60);
    }

    #[test]
    fn inverted_working_hours_are_rejected() {
        assert!(WorkingHours::new(22, 8).is_err());
        assert!(WorkingHours::new(8, 8).is_err());
        assert!(WorkingHours::new(8, 25).is_err());
    }

    #[test]
    fn custom_working_hours_validate() {
        let hours = WorkingHours::new(9, 17).unwrap();
        assert_eq!(hours.minutes_per_day(), 8 * 60);
    }
}
