//! Free slots and their derived scoring

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SCORE, RECOMMENDED_PROXIMITY_THRESHOLD};
use crate::errors::{AgendaError, Result};
use crate::impl_domain_tag_conversions;

/// Time-of-day bracket a slot's start falls into
///
/// Canonical tags are the ones the surrounding event system exchanges
/// (`MATIN`, `APRES_MIDI`, `SOIR`, `HORS_HEURES`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeBracket {
    /// 08:00 - 11:59
    #[serde(rename = "MATIN")]
    Morning,

    /// 12:00 - 16:59
    #[serde(rename = "APRES_MIDI")]
    Afternoon,

    /// 17:00 - 22:59
    #[serde(rename = "SOIR")]
    Evening,

    /// Outside the working day
    #[serde(rename = "HORS_HEURES")]
    OffHours,
}

impl_domain_tag_conversions!(TimeBracket {
    Morning => "MATIN",
    Afternoon => "APRES_MIDI",
    Evening => "SOIR",
    OffHours => "HORS_HEURES",
});

impl TimeBracket {
    /// Bracket for a start hour on the 24h clock.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            8..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=22 => Self::Evening,
            _ => Self::OffHours,
        }
    }

    /// Desirability bonus contributed to the quality score.
    fn quality_bonus(self) -> u32 {
        match self {
            Self::Morning => 30,
            Self::Afternoon => 35,
            Self::Evening => 25,
            Self::OffHours => 5,
        }
    }
}

/// A candidate free window
///
/// Only `start`, `end`, the caller-supplied proximity score, and the
/// description are authoritative state. Duration, weekday, time bracket,
/// quality score, and the recommended flag are always computed from those
/// fields on read, so no derived value can go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,

    /// Proximity to the originally desired time (0-100)
    pub proximity_score: u8,

    pub description: Option<String>,
}

impl FreeSlot {
    /// Create a slot, rejecting `end <= start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end <= start {
            return Err(AgendaError::InvalidRange(format!(
                "slot end must be after start (start: {start}, end: {end})"
            )));
        }
        Ok(Self { start, end, proximity_score: 0, description: None })
    }

    /// Set the proximity score (clamped to 0-100).
    pub fn with_proximity_score(mut self, score: u8) -> Self {
        self.proximity_score = score.min(MAX_SCORE);
        self
    }

    /// Attach a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Slot length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Weekday of the slot's start.
    pub fn weekday(&self) -> Weekday {
        self.start.weekday()
    }

    /// Time-of-day bracket of the slot's start.
    pub fn time_bracket(&self) -> TimeBracket {
        TimeBracket::from_hour(self.start.hour())
    }

    /// Whether the slot is close enough to the desired time to recommend.
    pub fn is_recommended(&self) -> bool {
        self.proximity_score >= RECOMMENDED_PROXIMITY_THRESHOLD
    }

    /// Desirability score (0-100, capped)
    ///
    /// Combines a weekday bonus, a time-bracket bonus, a duration-fit bonus,
    /// and a proximity contribution of at most 25 points.
    pub fn quality_score(&self) -> u8 {
        let weekday_bonus = match self.weekday() {
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => 20,
            Weekday::Fri => 15,
            Weekday::Sat | Weekday::Sun => 10,
        };

        let duration = self.duration_minutes();
        let duration_bonus = if (60..=240).contains(&duration) {
            25
        } else if (30..60).contains(&duration) {
            15
        } else {
            5
        };

        let proximity_bonus = (u32::from(self.proximity_score) / 4).min(25);

        let score =
            weekday_bonus + self.time_bracket().quality_bonus() + duration_bonus + proximity_bonus;
        score.min(u32::from(MAX_SCORE)) as u8
    }
}
