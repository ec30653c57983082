//! Commitments and time windows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AgendaError, Result};

/// An existing time-bounded obligation belonging to an owner
///
/// Commitments are owned and mutated entirely by the external event
/// management system; the scheduling core consumes them as read-only input
/// and relies on the collaborator to uphold `end > start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commitment {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub location: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Commitment {
    /// Duration of the commitment in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Half-open overlap test against an arbitrary `[start, end)` range.
    ///
    /// Touching endpoints do not overlap.
    pub fn overlaps_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start < end && start < self.end
    }
}

/// An immutable `(start, end)` time window with `end > start`
///
/// Used both for proposed windows and for free-slot spans. Construction via
/// [`TimeWindow::new`] is the single validation gate for `InvalidRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Create a window, rejecting `end <= start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end <= start {
            return Err(AgendaError::InvalidRange(format!(
                "window end must be after start (start: {start}, end: {end})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Window start (inclusive).
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Window end (exclusive).
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Window length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Half-open intersection test; touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Half-open intersection test against a commitment's span.
    pub fn overlaps_commitment(&self, commitment: &Commitment) -> bool {
        commitment.overlaps_range(self.start, self.end)
    }
}
