//! Weekly agenda aggregates

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::commitment::TimeWindow;

/// Aggregate view of an owner's agenda over one summarized period
///
/// Counts only; the raw commitment data stays with the external
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaSummary {
    pub owner_id: Uuid,

    /// The summarized period
    pub period: TimeWindow,

    /// Number of commitments intersecting the period
    pub commitment_count: usize,

    /// Committed minutes inside the period (spans clipped to its bounds)
    pub busy_minutes: i64,

    /// Busy minutes as a percentage of the period's working-window minutes
    pub occupancy_percent: u8,
}
