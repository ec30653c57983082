//! Overlap classification and conflict reports

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::impl_domain_tag_conversions;
use crate::types::commitment::Commitment;

/// How a proposed window overlaps an existing commitment
///
/// The canonical string tags are the ones the surrounding event system
/// exchanges (`TOTAL`, `PARTIEL_DEBUT`, `PARTIEL_FIN`, `ENGLOBE`).
///
/// Classification precedence: a proposal that covers the commitment's whole
/// span (exact match included) is `Total`; a proposal strictly inside the
/// commitment is `Enclosed`; otherwise the side of the proposal that falls
/// inside the commitment decides between `PartialStart` and `PartialEnd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlapKind {
    /// The proposed window covers the commitment's entire span.
    #[serde(rename = "TOTAL")]
    Total,

    /// The proposed window starts inside the commitment but ends after it.
    #[serde(rename = "PARTIEL_DEBUT")]
    PartialStart,

    /// The proposed window ends inside the commitment but starts before it.
    #[serde(rename = "PARTIEL_FIN")]
    PartialEnd,

    /// The commitment strictly contains the proposed window.
    #[serde(rename = "ENGLOBE")]
    Enclosed,
}

impl_domain_tag_conversions!(OverlapKind {
    Total => "TOTAL",
    PartialStart => "PARTIEL_DEBUT",
    PartialEnd => "PARTIEL_FIN",
    Enclosed => "ENGLOBE",
});

/// Whether a conflict check ran against an organizer's events or a
/// participant's confirmed bookings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckScope {
    Organizer,
    Participant,
}

impl_domain_tag_conversions!(CheckScope {
    Organizer => "ORGANIZER",
    Participant => "PARTICIPANT",
});

/// Details of a single conflicting commitment
///
/// Produced fresh per query; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictDetail {
    pub commitment_id: Uuid,
    pub title: String,
    pub location: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub kind: OverlapKind,
    pub description: Option<String>,
}

impl ConflictDetail {
    /// Build a detail record for a commitment overlapping a proposal.
    pub fn new(commitment: &Commitment, kind: OverlapKind) -> Self {
        Self {
            commitment_id: commitment.id,
            title: commitment.title.clone(),
            location: commitment.location.clone(),
            start: commitment.start,
            end: commitment.end,
            kind,
            description: Some(format!(
                "{} overlap with '{}' from {} to {}",
                kind, commitment.title, commitment.start, commitment.end
            )),
        }
    }
}

/// Result of a conflict check over a proposed window
///
/// `conflict_count` always equals `conflicts.len()`; the struct is only
/// built through [`ConflictReport::new`], which derives the count, the
/// conflict flag, and the summary message from the detail list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub has_conflict: bool,
    pub message: String,
    pub conflicts: Vec<ConflictDetail>,
    pub conflict_count: usize,
    pub checked_at: DateTime<Utc>,
    pub scope: CheckScope,
}

impl ConflictReport {
    /// Build a report from classified conflicts, ascending by commitment
    /// start.
    pub fn new(scope: CheckScope, conflicts: Vec<ConflictDetail>) -> Self {
        let conflict_count = conflicts.len();
        let has_conflict = conflict_count > 0;
        let message = if has_conflict {
            format!("{conflict_count} conflict(s) detected in the agenda")
        } else {
            String::from("No conflicts detected")
        };

        Self {
            has_conflict,
            message,
            conflicts,
            conflict_count,
            checked_at: Utc::now(),
            scope,
        }
    }
}
