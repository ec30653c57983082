//! Port interfaces for the external commitment store
//!
//! These traits define the boundary between the scheduling logic and the
//! system that owns calendar data (event management, reservations).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eventra_domain::{Commitment, Result};
use uuid::Uuid;

/// Read access to an owner's existing commitments
///
/// One parameterized capability serves both roles: the adapter decides
/// whether an owner id resolves to an organizer's own events or to a
/// participant's confirmed bookings. The scheduling core never creates,
/// updates, or deletes commitments through this port.
#[async_trait]
pub trait CommitmentSource: Send + Sync {
    /// All commitments for the owner intersecting `[range_start, range_end)`,
    /// partial overlaps included. No ordering guarantee; the core sorts.
    async fn list_commitments(
        &self,
        owner_id: Uuid,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> Result<Vec<Commitment>>;

    /// Whether the owner identifier is known to the surrounding system.
    async fn resolve_owner(&self, owner_id: Uuid) -> Result<bool>;
}
