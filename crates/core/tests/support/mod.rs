//! Shared test helpers for `eventra-core` integration tests.
//!
//! Provides an in-memory commitment source so the agenda tests can focus on
//! behaviour instead of boilerplate.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eventra_core::CommitmentSource;
use eventra_domain::{Commitment, Result as DomainResult};
use uuid::Uuid;

/// In-memory mock for `CommitmentSource`.
///
/// Stores a fixed set of commitments and serves range reads over them.
/// Owners must be registered explicitly; unknown ids resolve to `false`.
#[derive(Default, Clone)]
pub struct MockCommitmentSource {
    commitments: Arc<Mutex<Vec<Commitment>>>,
    owners: Arc<Mutex<Vec<Uuid>>>,
}

impl MockCommitmentSource {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an owner id as known.
    pub fn with_owner(self, owner_id: Uuid) -> Self {
        self.owners.lock().unwrap().push(owner_id);
        self
    }

    /// Convenience helper for seeding a single commitment.
    pub fn with_commitment(self, commitment: Commitment) -> Self {
        self.commitments.lock().unwrap().push(commitment);
        self
    }
}

#[async_trait]
impl CommitmentSource for MockCommitmentSource {
    async fn list_commitments(
        &self,
        owner_id: Uuid,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> DomainResult<Vec<Commitment>> {
        Ok(self
            .commitments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.owner_id == owner_id && c.overlaps_range(range_start, range_end))
            .cloned()
            .collect())
    }

    async fn resolve_owner(&self, owner_id: Uuid) -> DomainResult<bool> {
        Ok(self.owners.lock().unwrap().contains(&owner_id))
    }
}
