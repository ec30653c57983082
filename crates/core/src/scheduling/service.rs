//! Agenda orchestration service - core business logic
//!
//! Every operation resolves the owner, reads one snapshot of commitments
//! through the port, then computes purely over that snapshot. Results are
//! only as fresh as the snapshot; the core holds no state of its own.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use eventra_domain::constants::SUMMARY_PERIOD_DAYS;
use eventra_domain::{
    AgendaError, AgendaSummary, CheckScope, Commitment, ConflictDetail, ConflictReport, FreeSlot,
    Result, SchedulingConfig, TimeWindow,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::overlap::classify_overlap;
use super::ports::CommitmentSource;
use super::scanner::{scan_free_slots, validate_duration, validate_horizon};
use super::scoring::{rank_by_proximity, take_chronological};

/// Agenda service: conflict checks, free-slot proposals, alternatives, and
/// weekly summaries over a single commitment source
pub struct AgendaService {
    source: Arc<dyn CommitmentSource>,
    config: SchedulingConfig,
}

impl AgendaService {
    /// Create a new agenda service with default scheduling configuration.
    pub fn new(source: Arc<dyn CommitmentSource>) -> Self {
        Self { source, config: SchedulingConfig::default() }
    }

    /// Override the scheduling configuration.
    pub fn with_config(mut self, config: SchedulingConfig) -> Self {
        self.config = config;
        self
    }

    /// Check a proposed window against the events an organizer already has.
    pub async fn check_organizer_conflicts(
        &self,
        owner_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ConflictReport> {
        self.check_conflicts(owner_id, start, end, CheckScope::Organizer).await
    }

    /// Check a proposed window against a participant's confirmed bookings.
    pub async fn check_participant_conflicts(
        &self,
        owner_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ConflictReport> {
        self.check_conflicts(owner_id, start, end, CheckScope::Participant).await
    }

    /// Detect and classify conflicts between a proposed window and the
    /// owner's commitments.
    ///
    /// Conflicts come back ascending by commitment start, and the report's
    /// count always equals its detail list length.
    pub async fn check_conflicts(
        &self,
        owner_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        scope: CheckScope,
    ) -> Result<ConflictReport> {
        let proposed = TimeWindow::new(start, end)?;
        self.require_owner(owner_id).await?;

        info!(owner = %owner_id, scope = %scope, %start, %end, "checking agenda conflicts");

        let commitments =
            self.source.list_commitments(owner_id, proposed.start(), proposed.end()).await?;

        let mut details: Vec<ConflictDetail> = commitments
            .iter()
            .filter_map(|commitment| {
                classify_overlap(&proposed, commitment)
                    .map(|kind| ConflictDetail::new(commitment, kind))
            })
            .collect();
        details.sort_by_key(|detail| detail.start);

        let report = ConflictReport::new(scope, details);
        if report.has_conflict {
            warn!(count = report.conflict_count, "agenda conflicts detected");
            for detail in &report.conflicts {
                debug!(
                    title = %detail.title,
                    kind = %detail.kind,
                    start = %detail.start,
                    end = %detail.end,
                    "conflicting commitment"
                );
            }
        }

        Ok(report)
    }

    /// Whether the owner has no commitment overlapping `[start, end)`.
    pub async fn is_window_free(
        &self,
        owner_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool> {
        let report =
            self.check_conflicts(owner_id, start, end, CheckScope::Organizer).await?;
        Ok(!report.has_conflict)
    }

    /// Propose free slots of `duration_minutes` inside `[start, end)`,
    /// scanning whole calendar days and preserving chronological order.
    ///
    /// `limit` defaults to the configured free-slot limit.
    pub async fn propose_free_slots(
        &self,
        owner_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration_minutes: i64,
        limit: Option<usize>,
    ) -> Result<Vec<FreeSlot>> {
        let window = TimeWindow::new(start, end)?;
        validate_duration(duration_minutes)?;

        // Horizon covers every calendar day the window touches.
        let horizon_days =
            (window.end().date_naive() - window.start().date_naive()).num_days() + 1;
        validate_horizon(horizon_days, self.config.max_horizon_days)?;

        self.require_owner(owner_id).await?;

        info!(
            owner = %owner_id,
            %start,
            duration_minutes,
            horizon_days,
            "proposing free slots"
        );

        let commitments = self.fetch_horizon(owner_id, start, horizon_days).await?;
        let slots = scan_free_slots(
            &commitments,
            start,
            duration_minutes,
            horizon_days,
            self.config.working_hours,
        )?;

        let limit = limit.unwrap_or(self.config.free_slot_limit);
        let proposed = take_chronological(slots, limit);
        debug!(count = proposed.len(), "free slots proposed");

        Ok(proposed)
    }

    /// Propose alternatives around a desired start that turned out to be
    /// taken: scan a fixed horizon from that day and rank candidates by
    /// proximity to the desired instant.
    ///
    /// `limit` defaults to the configured alternative limit.
    pub async fn propose_alternatives(
        &self,
        owner_id: Uuid,
        desired_start: DateTime<Utc>,
        duration_minutes: i64,
        limit: Option<usize>,
    ) -> Result<Vec<FreeSlot>> {
        validate_duration(duration_minutes)?;
        self.require_owner(owner_id).await?;

        let horizon_days = self.config.alternative_horizon_days;
        info!(owner = %owner_id, %desired_start, duration_minutes, "proposing alternatives");

        let commitments = self.fetch_horizon(owner_id, desired_start, horizon_days).await?;
        let slots = scan_free_slots(
            &commitments,
            desired_start,
            duration_minutes,
            horizon_days,
            self.config.working_hours,
        )?;

        let limit = limit.unwrap_or(self.config.alternative_limit);
        let alternatives = rank_by_proximity(slots, desired_start, limit);
        debug!(count = alternatives.len(), "alternatives proposed");

        Ok(alternatives)
    }

    /// Aggregate one week of agenda starting at `week_start`: commitment
    /// count, busy minutes clipped to the period, and occupancy against the
    /// working-window minutes of that week.
    pub async fn agenda_summary(
        &self,
        owner_id: Uuid,
        week_start: DateTime<Utc>,
    ) -> Result<AgendaSummary> {
        self.require_owner(owner_id).await?;

        let period =
            TimeWindow::new(week_start, week_start + Duration::days(SUMMARY_PERIOD_DAYS))?;
        info!(owner = %owner_id, %week_start, "building agenda summary");

        let commitments =
            self.source.list_commitments(owner_id, period.start(), period.end()).await?;

        let busy_minutes: i64 = commitments
            .iter()
            .map(|commitment| clipped_minutes(commitment, &period))
            .sum();

        let working_minutes =
            SUMMARY_PERIOD_DAYS * self.config.working_hours.minutes_per_day();
        let occupancy_percent = ((busy_minutes * 100) / working_minutes).clamp(0, 100) as u8;

        Ok(AgendaSummary {
            owner_id,
            period,
            commitment_count: commitments.len(),
            busy_minutes,
            occupancy_percent,
        })
    }

    /// Fail with `OwnerNotFound` when the collaborator does not know the id.
    async fn require_owner(&self, owner_id: Uuid) -> Result<()> {
        if !self.source.resolve_owner(owner_id).await? {
            return Err(AgendaError::OwnerNotFound(owner_id.to_string()));
        }
        Ok(())
    }

    /// One snapshot read covering `horizon_days` calendar days from the day
    /// containing `anchor`.
    async fn fetch_horizon(
        &self,
        owner_id: Uuid,
        anchor: DateTime<Utc>,
        horizon_days: i64,
    ) -> Result<Vec<Commitment>> {
        let range_start = anchor.date_naive().and_time(NaiveTime::MIN).and_utc();
        let range_end = range_start + Duration::days(horizon_days);
        self.source.list_commitments(owner_id, range_start, range_end).await
    }
}

/// Minutes of a commitment's span falling inside the period.
fn clipped_minutes(commitment: &Commitment, period: &TimeWindow) -> i64 {
    let start = commitment.start.max(period.start());
    let end = commitment.end.min(period.end());
    (end - start).num_minutes().max(0)
}
