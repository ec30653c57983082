//! Slot scoring and ranking
//!
//! Proximity is a tiered 0-100 measure of how far a candidate slot starts
//! from the originally desired time; quality scoring itself lives on the
//! `FreeSlot` type as a pure derivation.

use chrono::{DateTime, Utc};
use eventra_domain::constants::DEFAULT_PROXIMITY_SCORE;
use eventra_domain::FreeSlot;

/// Proximity tier for a slot starting `slot_start` when the caller wanted
/// `desired_start`: within a day 80, two days 60, three days 40, else 20.
pub fn proximity_score(desired_start: DateTime<Utc>, slot_start: DateTime<Utc>) -> u8 {
    match hour_distance(desired_start, slot_start) {
        0..=24 => 80,
        25..=48 => 60,
        49..=72 => 40,
        _ => 20,
    }
}

/// Rank alternatives by absolute whole-hour distance from the desired start,
/// closest first, scoring each slot's proximity along the way. The sort is
/// stable, so equidistant slots keep their chronological scan order.
pub fn rank_by_proximity(
    slots: Vec<FreeSlot>,
    desired_start: DateTime<Utc>,
    limit: usize,
) -> Vec<FreeSlot> {
    let mut ranked: Vec<FreeSlot> = slots
        .into_iter()
        .map(|slot| {
            let score = proximity_score(desired_start, slot.start);
            slot.with_proximity_score(score)
        })
        .collect();

    ranked.sort_by_key(|slot| hour_distance(desired_start, slot.start));
    ranked.truncate(limit);
    ranked
}

/// Keep the chronological scan order, apply the default proximity score, and
/// truncate to `limit`.
pub fn take_chronological(slots: Vec<FreeSlot>, limit: usize) -> Vec<FreeSlot> {
    slots
        .into_iter()
        .take(limit)
        .map(|slot| slot.with_proximity_score(DEFAULT_PROXIMITY_SCORE))
        .collect()
}

fn hour_distance(desired_start: DateTime<Utc>, slot_start: DateTime<Utc>) -> i64 {
    (slot_start - desired_start).num_hours().abs()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn desired() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap()
    }

    fn slot_at(start: DateTime<Utc>) -> FreeSlot {
        FreeSlot::new(start, start + Duration::minutes(60)).unwrap()
    }

    #[test]
    fn proximity_tiers_follow_hour_distance() {
        let base = desired();

        assert_eq!(proximity_score(base, base), 80);
        assert_eq!(proximity_score(base, base + Duration::hours(24)), 80);
        assert_eq!(proximity_score(base, base + Duration::hours(25)), 60);
        assert_eq!(proximity_score(base, base - Duration::hours(30)), 60);
        assert_eq!(proximity_score(base, base + Duration::hours(72)), 40);
        assert_eq!(proximity_score(base, base + Duration::hours(100)), 20);
    }

    #[test]
    fn ranking_orders_by_distance_and_truncates() {
        let base = desired();
        let slots = vec![
            slot_at(base + Duration::hours(50)),
            slot_at(base + Duration::hours(2)),
            slot_at(base + Duration::hours(26)),
        ];

        let ranked = rank_by_proximity(slots, base, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].start, base + Duration::hours(2));
        assert_eq!(ranked[1].start, base + Duration::hours(26));
        assert_eq!(ranked[0].proximity_score, 80);
        assert_eq!(ranked[1].proximity_score, 60);
    }

    #[test]
    fn earlier_slots_rank_by_absolute_distance() {
        let base = desired();
        let slots = vec![slot_at(base + Duration::hours(10)), slot_at(base - Duration::hours(3))];

        let ranked = rank_by_proximity(slots, base, 5);
        assert_eq!(ranked[0].start, base - Duration::hours(3));
    }

    #[test]
    fn close_slots_are_recommended_after_ranking() {
        let base = desired();
        let ranked = rank_by_proximity(vec![slot_at(base + Duration::hours(1))], base, 5);
        assert!(ranked[0].is_recommended());

        let far = rank_by_proximity(vec![slot_at(base + Duration::hours(90))], base, 5);
        assert!(!far[0].is_recommended());
    }

    #[test]
    fn chronological_mode_preserves_order_and_applies_default_score() {
        let base = desired();
        let slots =
            vec![slot_at(base), slot_at(base + Duration::hours(1)), slot_at(base + Duration::hours(2))];

        let taken = take_chronological(slots, 2);

        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0].start, base);
        assert_eq!(taken[1].start, base + Duration::hours(1));
        assert!(taken.iter().all(|s| s.proximity_score == DEFAULT_PROXIMITY_SCORE));
    }

    #[test]
    fn ranking_is_stable_for_equidistant_slots() {
        let base = desired();
        let before = slot_at(base - Duration::hours(5));
        let after = slot_at(base + Duration::hours(5));

        let ranked = rank_by_proximity(vec![before.clone(), after.clone()], base, 5);
        assert_eq!(ranked[0].start, before.start);
        assert_eq!(ranked[1].start, after.start);
    }
}
