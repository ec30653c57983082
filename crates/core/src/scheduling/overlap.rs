//! Interval overlap classification
//!
//! All ranges are half-open `[start, end)`: touching endpoints never count
//! as an overlap.

use eventra_domain::{Commitment, OverlapKind, TimeWindow};

/// Classify how a proposed window overlaps an existing commitment.
///
/// Returns `None` when the ranges do not intersect. Precedence when they do:
/// 1. the proposal covers the commitment's whole span (exact match included)
///    -> `Total`
/// 2. the commitment covers the proposal -> `Enclosed` (strict containment;
///    equality is already taken by `Total`)
/// 3. the proposal's start lies inside the commitment -> `PartialStart`
/// 4. otherwise the proposal's end lies inside it -> `PartialEnd`
pub fn classify_overlap(proposed: &TimeWindow, commitment: &Commitment) -> Option<OverlapKind> {
    if !proposed.overlaps_commitment(commitment) {
        return None;
    }

    let kind = if proposed.start() <= commitment.start && proposed.end() >= commitment.end {
        OverlapKind::Total
    } else if commitment.start <= proposed.start() && commitment.end >= proposed.end() {
        OverlapKind::Enclosed
    } else if proposed.start() >= commitment.start {
        OverlapKind::PartialStart
    } else {
        OverlapKind::PartialEnd
    };

    Some(kind)
}
