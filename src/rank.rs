//! Rank calculation over one snapshot.
//!
//! Rank is derived data: it is computed once per full record-set load from
//! the primary distance, and stays stable under filtering and re-sorting of
//! the same snapshot.

use crate::core::{AthleteRecord, DistanceKey, Rank};

/// Distance used to compute the displayed rank.
pub const PRIMARY_DISTANCE: DistanceKey = DistanceKey::HalfMarathon;

/// Annotate `records` with ranks derived from `primary`.
///
/// Records with a time at `primary` get ranks 1..N by ascending time; equal
/// times keep their input order and receive distinct sequential ranks.
/// Records without a primary time get [`Rank::Unranked`] and do not consume
/// numeric ranks. The returned records stay in input order; ordering for
/// display is the sort engine's job.
pub fn assign_ranks(mut records: Vec<AthleteRecord>, primary: DistanceKey) -> Vec<AthleteRecord> {
    let mut timed: Vec<(usize, u32)> = records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| record.time_seconds(primary).map(|t| (idx, t)))
        .collect();

    // sort_by is stable, so ties keep input order
    timed.sort_by(|a, b| a.1.cmp(&b.1));

    for record in records.iter_mut() {
        record.rank = Rank::Unranked;
    }
    for (position, (idx, _)) in timed.into_iter().enumerate() {
        records[idx].rank = Rank::Ranked(position as u32 + 1);
    }

    records
}
