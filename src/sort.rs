//! Stable ordering of a snapshot by one distance key and direction.

use std::cmp::Ordering;

use crate::core::{AthleteRecord, SortConfig, SortDirection};

/// Compare two records under the active sort.
///
/// Records lacking a time at the sort key always order after records that
/// have one, in both directions (the missing-last policy). Two records that
/// both lack a time compare equal so a stable sort keeps their input order.
pub fn compare_records(a: &AthleteRecord, b: &AthleteRecord, config: &SortConfig) -> Ordering {
    match (a.time_seconds(config.key), b.time_seconds(config.key)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a_time), Some(b_time)) => match config.direction {
            SortDirection::Ascending => a_time.cmp(&b_time),
            SortDirection::Descending => b_time.cmp(&a_time),
        },
    }
}

/// Produce a new ordering of `records` under `config`.
///
/// Uses a stable comparison sort, so records comparing equal retain their
/// ingestion order.
pub fn sort_records(mut records: Vec<AthleteRecord>, config: &SortConfig) -> Vec<AthleteRecord> {
    records.sort_by(|a, b| compare_records(a, b, config));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BestTime, DistanceKey};

    fn record(name: &str, time: Option<u32>) -> AthleteRecord {
        let mut r = AthleteRecord::new(name, name);
        if let Some(seconds) = time {
            r.times.insert(DistanceKey::FiveK, BestTime::new(seconds));
        }
        r
    }

    fn names(records: &[AthleteRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_ascending_sorts_smaller_first() {
        let sorted = sort_records(
            vec![
                record("slow", Some(1500)),
                record("fast", Some(1100)),
                record("mid", Some(1300)),
            ],
            &SortConfig::ascending(DistanceKey::FiveK),
        );
        assert_eq!(names(&sorted), vec!["fast", "mid", "slow"]);
    }

    #[test]
    fn test_descending_sorts_larger_first() {
        let sorted = sort_records(
            vec![
                record("slow", Some(1500)),
                record("fast", Some(1100)),
                record("mid", Some(1300)),
            ],
            &SortConfig::new(DistanceKey::FiveK, SortDirection::Descending),
        );
        assert_eq!(names(&sorted), vec!["slow", "mid", "fast"]);
    }

    #[test]
    fn test_missing_sorts_last_in_both_directions() {
        let records = vec![
            record("missing", None),
            record("timed", Some(1200)),
        ];

        let ascending = sort_records(
            records.clone(),
            &SortConfig::ascending(DistanceKey::FiveK),
        );
        assert_eq!(names(&ascending), vec!["timed", "missing"]);

        let descending = sort_records(
            records,
            &SortConfig::new(DistanceKey::FiveK, SortDirection::Descending),
        );
        assert_eq!(names(&descending), vec!["timed", "missing"]);
    }

    #[test]
    fn test_equal_values_keep_ingestion_order() {
        let sorted = sort_records(
            vec![
                record("a", Some(900)),
                record("b", Some(900)),
                record("c", Some(900)),
            ],
            &SortConfig::new(DistanceKey::FiveK, SortDirection::Descending),
        );
        assert_eq!(names(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_all_missing_keeps_ingestion_order() {
        let sorted = sort_records(
            vec![record("a", None), record("b", None), record("c", None)],
            &SortConfig::ascending(DistanceKey::FiveK),
        );
        assert_eq!(names(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_set_is_a_noop() {
        let sorted = sort_records(Vec::new(), &SortConfig::default());
        assert!(sorted.is_empty());
    }
}
