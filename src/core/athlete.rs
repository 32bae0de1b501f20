use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::DistanceKey;

/// A single best time at one distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTime {
    /// Elapsed seconds. Strictly positive once normalized; a zero or
    /// malformed source value never becomes a `BestTime`.
    pub seconds: u32,

    /// Reference to the source activity that produced this time, if the
    /// source carried one (used by presentation to link to the activity).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_ref: Option<String>,
}

impl BestTime {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds,
            activity_ref: None,
        }
    }

    pub fn with_activity_ref(mut self, activity_ref: impl Into<String>) -> Self {
        self.activity_ref = Some(activity_ref.into());
        self
    }
}

/// Display rank derived from the primary distance.
///
/// Serialized as a number or null, matching the wire shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum Rank {
    Ranked(u32),
    #[default]
    Unranked,
}

impl Rank {
    pub fn is_ranked(&self) -> bool {
        matches!(self, Rank::Ranked(_))
    }

    pub fn number(&self) -> Option<u32> {
        match self {
            Rank::Ranked(n) => Some(*n),
            Rank::Unranked => None,
        }
    }
}

impl From<Option<u32>> for Rank {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(n) if n >= 1 => Rank::Ranked(n),
            _ => Rank::Unranked,
        }
    }
}

impl From<Rank> for Option<u32> {
    fn from(rank: Rank) -> Self {
        rank.number()
    }
}

/// Canonical athlete record, independent of its original source shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteRecord {
    /// Stable identifier, unique within one snapshot.
    pub id: String,

    /// Display name; used for search and the avatar-fallback initial.
    #[serde(default)]
    pub name: String,

    /// Avatar image locator. Absence degrades to the initial-letter badge.
    #[serde(default)]
    pub avatar_url: Option<String>,

    /// Upstream athlete reference (profile id on the source platform).
    #[serde(default)]
    pub profile_ref: Option<String>,

    /// Derived display rank. Assigned by the rank calculator, never taken
    /// from a data source in local ranking mode.
    #[serde(default)]
    pub rank: Rank,

    /// Best times per distance. A distance with no entry means "no recorded
    /// time"; an absent time is never represented as zero.
    #[serde(default)]
    pub times: BTreeMap<DistanceKey, BestTime>,
}

impl AthleteRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: None,
            profile_ref: None,
            rank: Rank::Unranked,
            times: BTreeMap::new(),
        }
    }

    /// Elapsed seconds at `key`, or `None` when no time is recorded.
    pub fn time_seconds(&self, key: DistanceKey) -> Option<u32> {
        self.times.get(&key).map(|t| t.seconds)
    }

    /// Full best-time entry at `key`, including the activity reference.
    pub fn best_time(&self, key: DistanceKey) -> Option<&BestTime> {
        self.times.get(&key)
    }

    pub fn has_time(&self, key: DistanceKey) -> bool {
        self.times.contains_key(&key)
    }

    /// First character of the name, for the initial-letter avatar badge.
    pub fn avatar_initial(&self) -> Option<char> {
        self.name.chars().next()
    }

    /// Whether presentation should render the initial-letter badge instead
    /// of the avatar image. Image load failure is signalled by the
    /// presentation layer, not detected here.
    pub fn needs_avatar_fallback(&self, image_load_failed: bool) -> bool {
        self.avatar_url.is_none() || image_load_failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = AthleteRecord::new("42", "Anna");
        assert_eq!(record.id, "42");
        assert_eq!(record.name, "Anna");
        assert_eq!(record.rank, Rank::Unranked);
        assert!(record.times.is_empty());
    }

    #[test]
    fn test_absent_time_is_none() {
        let mut record = AthleteRecord::new("1", "Bob");
        record
            .times
            .insert(DistanceKey::FiveK, BestTime::new(1212));

        assert_eq!(record.time_seconds(DistanceKey::FiveK), Some(1212));
        assert_eq!(record.time_seconds(DistanceKey::Marathon), None);
        assert!(!record.has_time(DistanceKey::Marathon));
    }

    #[test]
    fn test_rank_serializes_as_number_or_null() {
        let ranked = serde_json::to_string(&Rank::Ranked(3)).unwrap();
        assert_eq!(ranked, "3");

        let unranked = serde_json::to_string(&Rank::Unranked).unwrap();
        assert_eq!(unranked, "null");

        let parsed: Rank = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, Rank::Unranked);

        // Rank 0 is out of domain and collapses to the sentinel.
        let zero: Rank = serde_json::from_str("0").unwrap();
        assert_eq!(zero, Rank::Unranked);
    }

    #[test]
    fn test_avatar_fallback() {
        let mut record = AthleteRecord::new("1", "Hannah");
        assert!(record.needs_avatar_fallback(false));
        assert_eq!(record.avatar_initial(), Some('H'));

        record.avatar_url = Some("https://example.com/a.png".to_string());
        assert!(!record.needs_avatar_fallback(false));
        assert!(record.needs_avatar_fallback(true));
    }

    #[test]
    fn test_record_serde_round_trip() {
        let mut record = AthleteRecord::new("7", "Cat");
        record.times.insert(
            DistanceKey::Marathon,
            BestTime::new(7200).with_activity_ref("9001"),
        );
        record.rank = Rank::Ranked(1);

        let json = serde_json::to_string(&record).unwrap();
        let back: AthleteRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
