//! Record normalization: maps source-specific shapes onto the canonical
//! [`AthleteRecord`] schema.
//!
//! Two source shapes are supported: flat-keyed rows (distance values as
//! top-level columns, e.g. from a tabular file) and the nested shape the
//! best-times API returns (a `best_times` list per athlete). Unknown fields
//! are silently dropped; malformed or zero time values become absent, never
//! a time of 0.

use serde::Deserialize;

use crate::core::{AthleteRecord, BestTime, DistanceKey, Rank};
use crate::format::seconds_from_raw;

/// Raw input record, tagged by source shape.
#[derive(Debug, Clone)]
pub enum RawRecord {
    Flat(FlatRecord),
    Nested(NestedRecord),
}

/// Flat-keyed source row: identity fields plus arbitrary named columns.
#[derive(Debug, Clone, Default)]
pub struct FlatRecord {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub profile_ref: Option<String>,
    /// Column name → cell text, as produced by the file collaborator.
    pub columns: Vec<(String, String)>,
}

/// Nested source record, matching the best-times API wire shape.
#[derive(Debug, Clone, Deserialize)]
pub struct NestedRecord {
    #[serde(default, deserialize_with = "deserialize_ident")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default, deserialize_with = "deserialize_opt_ident")]
    pub strava_id: Option<String>,

    /// Server-assigned rank, honored only in delegated ranking mode.
    #[serde(default)]
    pub rank: Option<u32>,

    #[serde(default)]
    pub best_times: Vec<NestedBestTime>,
}

/// One `{distance, time, activity reference}` entry of the nested shape.
#[derive(Debug, Clone, Deserialize)]
pub struct NestedBestTime {
    #[serde(default)]
    pub distance: String,

    #[serde(default, deserialize_with = "deserialize_seconds")]
    pub time: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_opt_ident")]
    pub activity_strava_id: Option<String>,
}

/// Deserialize an identifier that may arrive as string or integer.
fn deserialize_ident<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdentValue {
        Int(i64),
        String(String),
    }

    match IdentValue::deserialize(deserializer)? {
        IdentValue::Int(i) => Ok(i.to_string()),
        IdentValue::String(s) => Ok(s),
    }
}

fn deserialize_opt_ident<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdentValue {
        Int(i64),
        String(String),
        Null,
    }

    match IdentValue::deserialize(deserializer)? {
        IdentValue::Int(i) => Ok(Some(i.to_string())),
        IdentValue::String(s) => Ok(Some(s)),
        IdentValue::Null => Ok(None),
    }
}

/// Deserialize a seconds value that may arrive as number or numeric string.
/// A malformed string is absent, not an error.
fn deserialize_seconds<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SecondsValue {
        Num(f64),
        String(String),
        Null,
    }

    match SecondsValue::deserialize(deserializer)? {
        SecondsValue::Num(n) => Ok(Some(n)),
        SecondsValue::String(s) => Ok(s.trim().parse::<f64>().ok()),
        SecondsValue::Null => Ok(None),
    }
}

/// Map one raw record onto the canonical schema. Pure and side-effect free.
pub fn normalize(raw: RawRecord) -> AthleteRecord {
    match raw {
        RawRecord::Flat(record) => normalize_flat(record),
        RawRecord::Nested(record) => normalize_nested(record),
    }
}

fn normalize_flat(raw: FlatRecord) -> AthleteRecord {
    let mut record = AthleteRecord::new(raw.id, raw.name);
    record.avatar_url = raw.avatar_url.filter(|url| !url.is_empty());
    record.profile_ref = raw.profile_ref;

    for (column, value) in raw.columns {
        let Some(key) = lookup_column(&column) else {
            continue;
        };
        let Some(seconds) = value.trim().parse::<f64>().ok().and_then(seconds_from_raw) else {
            continue;
        };
        record.times.insert(key, BestTime::new(seconds));
    }

    record
}

fn normalize_nested(raw: NestedRecord) -> AthleteRecord {
    let mut record = AthleteRecord::new(raw.id, raw.name);
    record.avatar_url = raw.avatar_url.filter(|url| !url.is_empty());
    record.profile_ref = raw.strava_id;
    record.rank = Rank::from(raw.rank);

    for entry in raw.best_times {
        let Ok(key) = entry.distance.parse::<DistanceKey>() else {
            continue;
        };
        let Some(seconds) = entry.time.and_then(seconds_from_raw) else {
            continue;
        };
        let mut best = BestTime::new(seconds);
        best.activity_ref = entry.activity_strava_id;
        record.times.insert(key, best);
    }

    record
}

/// Resolve a source column name to a distance key.
///
/// Matches the canonical wire name or the display label, ignoring case and
/// separators, so `HALF_MARATHON`, `Half-Marathon` and `half marathon` all
/// resolve to the same key. Exact-token matching keeps the mapping
/// injective (`Marathon` never matches the half-marathon column).
pub fn lookup_column(name: &str) -> Option<DistanceKey> {
    let folded = fold(name);
    if folded.is_empty() {
        return None;
    }
    DistanceKey::ALL
        .iter()
        .copied()
        .find(|key| fold(key.as_str()) == folded || fold(key.label()) == folded)
}

fn fold(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
