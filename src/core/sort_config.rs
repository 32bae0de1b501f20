use serde::{Deserialize, Serialize};

use crate::core::DistanceKey;
use crate::error::{LeaderboardError, Result};

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Short wire form used in the `sortDistance` query parameter.
    pub fn as_query_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The single active sort: one distance key plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: DistanceKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: DistanceKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: DistanceKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// Next sort state after the user selects `key`: re-selecting the
    /// active key flips the direction, a new key resets to ascending.
    pub fn toggled(self, key: DistanceKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.flipped())
        } else {
            Self::ascending(key)
        }
    }

    /// Wire form for the `sortDistance` parameter, e.g. `MARATHON:asc`.
    pub fn to_query_value(&self) -> String {
        format!("{}:{}", self.key.as_str(), self.direction.as_query_str())
    }

    /// Parse the `KEY:asc|desc` wire form.
    pub fn from_query_value(value: &str) -> Result<Self> {
        let (key, direction) = value
            .split_once(':')
            .ok_or_else(|| LeaderboardError::Query(format!("missing direction in '{value}'")))?;

        let key = key
            .parse::<DistanceKey>()
            .map_err(LeaderboardError::Query)?;

        let direction = match direction {
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            other => {
                return Err(LeaderboardError::Query(format!(
                    "unknown sort direction: {other}"
                )))
            }
        };

        Ok(Self::new(key, direction))
    }
}

impl Default for SortConfig {
    /// Initial view state: marathon column, fastest first.
    fn default() -> Self {
        Self::ascending(DistanceKey::Marathon)
    }
}
