//! Query-parameter codec shared with the remote best-times API.
//!
//! The engine both constructs these parameters (when delegating sorting to
//! the remote source) and interprets them, with semantics identical to its
//! local comparator.

use crate::core::SortConfig;
use crate::error::Result;

/// `sortDistance=<DISTANCE_KEY>:<asc|desc>`
pub const SORT_PARAM: &str = "sortDistance";
/// `name_contains=<term>`, additive name filter
pub const NAME_FILTER_PARAM: &str = "name_contains";

/// One leaderboard request: the active sort plus an optional name filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderboardQuery {
    pub sort: SortConfig,
    pub name_contains: Option<String>,
}

impl LeaderboardQuery {
    pub fn new(sort: SortConfig) -> Self {
        Self {
            sort,
            name_contains: None,
        }
    }

    /// Add a name filter. Empty terms are dropped, matching the filter's
    /// empty-term-retains-all semantics.
    pub fn with_name_filter(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.name_contains = if term.is_empty() { None } else { Some(term) };
        self
    }

    /// Parameter pairs, unencoded.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![(SORT_PARAM, self.sort.to_query_value())];
        if let Some(term) = &self.name_contains {
            pairs.push((NAME_FILTER_PARAM, term.clone()));
        }
        pairs
    }

    /// Encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Interpret decoded parameter pairs. Unknown parameters are ignored;
    /// a missing `sortDistance` falls back to the default sort.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key {
                SORT_PARAM => query.sort = SortConfig::from_query_value(value)?,
                NAME_FILTER_PARAM => {
                    if !value.is_empty() {
                        query.name_contains = Some(value.to_string());
                    }
                }
                _ => {}
            }
        }
        Ok(query)
    }
}
