//! Leaderboard orchestrator: owns exactly one record-set snapshot and the
//! current view state (sort + search), and recomputes the derived pipeline
//! stages on each external trigger.

use chrono::{DateTime, Utc};

use crate::core::{AthleteRecord, DistanceKey, SortConfig};
use crate::error::Result;
use crate::filter::filter_by_name;
use crate::format::format_time;
use crate::normalize::{normalize, RawRecord};
use crate::providers::RecordProvider;
use crate::query::LeaderboardQuery;
use crate::rank::{assign_ranks, PRIMARY_DISTANCE};
use crate::sort::sort_records;

/// How the engine derives rank and order for a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankingMode {
    /// Rank by the primary distance and sort locally. Canonical behavior.
    #[default]
    Local,
    /// Trust rank and order as delivered by the source (which applied the
    /// requested sort itself); only filtering happens locally.
    Delegated,
}

/// Handle tying an in-flight load to the snapshot generation it will
/// produce. Installing with a stale token is a no-op, so an older response
/// can never overwrite data from a newer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

#[derive(Debug, Clone)]
struct Snapshot {
    /// Ranked records in ingestion order.
    records: Vec<AthleteRecord>,
    loaded_at: Option<DateTime<Utc>>,
    generation: u64,
}

impl Snapshot {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            loaded_at: None,
            generation: 0,
        }
    }
}

/// The leaderboard computation engine.
///
/// Holds one snapshot at a time; a new load fully replaces the prior set.
/// Rank is computed once per snapshot, sorting reruns on every sort-key
/// change, filtering on every search-term change.
pub struct LeaderboardEngine {
    snapshot: Snapshot,
    /// Snapshot after the active sort (local mode) or in source order
    /// (delegated mode).
    ordered: Vec<AthleteRecord>,
    sort: SortConfig,
    search_term: String,
    mode: RankingMode,
    primary: DistanceKey,
    issued_generation: u64,
}

impl LeaderboardEngine {
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::empty(),
            ordered: Vec::new(),
            sort: SortConfig::default(),
            search_term: String::new(),
            mode: RankingMode::Local,
            primary: PRIMARY_DISTANCE,
            issued_generation: 0,
        }
    }

    pub fn with_mode(mut self, mode: RankingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Override the distance used for rank computation (defaults to the
    /// half-marathon).
    pub fn with_primary_distance(mut self, primary: DistanceKey) -> Self {
        self.primary = primary;
        self
    }

    pub fn ranking_mode(&self) -> RankingMode {
        self.mode
    }

    pub fn sort_config(&self) -> SortConfig {
        self.sort
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// When the current snapshot was installed, if one has been.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot.loaded_at
    }

    pub fn generation(&self) -> u64 {
        self.snapshot.generation
    }

    pub fn len(&self) -> usize {
        self.snapshot.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.records.is_empty()
    }

    /// The query matching the current view state, for providers that apply
    /// sort and filter server-side.
    pub fn current_query(&self) -> LeaderboardQuery {
        LeaderboardQuery::new(self.sort).with_name_filter(self.search_term.clone())
    }

    /// Start a load. The returned token must be passed to [`install`];
    /// tokens from loads started earlier than the newest one are stale.
    ///
    /// [`install`]: LeaderboardEngine::install
    pub fn begin_load(&mut self) -> LoadToken {
        self.issued_generation += 1;
        LoadToken(self.issued_generation)
    }

    /// Install a complete replacement record set. Returns `false` (and
    /// leaves the current snapshot untouched) when `token` is stale.
    pub fn install(&mut self, token: LoadToken, raw: Vec<RawRecord>) -> bool {
        if token.0 <= self.snapshot.generation || token.0 < self.issued_generation {
            tracing::debug!(
                "Discarding stale snapshot load (generation {}, newest {})",
                token.0,
                self.issued_generation
            );
            return false;
        }

        let records: Vec<AthleteRecord> = raw.into_iter().map(normalize).collect();
        let records = match self.mode {
            RankingMode::Local => assign_ranks(records, self.primary),
            RankingMode::Delegated => records,
        };

        tracing::info!(
            "Installed leaderboard snapshot: {} records (generation {})",
            records.len(),
            token.0
        );

        self.snapshot = Snapshot {
            records,
            loaded_at: Some(Utc::now()),
            generation: token.0,
        };
        self.resort();
        true
    }

    /// Normalize, rank and install `raw` as the new snapshot.
    pub fn load_records(&mut self, raw: Vec<RawRecord>) {
        let token = self.begin_load();
        self.install(token, raw);
    }

    /// Fetch a fresh record set from `provider` and install it. If another
    /// load was started while this one was in flight, the fetched set is
    /// discarded (last writer wins).
    pub async fn refresh(&mut self, provider: &dyn RecordProvider) -> Result<()> {
        let token = self.begin_load();
        let query = self.current_query();
        let raw = provider.fetch(&query).await?;
        if !self.install(token, raw) {
            tracing::warn!("Load from {} superseded by a newer load", provider.name());
        }
        Ok(())
    }

    /// Handle a sort-header selection: toggle or reset direction per the
    /// sort config rules, then re-sort the current snapshot.
    pub fn set_sort_key(&mut self, key: DistanceKey) {
        self.sort = self.sort.toggled(key);
        self.resort();
    }

    pub fn set_sort(&mut self, config: SortConfig) {
        self.sort = config;
        self.resort();
    }

    /// Update the search term. Cheap enough to call per keystroke: only the
    /// filter view changes, rank and order are untouched.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Clear the search term (the refresh action of the original view).
    pub fn reset_search(&mut self) {
        self.search_term.clear();
    }

    /// The ordered, filtered record sequence for presentation.
    pub fn view(&self) -> Vec<AthleteRecord> {
        filter_by_name(&self.ordered, &self.search_term)
    }

    /// Display string for one cell.
    pub fn format_cell(&self, record: &AthleteRecord, key: DistanceKey) -> String {
        format_time(record.time_seconds(key))
    }

    fn resort(&mut self) {
        self.ordered = match self.mode {
            RankingMode::Local => sort_records(self.snapshot.records.clone(), &self.sort),
            RankingMode::Delegated => self.snapshot.records.clone(),
        };
    }
}

impl Default for LeaderboardEngine {
    fn default() -> Self {
        Self::new()
    }
}
