pub mod api;
pub mod file;

use async_trait::async_trait;

use crate::error::Result;
use crate::normalize::RawRecord;
use crate::query::LeaderboardQuery;

pub use api::BestTimesApi;
pub use file::FlatFileSource;

/// Trait for leaderboard record sources (remote query API, flat files, ...)
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Fetch a complete replacement record set for the given query.
    ///
    /// The result is always a full snapshot, never a diff; sources that
    /// cannot apply the query return their whole set and leave sorting and
    /// ranking to the engine.
    async fn fetch(&self, query: &LeaderboardQuery) -> Result<Vec<RawRecord>>;

    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Whether the source applies the query's sort and rank itself.
    fn delegates_sorting(&self) -> bool;
}
