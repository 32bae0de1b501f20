//! # Leaderboard Engine
//!
//! In-memory computation engine for an athletes' best-times leaderboard:
//! - Normalizes flat-keyed and nested source records into one canonical schema
//! - Derives a display rank from the primary distance (half-marathon)
//! - Stable sorting by any distance with a missing-last tie-break policy
//! - Case-insensitive name filtering and clock-string time formatting
//! - Pluggable record sources (remote query API, flat tabular files)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use leaderboard_engine::{DistanceKey, LeaderboardEngine};
//! use leaderboard_engine::providers::FlatFileSource;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut engine = LeaderboardEngine::new();
//!     let source = FlatFileSource::new("best_times.tsv");
//!     engine.refresh(&source).await?;
//!
//!     engine.set_sort_key(DistanceKey::FiveK);
//!     engine.set_search("ann");
//!
//!     for athlete in engine.view() {
//!         println!(
//!             "{:>4}  {:<20} {}",
//!             athlete.rank.number().map_or(String::from("-"), |n| n.to_string()),
//!             athlete.name,
//!             engine.format_cell(&athlete, DistanceKey::FiveK),
//!         );
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod filter;
pub mod format;
pub mod normalize;
pub mod providers;
pub mod query;
pub mod rank;
pub mod sort;

// Re-export primary types
pub use crate::core::{AthleteRecord, BestTime, DistanceKey, Rank, SortConfig, SortDirection};
pub use engine::{LeaderboardEngine, LoadToken, RankingMode};
pub use error::{LeaderboardError, Result};
pub use normalize::{normalize, FlatRecord, NestedRecord, RawRecord};
pub use query::LeaderboardQuery;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
