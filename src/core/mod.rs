pub mod athlete;
pub mod distance;
pub mod sort_config;

pub use athlete::{AthleteRecord, BestTime, Rank};
pub use distance::DistanceKey;
pub use sort_config::{SortConfig, SortDirection};
