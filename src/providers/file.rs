use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::Result;
use crate::normalize::{FlatRecord, RawRecord};
use crate::providers::RecordProvider;
use crate::query::LeaderboardQuery;

const PROVIDER_NAME: &str = "flat-file";

/// Flat tabular file source.
///
/// First line is the header row; identity columns (`id`, `name`,
/// `avatar_url`, `strava_id`) are recognized by name, every other column is
/// handed to the normalizer as a potential distance column. This source has
/// no server to delegate to, so the engine ranks and sorts locally.
pub struct FlatFileSource {
    path: PathBuf,
    delimiter: char,
}

impl FlatFileSource {
    /// Tab-delimited source at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: '\t',
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn parse_content(&self, content: &str) -> Vec<RawRecord> {
        let mut lines = content.lines().filter(|line| !line.trim().is_empty());

        let headers: Vec<String> = match lines.next() {
            Some(header) => header
                .split(self.delimiter)
                .map(|h| h.trim().to_string())
                .collect(),
            None => return Vec::new(),
        };

        let mut records = Vec::new();
        for (row_index, line) in lines.enumerate() {
            let cells: Vec<&str> = line.split(self.delimiter).map(|c| c.trim()).collect();

            let mut record = FlatRecord::default();
            for (header, cell) in headers.iter().zip(cells) {
                if cell.is_empty() {
                    continue;
                }
                match header.to_lowercase().as_str() {
                    "id" => record.id = cell.to_string(),
                    "name" => record.name = cell.to_string(),
                    "avatar_url" | "avatarurl" => record.avatar_url = Some(cell.to_string()),
                    "strava_id" | "stravaid" => record.profile_ref = Some(cell.to_string()),
                    _ => record.columns.push((header.clone(), cell.to_string())),
                }
            }

            // Rows without an id column still need a stable identifier.
            if record.id.is_empty() {
                record.id = (row_index + 1).to_string();
            }

            records.push(RawRecord::Flat(record));
        }

        tracing::debug!("parsed {} rows from {}", records.len(), self.path.display());
        records
    }
}

#[async_trait]
impl RecordProvider for FlatFileSource {
    async fn fetch(&self, _query: &LeaderboardQuery) -> Result<Vec<RawRecord>> {
        // Query ignored: this path ranks and sorts entirely client-side.
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(self.parse_content(&content))
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn delegates_sorting(&self) -> bool {
        false
    }
}
