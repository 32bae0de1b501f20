use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{LeaderboardError, Result};
use crate::normalize::{NestedRecord, RawRecord};
use crate::providers::RecordProvider;
use crate::query::LeaderboardQuery;

const PROVIDER_NAME: &str = "best-times-api";

/// Remote best-times query API.
///
/// The server applies `sortDistance` and `name_contains` itself and returns
/// already-ranked records in the nested shape, so this source delegates
/// sorting.
pub struct BestTimesApi {
    client: Client,
    base_url: String,
}

impl BestTimesApi {
    /// Create a provider against `base_url` (scheme + host, no trailing path).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a provider using the provided [`reqwest::Client`], for custom
    /// timeouts, proxies or headers.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, query: &LeaderboardQuery) -> String {
        format!(
            "{}/api/athletes/best-times?{}",
            self.base_url.trim_end_matches('/'),
            query.to_query_string()
        )
    }
}

#[async_trait]
impl RecordProvider for BestTimesApi {
    async fn fetch(&self, query: &LeaderboardQuery) -> Result<Vec<RawRecord>> {
        let url = self.endpoint(query);
        tracing::debug!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LeaderboardError::Provider {
                provider: PROVIDER_NAME.to_string(),
                message: format!("request failed: {}", e),
            })?;

        if !response.status().is_success() {
            return Err(LeaderboardError::Provider {
                provider: PROVIDER_NAME.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        // The API returns a bare array of athlete records.
        let records: Vec<NestedRecord> =
            response
                .json()
                .await
                .map_err(|e| LeaderboardError::Provider {
                    provider: PROVIDER_NAME.to_string(),
                    message: format!("Invalid JSON: {}", e),
                })?;

        tracing::debug!("received {} records", records.len());
        Ok(records.into_iter().map(RawRecord::Nested).collect())
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn delegates_sorting(&self) -> bool {
        true
    }
}
