//! dnd5eapi.co client - Implementation of SrdSpellSource.
//!
//! Lists `/api/spells`, then fetches each spell's detail document.
//! Details that fail to load are logged and skipped; a failed list
//! request fails the whole fetch. No retries.
//!
//! # Configuration
//!
//! ```ignore
//! let config = Dnd5eApiConfig::new("https://www.dnd5eapi.co/api/spells")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = Dnd5eApiClient::new(config)?;
//! ```

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::spell::SrdSpell;
use crate::ports::SrdSpellSource;

/// Public SRD spell endpoint.
pub const DEFAULT_SRD_BASE_URL: &str = "https://www.dnd5eapi.co/api/spells";

/// Configuration for the SRD client.
#[derive(Debug, Clone)]
pub struct Dnd5eApiConfig {
    /// Spell list endpoint; details live at `{base_url}/{index}`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Detail requests in flight at once.
    pub concurrency: usize,
}

impl Dnd5eApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
            concurrency: 8,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

impl Default for Dnd5eApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SRD_BASE_URL)
    }
}

/// SRD spell source backed by dnd5eapi.co.
pub struct Dnd5eApiClient {
    config: Dnd5eApiConfig,
    client: Client,
}

impl Dnd5eApiClient {
    pub fn new(config: Dnd5eApiConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| upstream("Failed to create HTTP client", e))?;

        Ok(Self { config, client })
    }

    fn list_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn detail_url(&self, index: &str) -> String {
        format!("{}/{}", self.list_url(), index)
    }

    async fn fetch_list(&self) -> Result<SpellListResponse, DomainError> {
        let response = self
            .client
            .get(self.list_url())
            .send()
            .await
            .map_err(|e| upstream("SRD API list request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::new(
                ErrorCode::UpstreamError,
                format!("SRD API list request failed: {}", status.as_u16()),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| upstream("Invalid SRD spell list", e))
    }

    /// `None` when the detail could not be fetched or parsed.
    async fn fetch_detail(&self, index: &str) -> Option<SrdSpell> {
        let response = match self.client.get(self.detail_url(index)).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(index, error = %e, "Error fetching spell detail, skipping");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(index, status = status.as_u16(), "Failed to fetch spell detail, skipping");
            return None;
        }

        match response.json::<SpellDetailResponse>().await {
            Ok(detail) => Some(detail.into_spell()),
            Err(e) => {
                tracing::warn!(index, error = %e, "Invalid spell detail, skipping");
                None
            }
        }
    }
}

#[async_trait]
impl SrdSpellSource for Dnd5eApiClient {
    async fn fetch_all(&self) -> Result<Vec<SrdSpell>, DomainError> {
        tracing::info!(url = self.list_url(), "Fetching spells from SRD API");
        let list = self.fetch_list().await?;
        tracing::info!(count = list.count, "Fetched spell list from SRD API");

        let spells: Vec<SrdSpell> = stream::iter(list.results)
            .map(|entry| async move { self.fetch_detail(&entry.index).await })
            .buffered(self.config.concurrency)
            .filter_map(|spell| async move { spell })
            .collect()
            .await;

        Ok(spells)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct SpellListResponse {
    #[serde(default)]
    count: usize,
    results: Vec<SpellListEntry>,
}

#[derive(Debug, Deserialize)]
struct SpellListEntry {
    index: String,
}

#[derive(Debug, Deserialize)]
struct NamedReference {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SpellDetailResponse {
    index: String,
    name: String,
    level: i32,
    school: NamedReference,
    casting_time: String,
    range: String,
    duration: String,
    #[serde(default)]
    desc: Vec<String>,
    #[serde(default)]
    classes: Vec<NamedReference>,
}

impl SpellDetailResponse {
    fn into_spell(self) -> SrdSpell {
        SrdSpell {
            index: self.index,
            name: self.name,
            level: self.level,
            school: self.school.name,
            casting_time: self.casting_time,
            range: self.range,
            duration: self.duration,
            description: self.desc.join("\n"),
            classes: self.classes.into_iter().map(|c| c.name).collect(),
            cached_at: None,
        }
    }
}

fn upstream(context: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::UpstreamError, format!("{}: {}", context, err))
}
