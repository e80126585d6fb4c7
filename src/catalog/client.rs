use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::catalog::error::CatalogError;
use crate::catalog::types::{Creature, CreatureResponse};
use crate::config::LookupConfig;

/// Read-only client for the creature catalog.
///
/// One GET per committed search term. No retries, no caching, no timeout
/// beyond the connect timeout, no cancellation of in-flight requests;
/// staleness is handled at completion time by the caller.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &LookupConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up a creature by name.
    ///
    /// The catalog keys entries by lowercase slug, so the name is trimmed
    /// and lowercased before it goes on the wire.
    pub async fn lookup(&self, name: &str) -> Result<Creature, CatalogError> {
        let slug = name.trim().to_lowercase();
        let url = format!("{}/pokemon/{}", self.base_url, slug);
        tracing::debug!(%slug, "issuing catalog lookup");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        if !status.is_success() {
            return Err(CatalogError::Api {
                status: status.as_u16(),
            });
        }

        let raw: CreatureResponse = resp.json().await?;
        Ok(Creature::from(raw))
    }
}
