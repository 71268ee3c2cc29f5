use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::SupabaseConfig;
use crate::models::Profile;
use crate::store::{expect_single, ProfileStore, StoreError};

const PROFILES_PATH: &str = "/rest/v1/profiles";

/// Reads profiles through the managed backend's REST gateway.
///
/// Built even when configuration is absent; every call then fails with
/// `StoreError::ConfigMissing`, which the browse view degrades to "0 results".
#[derive(Clone)]
pub struct RestProfileStore {
    client: Client,
    config: Option<SupabaseConfig>,
}

impl RestProfileStore {
    pub fn new(client: Client, config: Option<SupabaseConfig>) -> Self {
        Self { client, config }
    }

    async fn fetch(&self, query: &[(&str, String)]) -> Result<Vec<Profile>, StoreError> {
        let config = self.config.as_ref().ok_or(StoreError::ConfigMissing)?;
        let url = format!("{}{PROFILES_PATH}", config.base_url());

        let response = self
            .client
            .get(&url)
            .header("apikey", &config.anon_key)
            .bearer_auth(&config.anon_key)
            .header("accept", "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let rows: Vec<Profile> = response.json().await?;
        debug!("REST gateway returned {} profiles", rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl ProfileStore for RestProfileStore {
    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        self.fetch(&[
            ("select", "*".to_string()),
            ("order", "created_at.desc".to_string()),
        ])
        .await
    }

    async fn get_profile(&self, id: &str) -> Result<Profile, StoreError> {
        let rows = self
            .fetch(&[("select", "*".to_string()), ("id", format!("eq.{id}"))])
            .await?;
        expect_single(rows, id)
    }
}
