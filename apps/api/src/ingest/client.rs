// Forwarder for the remote ingestion edge function.
// One POST per call with no retries; failures go straight back to the caller.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::SupabaseConfig;
use crate::errors::AppError;

const INGEST_FUNCTION_PATH: &str = "/functions/v1/ingest";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("ingest function is not configured")]
    ConfigMissing,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("edge function returned {status}: {body}")]
    Downstream { status: u16, body: String },
}

impl From<IngestError> for AppError {
    fn from(e: IngestError) -> Self {
        match e {
            IngestError::ConfigMissing => {
                AppError::ConfigMissing("SUPABASE_URL / SUPABASE_ANON_KEY".to_string())
            }
            IngestError::Downstream { status, body } => AppError::Downstream {
                status,
                message: format!("Supabase Edge Function error: {body}"),
            },
            IngestError::Http(e) => AppError::Internal(e.into()),
        }
    }
}

/// The three fields forwarded to the edge function, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestPayload {
    pub linkedin_url: String,
    pub raw_json: Value,
    pub canonical_json: Value,
}

#[derive(Clone)]
pub struct IngestClient {
    client: Client,
    config: Option<SupabaseConfig>,
}

impl IngestClient {
    pub fn new(client: Client, config: Option<SupabaseConfig>) -> Self {
        Self { client, config }
    }

    /// POSTs the payload and returns the function's JSON response on success.
    pub async fn forward(&self, payload: &IngestPayload) -> Result<Value, IngestError> {
        let config = self.config.as_ref().ok_or(IngestError::ConfigMissing)?;
        let url = format!("{}{INGEST_FUNCTION_PATH}", config.base_url());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&config.anon_key)
            .header("apikey", &config.anon_key)
            .header("content-type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Ingest function returned {}: {}", status, body);
            return Err(IngestError::Downstream {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response.json().await?;
        debug!("Ingest forwarded for {}", payload.linkedin_url);
        Ok(data)
    }
}
