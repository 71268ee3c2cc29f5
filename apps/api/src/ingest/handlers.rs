use anyhow::Context;
use axum::{extract::State, Json};
use bytes::Bytes;
use serde_json::Value;

use crate::errors::AppError;
use crate::ingest::IngestPayload;
use crate::state::AppState;

pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: linkedin_url, raw_json, canonical_json";

/// POST /api/ingest
///
/// Body is read raw so a malformed payload becomes a generic 500 rather than
/// the extractor's own rejection.
pub async fn handle_ingest(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let body: Value = serde_json::from_slice(&body).context("ingest body is not valid JSON")?;
    let payload = validate_ingest_body(&body)?;
    let data = state.ingest.forward(&payload).await?;
    Ok(Json(data))
}

/// All three fields must be present and non-empty: null, `false`, `0` and `""` count as missing.
pub fn validate_ingest_body(body: &Value) -> Result<IngestPayload, AppError> {
    let field = |name: &str| body.get(name).filter(|v| is_present(v)).cloned();

    match (field("linkedin_url"), field("raw_json"), field("canonical_json")) {
        (Some(Value::String(linkedin_url)), Some(raw_json), Some(canonical_json)) => {
            Ok(IngestPayload {
                linkedin_url,
                raw_json,
                canonical_json,
            })
        }
        _ => Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
