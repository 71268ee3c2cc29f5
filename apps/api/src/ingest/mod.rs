// Ingestion proxy: validates the payload and forwards it to the remote edge function.
// Nothing here touches the profile store directly.

pub mod client;
pub mod handlers;

pub use client::{IngestClient, IngestPayload};
