//! # osint-api-client
//!
//! Client for the relay's command endpoint: one `POST <api_root>/api/command` per lookup, carrying
//! `{"api_key", "command"}` and answering with an [`ApiEnvelope`].
//!
//! [`LookupClient`] is the seam handlers depend on; [`HttpLookupClient`] is the reqwest implementation.
//! Any failure (transport, timeout, non-2xx, malformed body) is a single `anyhow::Error`: callers only
//! tell "ok" from "not ok". There are no retries.

mod client;
mod config;
mod envelope;

pub use client::{mask_token, HttpLookupClient, LookupClient, COMMAND_PATH};
pub use config::{
    EnvLookupApiConfig, LookupApiConfig, DEFAULT_API_ROOT, DEFAULT_TIMEOUT_SECS,
};
pub use envelope::ApiEnvelope;
