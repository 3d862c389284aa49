//! Error types for the joke API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently
//! distinguish "nothing matched the request" (e.g. an unknown category)
//! from "the server returned an unexpected status." Transport and decode
//! failures keep the underlying `reqwest::Error` as their source so callers
//! can inspect the root cause instead of a flattened message.

/// Errors returned by every fallible operation in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP round-trip failed or the body could not be decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server returned 404 — nothing matched the request.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The search query is shorter than the upstream minimum of 3 characters.
    /// Detected before any network traffic.
    #[error("search query {query:?} is too short ({len} characters, minimum 3)")]
    QueryTooShort { query: String, len: usize },

    /// The shared HTTP transport could not be constructed.
    #[error("failed to initialize the shared HTTP transport")]
    Init(#[source] reqwest::Error),
}
