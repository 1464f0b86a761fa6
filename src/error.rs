//! Error taxonomy for authentication and data retrieval.
//!
//! Aggregation itself never fails on well-formed input; every error in this
//! crate originates at the OAuth endpoints, the paginated fetches, or the
//! local token store, and is surfaced to the CLI without automatic retries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotifyError {
    /// The upstream rejected the authorization code (wrong or expired code,
    /// redirect URI mismatch).
    #[error("authorization code exchange rejected: {0}")]
    AuthExchange(String),

    /// The upstream rejected the refresh token (invalid or revoked).
    #[error("token refresh rejected: {0}")]
    AuthRefresh(String),

    /// A page or resource fetch failed (network error or 4xx/5xx response).
    /// Aborts the whole collection; no partial result is produced.
    #[error("page fetch failed: {0}")]
    PageFetch(#[from] reqwest::Error),

    /// A track or playlist reference could not be parsed into an id.
    #[error("could not extract a {kind} id from '{input}'")]
    InvalidResourceReference { kind: &'static str, input: String },

    /// No valid token is available; a data operation was attempted without
    /// prior authentication.
    #[error("not authenticated; run `splancli auth` first")]
    Unauthenticated,

    /// The local token store could not be read, written, or decoded.
    #[error("token store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SpotifyError>;
