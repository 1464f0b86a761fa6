//! # API Module
//!
//! HTTP endpoints for the temporary local server that backs the OAuth flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles the OAuth callback from Spotify's authorization
//!   server: verifies the `state` echo and exchanges the authorization code
//!   for a token pair.
//! - [`health`] - Health check returning application status and version.
//!
//! The module is built on [Axum](https://docs.rs/axum); each endpoint is an
//! async handler wired up in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
