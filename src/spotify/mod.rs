//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! analysis commands: authentication, paginated data retrieval, and single
//! resource lookups. It handles all HTTP communication and keeps the rest of
//! the application free of wire-level concerns.
//!
//! ## Core Modules
//!
//! ### Authentication
//!
//! [`auth`] implements the OAuth 2.0 authorization-code flow:
//! - builds the authorize URL (with a random `state` parameter) and opens it
//!   in the user's browser,
//! - runs a temporary local HTTP server to receive the callback,
//! - exchanges the authorization code for an access/refresh token pair using
//!   the confidential-client Basic credentials header,
//! - refreshes expired access tokens on demand.
//!
//! ### Pagination
//!
//! [`pagination`] materializes cursor-paginated resources. Every Spotify
//! listing endpoint returns a paging object with an `items` array and a
//! `next` URL; the collector follows `next` strictly sequentially (each
//! page's URL is only known from the previous response) until it is absent.
//! The page-fetch capability is injected, which keeps the loop testable
//! without a network.
//!
//! ### Resources
//!
//! [`playlists`] and [`tracks`] cover the endpoints the analysis needs:
//!
//! - `GET /me/playlists` - the user's playlists, all pages
//! - `GET /playlists/{id}/tracks` - a playlist's tracks, all pages, with
//!   deleted-catalog placeholders filtered out
//! - `GET /me/tracks` - saved ("liked") tracks, all pages
//! - `GET /me` - the user's profile
//! - `GET /tracks/{id}`, `GET /playlists/{id}` - lookups by permalink/URI
//!
//! ## Error Handling
//!
//! All functions return [`crate::error::SpotifyError`]. A failed page fetch
//! aborts the whole collection for that resource; there are no retries and no
//! partial results. Token-endpoint rejections surface as `AuthExchange` /
//! `AuthRefresh`.
//!
//! ## Rate Limiting
//!
//! Fetches for one resource are sequential by necessity (cursor chain), and
//! the per-playlist track fetches are issued one playlist at a time on
//! purpose, trading throughput for politeness toward the API quota.

pub mod auth;
pub mod pagination;
pub mod playlists;
pub mod tracks;
