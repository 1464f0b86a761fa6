//! Temporary local HTTP server that receives the OAuth callback.
//!
//! The server lives only for the duration of the `auth` command. It exposes
//! the `/callback` route Spotify redirects to after the user grants access,
//! plus a `/health` probe for troubleshooting the redirect URI setup.

use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, error, types::AuthAttempt};

/// Binds the callback server on the configured address and serves until the
/// process exits. The shared attempt state connects the callback handler to
/// the flow waiting in [`crate::spotify::auth::auth`].
pub async fn start_api_server(state: Arc<Mutex<Option<AuthAttempt>>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .layer(Extension(state));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind callback server on {}: {}", addr, e),
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Callback server failed: {}", e);
    }
}
