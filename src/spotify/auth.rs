use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config, error,
    error::{Result, SpotifyError},
    management::TokenManager,
    server::start_api_server,
    success,
    types::{AuthAttempt, Token, TokenResponse},
    utils, warning,
};

/// Initiates the complete OAuth 2.0 authorization-code flow with Spotify.
///
/// This function orchestrates the entire authentication process:
/// 1. Generating a random `state` parameter to tie the callback to this flow
/// 2. Starting a local callback server
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the callback handler to deposit an exchanged token
/// 5. Persisting the obtained token for future use
///
/// The code exchange itself happens in the callback handler, which must use
/// the exact redirect URI that was sent with the authorize URL; the upstream
/// rejects the exchange when the two differ.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe shared state carrying the `state` parameter
///   and the resulting token between this flow and the callback handler
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - Token persistence failures terminate the program with an error
/// - Authentication timeouts or failures terminate with an error message
pub async fn auth(shared_state: Arc<Mutex<Option<AuthAttempt>>>) {
    let csrf_state = utils::generate_state();

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&state={state}&scope={scope}&show_dialog=true",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        state = csrf_state,
        scope = &config::spotify_scope()
    );

    // Store the state parameter before redirecting
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthAttempt {
            csrf_state: csrf_state.clone(),
            token: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            let token_manager = TokenManager::new(t);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to store: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Waits for the OAuth callback to complete and return a token.
///
/// Polls the shared state for a completed authentication token with a
/// 60-second timeout. This function runs concurrently with the callback
/// handler that populates the token after a successful code exchange.
///
/// Returns `Some(Token)` if authentication completes within the timeout
/// period, or `None` otherwise.
async fn wait_for_token(shared_state: Arc<Mutex<Option<AuthAttempt>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(attempt) = lock.as_ref() {
            if let Some(token) = &attempt.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for an access/refresh token pair.
///
/// Completes the OAuth 2.0 flow by posting the one-time authorization code
/// together with the redirect URI used at authorization time. The client
/// authenticates with a Basic `client_id:client_secret` header.
///
/// # Arguments
///
/// * `code` - Authorization code received from the OAuth callback
/// * `redirect_uri` - The exact redirect URI sent with the authorize URL
///
/// # Errors
///
/// Fails with [`SpotifyError::AuthExchange`] when the upstream rejects the
/// request (wrong or expired code, redirect URI mismatch) or the response
/// body cannot be decoded.
pub async fn exchange_code(code: &str, redirect_uri: &str) -> Result<Token> {
    let client = Client::new();
    let response = client
        .post(config::spotify_apitoken_url())
        .header("Authorization", basic_credentials())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await
        .map_err(|e| SpotifyError::AuthExchange(e.to_string()))?;

    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SpotifyError::AuthExchange(body));
    }

    let parsed = response
        .json::<TokenResponse>()
        .await
        .map_err(|e| SpotifyError::AuthExchange(e.to_string()))?;

    let refresh_token = parsed.refresh_token.ok_or_else(|| {
        SpotifyError::AuthExchange("token response missing refresh_token".to_string())
    })?;

    Ok(Token {
        access_token: parsed.access_token,
        refresh_token,
        scope: parsed.scope,
        expires_in: parsed.expires_in,
        obtained_at: Utc::now().timestamp(),
    })
}

/// Refreshes an expired access token using a refresh token.
///
/// Exchanges a refresh token for a new access token so authenticated access
/// continues without the user re-authorizing. The upstream may or may not
/// rotate the refresh token; when none is returned, the existing one remains
/// valid and is carried forward into the new token state.
///
/// # Errors
///
/// Fails with [`SpotifyError::AuthRefresh`] when the upstream rejects the
/// refresh token (invalid or revoked) or the response cannot be decoded.
pub async fn refresh_token(refresh: &str) -> Result<Token> {
    let client = Client::new();
    let response = client
        .post(config::spotify_apitoken_url())
        .header("Authorization", basic_credentials())
        .form(&[("grant_type", "refresh_token"), ("refresh_token", refresh)])
        .send()
        .await
        .map_err(|e| SpotifyError::AuthRefresh(e.to_string()))?;

    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SpotifyError::AuthRefresh(body));
    }

    let parsed = response
        .json::<TokenResponse>()
        .await
        .map_err(|e| SpotifyError::AuthRefresh(e.to_string()))?;

    Ok(Token {
        access_token: parsed.access_token,
        refresh_token: parsed.refresh_token.unwrap_or_else(|| refresh.to_string()),
        scope: parsed.scope,
        expires_in: parsed.expires_in,
        obtained_at: Utc::now().timestamp(),
    })
}

fn basic_credentials() -> String {
    let raw = format!(
        "{}:{}",
        config::spotify_client_id(),
        config::spotify_client_secret()
    );
    format!("Basic {}", STANDARD.encode(raw))
}
