use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{config, spotify, types::AuthAttempt, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthAttempt>>>>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut state = shared_state.lock().await;
    let Some(ref mut attempt) = state.as_mut() else {
        return Html("<h4>No authentication in progress.</h4>");
    };

    // The echoed state must match the value sent with the authorize URL.
    if params.get("state") != Some(&attempt.csrf_state) {
        return Html("<h4>State mismatch.</h4>");
    }

    // The exchange must use the exact redirect URI from the authorize URL.
    match spotify::auth::exchange_code(code, &config::spotify_redirect_uri()).await {
        Ok(token) => {
            attempt.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}
