use std::path::PathBuf;

use chrono::Utc;

use crate::{
    error::{Result, SpotifyError},
    spotify,
    types::Token,
};

/// Session-scoped token store.
///
/// Holds the current token state and persists it as JSON in the local data
/// directory. The lifecycle follows
/// `NoToken -> Authorized -> Expired -> Authorized -> Revoked`: expiry is a
/// read-time check in [`TokenManager::get_valid_token`], refresh happens on
/// demand, and [`TokenManager::logout`] destroys the store so only a full
/// re-authorization can continue.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    /// Loads the stored token state.
    ///
    /// A missing store means no authentication has happened (or the session
    /// was revoked) and surfaces as
    /// [`SpotifyError::Unauthenticated`]; a present but undecodable store is
    /// a [`SpotifyError::Store`] error.
    pub async fn load() -> Result<Self> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|_| SpotifyError::Unauthenticated)?;
        let token: Token =
            serde_json::from_str(&content).map_err(|e| SpotifyError::Store(e.to_string()))?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<()> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| SpotifyError::Store(e.to_string()))?;
        }

        let json =
            serde_json::to_string_pretty(&self.token).map_err(|e| SpotifyError::Store(e.to_string()))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| SpotifyError::Store(e.to_string()))
    }

    /// Returns an access token that is valid right now.
    ///
    /// Checks expiry against wall-clock time before every use; an expired
    /// token is never handed out. On expiry the stored refresh token is
    /// exchanged for a fresh access token and the rotated state is persisted
    /// before returning.
    ///
    /// # Errors
    ///
    /// Propagates [`SpotifyError::AuthRefresh`] when the upstream rejects the
    /// refresh token; the caller must re-authenticate in that case.
    pub async fn get_valid_token(&mut self) -> Result<String> {
        if self.is_expired() {
            let refreshed = spotify::auth::refresh_token(&self.token.refresh_token).await?;
            self.token = refreshed;
            self.persist().await?;
        }

        Ok(self.token.access_token.clone())
    }

    fn is_expired(&self) -> bool {
        self.token.is_expired_at(Utc::now().timestamp())
    }

    /// Destroys the stored token state. After this, no refresh is possible
    /// and a new full authorization is required.
    pub async fn logout() -> Result<()> {
        let path = Self::token_path();
        async_fs::remove_file(path)
            .await
            .map_err(|_| SpotifyError::Unauthenticated)
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("splancli/cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
