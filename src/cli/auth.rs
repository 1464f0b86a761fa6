use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{management::TokenManager, spotify, success, types::AuthAttempt, warning};

pub async fn auth(shared_state: Arc<Mutex<Option<AuthAttempt>>>) {
    spotify::auth::auth(shared_state).await;
}

pub async fn logout() {
    match TokenManager::logout().await {
        Ok(()) => success!("Logged out. Stored token state destroyed."),
        Err(_) => warning!("No stored token state to destroy."),
    }
}
