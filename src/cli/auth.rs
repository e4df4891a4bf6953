use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    management::{PrefsManager, TokenManager, VerifierManager},
    spotify, success,
    types::Token,
    warning,
};

pub async fn auth(shared_state: Arc<Mutex<Option<Token>>>) {
    spotify::auth::auth(shared_state).await;
}

/// Clears all local session data: the bearer token, any pending PKCE
/// verifier, and the persisted preferences. The next invocation starts
/// unauthenticated.
pub async fn logout() {
    if let Err(e) = TokenManager::clear().await {
        warning!("Failed to clear token: {}", e);
    }
    if let Err(e) = VerifierManager::clear().await {
        warning!("Failed to clear PKCE verifier: {}", e);
    }
    if let Err(e) = PrefsManager::clear().await {
        warning!("Failed to clear preferences: {}", e);
    }

    success!("Logged out. All local session data cleared.");
}
