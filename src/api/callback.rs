use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{
    spotify::auth::{self, AuthError, RedirectOutcome},
    types::Token,
    warning,
};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<Token>>>>,
) -> Html<&'static str> {
    match auth::complete_redirect(&params).await {
        Ok(RedirectOutcome::NoCode) => Html("<h4>Missing authorization code.</h4>"),
        Ok(RedirectOutcome::Authenticated(token)) => {
            // signal the waiting auth command
            let mut state = shared_state.lock().await;
            *state = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close this browser window.</p>")
        }
        Err(AuthError::MissingVerifier) => Html("<h4>Missing PKCE code verifier.</h4>"),
        Err(e) => {
            warning!("Token exchange failed: {:?}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}
