use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config, error,
    management::{TokenManager, VerifierManager},
    server::start_api_server,
    success,
    types::Token,
    utils, warning,
};

/// Result of inspecting a redirect for an authorization code.
#[derive(Debug, Clone)]
pub enum RedirectOutcome {
    /// No `code` parameter present. Not an error: most requests to the
    /// callback route are simply not post-authorization redirects.
    NoCode,
    /// The code was exchanged; the token is persisted and ready to use.
    Authenticated(Token),
}

/// Failures of the redirect-completion half of the PKCE flow. None of these
/// are fatal: the caller stays unauthenticated and may start a fresh login.
#[derive(Debug)]
pub enum AuthError {
    /// A code arrived but no verifier is persisted, so the exchange cannot
    /// be proven. The flow was started in a different session or not at all.
    MissingVerifier,
    /// The token endpoint rejected the exchange (expired or malformed code,
    /// challenge mismatch, provider error). Never retried.
    ExchangeRejected(StatusCode),
    /// The token endpoint answered 2xx but without an `access_token` field.
    MalformedResponse,
    /// Network-level failure talking to the token endpoint.
    Request(reqwest::Error),
    /// The exchanged token could not be written to the cache.
    Storage(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Request(err)
    }
}

/// Runs the login half of the OAuth 2.0 PKCE flow.
///
/// This function orchestrates everything up to the redirect:
/// 1. Generates a fresh PKCE code verifier and derives its challenge
/// 2. Persists the verifier so the callback can complete the exchange
/// 3. Starts the local callback server
/// 4. Opens the authorization URL in the user's browser
/// 5. Waits for the callback to deposit the exchanged token
///
/// The browser navigation is a one-way street: execution continues only
/// when the provider redirects to the local `/callback` route, which runs
/// [`complete_redirect`] and signals this function through `shared_state`.
///
/// # Arguments
///
/// * `shared_state` - Completion signal shared with the callback handler;
///   holds the token once the exchange succeeds
///
/// # Error Handling
///
/// - Browser launch failures print the URL for manual navigation
/// - Verifier persistence failures terminate with an error, since the
///   exchange could never succeed without it
/// - A 60-second timeout without a callback terminates with an error
pub async fn auth(shared_state: Arc<Mutex<Option<Token>>>) {
    // generate PKCE verifier and challenge; fresh for every attempt
    let code_verifier = utils::generate_code_verifier(utils::DEFAULT_VERIFIER_LENGTH);
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    // the verifier must survive the redirect round-trip
    if let Err(e) = VerifierManager::new(code_verifier).persist().await {
        error!("Failed to store PKCE verifier: {}", e);
    }

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    let auth_url = build_authorize_url(&code_challenge);

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    match wait_for_token(shared_state).await {
        Some(_) => {
            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Constructs the authorization URL for the PKCE flow.
///
/// The challenge travels to the provider exactly once; only the verifier is
/// kept locally. The scope list is space-separated per OAuth, so the
/// separators must be percent-encoded before they reach the query string.
pub fn build_authorize_url(code_challenge: &str) -> String {
    format!(
        "{spotify_auth_url}?response_type=code&client_id={client_id}&scope={scope}&redirect_uri={redirect_uri}&code_challenge_method=S256&code_challenge={code_challenge}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        scope = &config::spotify_scope().replace(' ', "%20"),
        redirect_uri = &config::spotify_redirect_uri(),
        code_challenge = code_challenge,
    )
}

/// Completes the redirect half of the PKCE flow.
///
/// Inspects the redirect's query parameters for an authorization `code`.
/// Without one this returns [`RedirectOutcome::NoCode`] and performs no
/// network call. With one, the previously persisted verifier is loaded
/// (failing with [`AuthError::MissingVerifier`], again without a network
/// call), the code is exchanged for a token, and on success the token is
/// persisted and the verifier deleted so neither the code nor the verifier
/// can be replayed.
///
/// # Arguments
///
/// * `params` - Query parameters of the redirect request
///
/// # Returns
///
/// - `Ok(RedirectOutcome::NoCode)` - not a post-authorization redirect
/// - `Ok(RedirectOutcome::Authenticated(token))` - token persisted
/// - `Err(AuthError)` - the exchange could not proceed or failed
pub async fn complete_redirect(
    params: &HashMap<String, String>,
) -> Result<RedirectOutcome, AuthError> {
    let Some(code) = params.get("code") else {
        return Ok(RedirectOutcome::NoCode);
    };

    let verifier_mgr = VerifierManager::load()
        .await
        .map_err(|_| AuthError::MissingVerifier)?;

    let token = exchange_code_pkce(code, verifier_mgr.verifier()).await?;

    let token_mgr = TokenManager::new(token.clone());
    token_mgr
        .persist()
        .await
        .map_err(|e| AuthError::Storage(e))?;

    // one-shot: the verifier must not outlive the exchange
    let _ = VerifierManager::clear().await;

    Ok(RedirectOutcome::Authenticated(token))
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// POSTs the form-encoded grant to the token endpoint. The verifier proves
/// that the client completing the flow is the one that started it. A
/// non-2xx answer means the code was expired, malformed, or the challenge
/// did not match; the provider does not distinguish further and neither do
/// we.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, AuthError> {
    let client_id = &config::spotify_client_id();
    let redirect_uri = &config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("client_id", client_id),
            ("code_verifier", verifier),
        ])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        return Err(AuthError::ExchangeRejected(status));
    }

    let json: Value = res.json().await?;
    let access_token = json["access_token"]
        .as_str()
        .ok_or(AuthError::MalformedResponse)?;

    Ok(Token {
        access_token: access_token.to_string(),
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// Waits for the OAuth callback to complete and deposit a token.
///
/// Polls the shared state once a second with a 60-second timeout, running
/// concurrently with the callback handler.
async fn wait_for_token(shared_state: Arc<Mutex<Option<Token>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref() {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
