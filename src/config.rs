//! Configuration management for the soniq preview player.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials,
//! endpoint URLs, and the local callback server address.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoint URLs, scope, server address)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `soniq/.env`. A missing `.env` file is not an
/// error; in that case configuration comes from the process environment and
/// the built-in defaults.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/soniq/.env`
/// - macOS: `~/Library/Application Support/soniq/.env`
/// - Windows: `%LOCALAPPDATA%/soniq/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("soniq/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Defaults cover everything except the client id and redirect URI, so a
    // missing .env is fine when those are exported in the environment.
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the bind address for the local OAuth callback server.
///
/// Reads the `SERVER_ADDRESS` environment variable, falling back to
/// `127.0.0.1:8888`. The port must match the redirect URI registered with
/// the Spotify application.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8888".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_API_REDIRECT_URI` environment variable which
/// specifies the callback URL that Spotify redirects to after user
/// authorization. This must match the redirect URI registered in the Spotify
/// application settings and must point at the local callback server.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the OAuth scope string requested during authorization.
///
/// Reads `SPOTIFY_API_AUTH_SCOPE`, defaulting to the two minimal scopes the
/// catalog endpoints need: `user-read-email user-read-private`.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE")
        .unwrap_or_else(|_| "user-read-email user-read-private".to_string())
}

/// Returns the Spotify OAuth authorization URL.
///
/// Reads `SPOTIFY_API_AUTH_URL`, defaulting to the production authorize
/// endpoint. This is where users are sent to grant permissions.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Reads `SPOTIFY_API_TOKEN_URL`, defaulting to the production token
/// endpoint. Used in the final step of the PKCE flow to exchange the
/// authorization code for an access token.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, defaulting to `https://api.spotify.com/v1`.
/// Used for all catalog operations after authentication.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}
