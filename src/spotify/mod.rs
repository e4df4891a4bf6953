//! # Spotify Integration Module
//!
//! The integration layer between soniq and the Spotify Web API. It owns all
//! HTTP communication: the OAuth 2.0 PKCE flow and the catalog reads that
//! feed the player queue.
//!
//! ## Core Modules
//!
//! ### Authentication
//!
//! [`auth`] implements the Authorization-Code-with-PKCE flow:
//! 1. **Code Verifier Generation**: random 128-character verifier over the
//!    RFC 7636 alphabet
//! 2. **Challenge Creation**: `base64url(SHA-256(verifier))`, no padding
//! 3. **Authorization Request**: browser navigation to the authorize
//!    endpoint with the challenge
//! 4. **Redirect Completion**: the local callback server receives the
//!    authorization code and exchanges it, together with the persisted
//!    verifier, for a bearer token
//! 5. **Token Persistence**: the token is cached for future catalog calls
//!
//! No client secret is stored or transmitted, and no refresh token is
//! requested: an expired token means re-running `soniq auth`.
//!
//! ### Catalog
//!
//! [`catalog`] covers the three read endpoints the player needs:
//! - `GET /browse/featured-playlists` - the home view
//! - `GET /playlists/{id}/tracks` - queue material from a playlist
//! - `GET /search?type=track` - queue material from a query
//!
//! All catalog calls authenticate with `Authorization: Bearer` and retry
//! 502 responses after a delay; every other non-success status propagates
//! to the caller as a `reqwest::Error`.
//!
//! ## Error Types
//!
//! - [`auth::AuthError`] - exchange failures, a missing PKCE verifier, or
//!   storage problems; callers fall back to the unauthenticated state
//! - `reqwest::Error` - HTTP and catalog errors

pub mod auth;
pub mod catalog;
