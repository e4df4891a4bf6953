//! # API Module
//!
//! HTTP endpoints for the local callback server that runs during the OAuth
//! login flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the post-authorization redirect from Spotify
//!   and completes the PKCE exchange. This is the single entry point for
//!   redirect completion: the registered redirect URI must point here.
//! - [`health`] - Returns application status and version for quick checks
//!   that the server is up.
//!
//! ## Security Considerations
//!
//! - The server binds to loopback and only lives for the duration of the
//!   login flow
//! - The authorization code is consumed exactly once; after a successful
//!   exchange the persisted verifier is deleted, so a replayed redirect
//!   cannot complete again

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
