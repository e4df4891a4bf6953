//! # Management Module
//!
//! Persisted state for the soniq preview player. Each manager owns one
//! well-known file under the platform local data directory, the CLI analog
//! of the browser original's localStorage keys:
//!
//! - [`TokenManager`] - the bearer token (`soniq/cache/token.json`)
//! - [`VerifierManager`] - the transient PKCE verifier
//!   (`soniq/state/pkce_verifier`), alive only between login start and
//!   redirect completion
//! - [`PrefsManager`] - user preferences (`soniq/state/prefs.json`)
//!
//! All three are cleared by `soniq logout`.

mod auth;
mod prefs;
mod verifier;

pub use auth::TokenManager;
pub use prefs::PrefsManager;
pub use verifier::VerifierManager;
