//! # CLI Module
//!
//! The command-line interface layer for soniq. It implements the user-facing
//! commands and coordinates between the Spotify integration, the persisted
//! state managers, and the player queue.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth PKCE flow
//! - [`logout`] - Clears the token, the PKCE verifier, and preferences,
//!   returning to a clean unauthenticated state
//!
//! ### Catalog
//!
//! - [`browse`] - Displays featured playlists as a table
//! - [`search`] - Displays matching previewable tracks as a table
//! - [`me`] - Shows the authenticated user's profile
//!
//! ### Playback
//!
//! - [`play`] - Fills the player queue from a playlist or a search query
//!   and runs the interactive preview player
//!
//! ### Preferences
//!
//! - [`config`] - Shows or updates the persisted preferences
//!
//! ## Error Handling Philosophy
//!
//! Authentication problems degrade to the logged-out state with a pointer
//! to `soniq auth`; catalog errors surface as user-visible warnings; queue
//! guards are silent. The `error!` macro (which exits) is used only at this
//! boundary.

mod auth;
mod browse;
mod me;
mod play;
mod prefs;
mod search;

pub use auth::auth;
pub use auth::logout;
pub use browse::browse;
pub use me::me;
pub use play::play;
pub use prefs::config;
pub use search::search;
