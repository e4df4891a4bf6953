use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Bearer token obtained from the PKCE code exchange.
///
/// There is no refresh token: the flow requests none, and an expired token
/// simply makes catalog calls fail until the user authenticates again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    /// Unix timestamp of the exchange. Informational only.
    pub obtained_at: u64,
}

/// Where the current token came from. Not serialized; assigned when a
/// `TokenManager` is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenProvenance {
    /// Freshly obtained from a code exchange in this process.
    Exchanged,
    /// Loaded from the on-disk cache.
    Cached,
}

/// One playable item: everything the player needs to render and play a
/// 30-second preview. Tracks without a preview URL never become descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDescriptor {
    pub id: String,
    pub name: String,
    /// All artist names joined with ", " for display.
    pub artist: String,
    pub cover: Option<String>,
    pub preview: String,
}

/// Persisted user preferences, the `soniq_prefs` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: String,
    pub accent: String,
    pub font: String,
    pub lang: String,
    pub quality: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            theme: "light".to_string(),
            accent: "#00bcd4".to_string(),
            font: "'Poppins', sans-serif".to_string(),
            lang: "es".to_string(),
            quality: "high".to_string(),
        }
    }
}

/// Profile of the authenticated user, the post-login identity check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// Null for accounts without a public display name.
    pub display_name: Option<String>,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedPlaylistsResponse {
    pub playlists: PlaylistPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistPage {
    pub items: Vec<PlaylistSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    pub tracks: TrackCount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackCount {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    /// Null for removed or unavailable entries.
    pub track: Option<ApiTrack>,
}

/// Track object as the catalog endpoints return it. `preview_url` is null
/// for most region-restricted tracks, `id` for local files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTrack {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    pub album: Option<AlbumRef>,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracks {
    pub items: Vec<ApiTrack>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub tracks: u64,
    pub id: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    /// 1-based, matching the numbers the player accepts.
    pub number: usize,
    pub title: String,
    pub artist: String,
    pub id: String,
}
