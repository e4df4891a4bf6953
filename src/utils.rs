use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::types::{ApiTrack, TrackDescriptor};

/// Characters RFC 7636 allows in a code verifier; all of them survive a URL
/// query string without percent-encoding.
pub const VERIFIER_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// RFC 7636 permits 43 to 128 characters; we use the maximum.
pub const DEFAULT_VERIFIER_LENGTH: usize = 128;

pub fn generate_code_verifier(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| VERIFIER_ALPHABET[rng.random_range(0..VERIFIER_ALPHABET.len())] as char)
        .collect()
}

/// S256 transform: base64url(SHA-256(verifier)) without padding. Must match
/// the provider byte-for-byte or every exchange fails.
pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

pub fn join_artists(track: &ApiTrack) -> String {
    track
        .artists
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<String>>()
        .join(", ")
}

/// Maps an API track to a playable descriptor. Tracks without a 30-second
/// preview URL are not playable and yield `None`.
pub fn to_descriptor(track: ApiTrack) -> Option<TrackDescriptor> {
    let preview = track.preview_url.clone()?;
    Some(TrackDescriptor {
        id: track.id.clone().unwrap_or_default(),
        name: track.name.clone(),
        artist: join_artists(&track),
        cover: track
            .album
            .as_ref()
            .and_then(|a| a.images.first())
            .map(|i| i.url.clone()),
        preview,
    })
}

pub fn to_descriptors(tracks: Vec<ApiTrack>) -> Vec<TrackDescriptor> {
    tracks.into_iter().filter_map(to_descriptor).collect()
}

/// Maps a track number as shown in listings and the now-playing line
/// (1-based) to a queue index. `None` for zero or non-numeric input.
pub fn parse_track_number(input: &str) -> Option<usize> {
    input.parse::<usize>().ok()?.checked_sub(1)
}
