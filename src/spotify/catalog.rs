use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{
        FeaturedPlaylistsResponse, MeResponse, PlaylistSummary, PlaylistTracksResponse,
        SearchResponse, TrackDescriptor,
    },
    utils,
};

/// Retrieves the authenticated user's profile.
pub async fn get_me(token: &str) -> Result<MeResponse, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let response = get_with_retry(&api_url, token, &[]).await?;
    response.json::<MeResponse>().await
}

/// Retrieves the featured playlists for the home view.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `country` - ISO country code used for regional curation
/// * `limit` - Maximum number of playlists to return (1-50)
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried after a 10-second delay. Every
/// other error is propagated immediately; the caller surfaces it to the
/// user.
pub async fn get_featured_playlists(
    token: &str,
    country: &str,
    limit: u32,
) -> Result<Vec<PlaylistSummary>, reqwest::Error> {
    let api_url = format!(
        "{uri}/browse/featured-playlists",
        uri = &config::spotify_apiurl()
    );

    let response = get_with_retry(
        &api_url,
        token,
        &[
            ("country", country.to_string()),
            ("limit", limit.to_string()),
        ],
    )
    .await?;

    let res = response.json::<FeaturedPlaylistsResponse>().await?;
    Ok(res.playlists.items)
}

/// Retrieves a playlist's tracks as playable descriptors.
///
/// Entries without a track object or without a 30-second preview URL are
/// dropped; the player queue only ever holds playable items.
pub async fn get_playlist_tracks(
    token: &str,
    playlist_id: &str,
    limit: u32,
) -> Result<Vec<TrackDescriptor>, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let response = get_with_retry(&api_url, token, &[("limit", limit.to_string())]).await?;

    let res = response.json::<PlaylistTracksResponse>().await?;
    let tracks = res.items.into_iter().filter_map(|item| item.track).collect();
    Ok(utils::to_descriptors(tracks))
}

/// Searches tracks by free-text query, returning playable descriptors.
pub async fn search_tracks(
    token: &str,
    query: &str,
    limit: u32,
) -> Result<Vec<TrackDescriptor>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let response = get_with_retry(
        &api_url,
        token,
        &[
            ("q", query.to_string()),
            ("type", "track".to_string()),
            ("limit", limit.to_string()),
        ],
    )
    .await?;

    let res = response.json::<SearchResponse>().await?;
    Ok(utils::to_descriptors(res.tracks.items))
}

/// Bearer-authenticated GET with retry on 502 Bad Gateway.
async fn get_with_retry(
    api_url: &str,
    token: &str,
    query: &[(&str, String)],
) -> Result<reqwest::Response, reqwest::Error> {
    loop {
        let client = Client::new();
        let response = client
            .get(api_url)
            .query(query)
            .bearer_auth(token)
            .send()
            .await;

        match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => return Ok(valid_response),
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err); // network or reqwest error
            }
        }
    }
}
