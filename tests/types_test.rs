use soniq::types::{
    ApiTrack, FeaturedPlaylistsResponse, MeResponse, PlaylistTracksResponse, Preferences,
    SearchResponse,
};
use soniq::utils::{join_artists, to_descriptor, to_descriptors};

#[test]
fn test_featured_playlists_shape() {
    let json = r#"{
        "playlists": {
            "items": [
                {
                    "id": "37i9dQZF1DXcBWIGoYBM5M",
                    "name": "Today's Top Hits",
                    "images": [{"url": "https://images.example/cover.jpg"}],
                    "tracks": {"total": 50}
                },
                {
                    "id": "37i9dQZF1DX0XUsuxWHRQd",
                    "name": "RapCaviar",
                    "images": [],
                    "tracks": {"total": 75}
                }
            ]
        }
    }"#;

    let res: FeaturedPlaylistsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(res.playlists.items.len(), 2);
    assert_eq!(res.playlists.items[0].name, "Today's Top Hits");
    assert_eq!(res.playlists.items[0].tracks.total, 50);
    assert!(res.playlists.items[1].images.is_empty());
}

#[test]
fn test_playlist_tracks_filter_non_previewable() {
    let json = r#"{
        "items": [
            {"track": {
                "id": "a1",
                "name": "With Preview",
                "artists": [{"name": "Artist A"}],
                "album": {"images": [{"url": "https://images.example/a.jpg"}]},
                "preview_url": "https://previews.example/a.mp3"
            }},
            {"track": {
                "id": "b2",
                "name": "No Preview",
                "artists": [{"name": "Artist B"}],
                "album": {"images": []},
                "preview_url": null
            }},
            {"track": null}
        ]
    }"#;

    let res: PlaylistTracksResponse = serde_json::from_str(json).unwrap();
    let tracks: Vec<ApiTrack> = res.items.into_iter().filter_map(|i| i.track).collect();
    let descriptors = to_descriptors(tracks);

    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].id, "a1");
    assert_eq!(descriptors[0].preview, "https://previews.example/a.mp3");
    assert_eq!(
        descriptors[0].cover.as_deref(),
        Some("https://images.example/a.jpg")
    );
}

#[test]
fn test_search_response_shape() {
    let json = r#"{
        "tracks": {
            "items": [
                {
                    "id": "s1",
                    "name": "Found",
                    "artists": [{"name": "Someone"}],
                    "album": null,
                    "preview_url": "https://previews.example/s1.mp3"
                }
            ]
        }
    }"#;

    let res: SearchResponse = serde_json::from_str(json).unwrap();
    let descriptors = to_descriptors(res.tracks.items);
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].name, "Found");
    assert_eq!(descriptors[0].cover, None);
}

#[test]
fn test_artists_join_into_single_display_string() {
    let json = r#"{
        "id": "t1",
        "name": "Collab",
        "artists": [{"name": "First"}, {"name": "Second"}, {"name": "Third"}],
        "album": null,
        "preview_url": "https://previews.example/t1.mp3"
    }"#;

    let track: ApiTrack = serde_json::from_str(json).unwrap();
    assert_eq!(join_artists(&track), "First, Second, Third");

    let descriptor = to_descriptor(track).unwrap();
    assert_eq!(descriptor.artist, "First, Second, Third");
}

#[test]
fn test_descriptor_tolerates_missing_track_id() {
    // local files have a null id but can still carry a preview
    let json = r#"{
        "id": null,
        "name": "Local",
        "artists": [],
        "album": null,
        "preview_url": "https://previews.example/local.mp3"
    }"#;

    let track: ApiTrack = serde_json::from_str(json).unwrap();
    let descriptor = to_descriptor(track).unwrap();
    assert_eq!(descriptor.id, "");
    assert_eq!(descriptor.artist, "");
}

#[test]
fn test_me_profile_shape() {
    let json = r#"{"display_name": "Alex", "id": "alex-123", "country": "US"}"#;
    let me: MeResponse = serde_json::from_str(json).unwrap();
    assert_eq!(me.display_name.as_deref(), Some("Alex"));
    assert_eq!(me.id, "alex-123");

    // accounts without a public display name return null
    let json = r#"{"display_name": null, "id": "anon-456"}"#;
    let me: MeResponse = serde_json::from_str(json).unwrap();
    assert!(me.display_name.is_none());
    assert_eq!(me.id, "anon-456");
}

#[test]
fn test_preferences_defaults() {
    let prefs = Preferences::default();
    assert_eq!(prefs.theme, "light");
    assert_eq!(prefs.accent, "#00bcd4");
    assert_eq!(prefs.font, "'Poppins', sans-serif");
    assert_eq!(prefs.lang, "es");
    assert_eq!(prefs.quality, "high");
}

#[test]
fn test_preferences_partial_deserialization_falls_back_to_defaults() {
    let prefs: Preferences = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
    assert_eq!(prefs.theme, "dark");
    assert_eq!(prefs.accent, "#00bcd4");
    assert_eq!(prefs.quality, "high");

    let prefs: Preferences = serde_json::from_str("{}").unwrap();
    assert_eq!(prefs, Preferences::default());
}

#[test]
fn test_preferences_round_trip() {
    let mut prefs = Preferences::default();
    prefs.theme = "dark".to_string();
    prefs.lang = "en".to_string();

    let json = serde_json::to_string(&prefs).unwrap();
    let back: Preferences = serde_json::from_str(&json).unwrap();
    assert_eq!(back, prefs);
}
