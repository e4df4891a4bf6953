use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    error, info,
    management::TokenManager,
    player::PlayerQueue,
    spotify::catalog,
    types::TrackDescriptor,
    utils, warning,
};

/// Fills the player queue from a playlist or a search query and runs the
/// interactive preview player. Exactly one source must be given.
pub async fn play(playlist: Option<String>, search: Option<String>, limit: u32) {
    let token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run soniq auth\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let tracks = match (playlist, search) {
        (Some(playlist_id), None) => {
            catalog::get_playlist_tracks(token_mgr.access_token(), &playlist_id, limit).await
        }
        (None, Some(query)) => {
            catalog::search_tracks(token_mgr.access_token(), &query, limit).await
        }
        _ => {
            pb.finish_and_clear();
            error!("Pass exactly one of --playlist <id> or --search <query>.");
        }
    };
    pb.finish_and_clear();

    let tracks = match tracks {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to fetch tracks. Err: {}", e),
    };

    let mut queue = PlayerQueue::new();
    match queue.load(tracks) {
        Some(track) => {
            let track = track.clone();
            now_playing(&track, &queue);
            open_preview(&track);
        }
        None => {
            warning!("No previewable tracks to play.");
            return;
        }
    }

    info!(
        "Commands: [n]ext, [p]revious, track number 1-{}, [o]pen preview again, [q]uit",
        queue.len()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let command = line.trim();
        let track = match command {
            "" => continue,
            "q" | "quit" => break,
            "n" | "next" => queue.next().cloned(),
            "p" | "prev" | "previous" => queue.previous().cloned(),
            "o" | "open" => {
                if let Some(track) = queue.current() {
                    open_preview(track);
                }
                continue;
            }
            other => match utils::parse_track_number(other) {
                Some(index) => {
                    let selected = queue.play_at(index).cloned();
                    if selected.is_none() {
                        warning!("No track number {}.", other);
                        continue;
                    }
                    selected
                }
                None => {
                    warning!("Unknown command '{}'.", other);
                    continue;
                }
            },
        };

        if let Some(track) = track {
            now_playing(&track, &queue);
            open_preview(&track);
        }
    }
}

fn now_playing(track: &TrackDescriptor, queue: &PlayerQueue) {
    let position = queue.position().map_or(0, |i| i + 1);
    println!(
        "[{}] {} — {} ({}/{})",
        "♪".blue().bold(),
        track.name.bold(),
        track.artist,
        position,
        queue.len()
    );
}

fn open_preview(track: &TrackDescriptor) {
    if webbrowser::open(&track.preview).is_err() {
        warning!("Failed to open preview. URL: {}", track.preview);
    }
}
