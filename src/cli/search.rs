use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    management::TokenManager,
    spotify::catalog,
    types::TrackTableRow,
    warning,
};

pub async fn search(query: String, limit: u32) {
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
    pb.set_message("Searching tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let tracks = catalog::search_tracks(token_mgr.access_token(), &query, limit).await;
    pb.finish_and_clear();

    match tracks {
        Ok(tracks) => {
            if tracks.is_empty() {
                info!("No previewable tracks found for '{}'.", query);
                return;
            }

            let table_rows: Vec<TrackTableRow> = tracks
                .into_iter()
                .enumerate()
                .map(|(i, t)| TrackTableRow {
                    number: i + 1,
                    title: t.name,
                    artist: t.artist,
                    id: t.id,
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!("Search failed. Err: {}", e),
    }
}
