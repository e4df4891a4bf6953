use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    management::TokenManager,
    spotify::catalog,
    types::PlaylistTableRow,
    warning,
};

pub async fn browse(country: String, limit: u32) {
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
    pb.set_message("Fetching featured playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let playlists = catalog::get_featured_playlists(token_mgr.access_token(), &country, limit).await;
    pb.finish_and_clear();

    match playlists {
        Ok(playlists) => {
            let table_rows: Vec<PlaylistTableRow> = playlists
                .into_iter()
                .map(|pl| PlaylistTableRow {
                    name: pl.name,
                    tracks: pl.tracks.total,
                    id: pl.id,
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!("Failed to fetch featured playlists. Err: {}", e),
    }
}
